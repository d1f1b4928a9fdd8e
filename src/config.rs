//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The title given to an event created from a draft that has none.
/// Feel free to override it when initing this library.
pub static FALLBACK_EVENT_TITLE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Untitled Event".to_string())));

/// The display name of the sentinel user that id lookups resolve to when nobody in the roster matches.
/// Feel free to override it when initing this library.
pub static UNKNOWN_USER_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Unknown User".to_string())));

/// Fetch the current value of a configurable string
pub(crate) fn read_setting(setting: &Lazy<Arc<Mutex<String>>>) -> String {
    setting.lock().unwrap().clone()
}
