//! The in-memory stores that hold the group's shared state
//!
//! Each store owns its records outright and lives for as long as the process
//! does; nothing is persisted anywhere. Mutations are plain synchronous
//! `&mut self` calls, so one call is one transaction and there is nothing to
//! interleave. To share a store across threads, wrap it (or the whole
//! [`Planner`](crate::Planner)) in an `Arc<Mutex<_>>` and the lock will
//! serialize whole transactions.

mod event_store;
pub use event_store::EventStore;
pub use event_store::UPCOMING_EVENTS_LIMIT;

mod suggestion_store;
pub use suggestion_store::SuggestionStore;
