//! Error types for planner operations

use thiserror::Error;

use crate::event::EventId;
use crate::suggestion::SuggestionId;

/// Errors that can occur when mutating the planner stores.
///
/// None of these are fatal, and none of them leave a store half-changed: a
/// failed operation changes nothing, and the caller can correct its input and
/// try again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// A mutation referenced an event id that is not in the store
    #[error("no event with id {0}")]
    EventNotFound(EventId),

    /// A mutation referenced a suggestion id that is not in the store
    #[error("no suggestion with id {0}")]
    SuggestionNotFound(SuggestionId),

    /// A suggestion draft arrived with an absent or empty title
    #[error("a suggestion needs a non-empty title")]
    EmptySuggestionTitle,
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
