//! This crate provides an in-memory model for a small group planning events together.
//!
//! Everything hangs off a [`Planner`]: the member [`Roster`], an [`EventStore`] of planned events with their RSVPs, a [`SuggestionStore`] of ideas the group votes on, and a canned [`activity`](crate::activity) digest.
//!
//! The calendar month view is not stored anywhere: the [`month_grid`] module derives it on demand from a reference day and the current events. \
//! A [`MonthCursor`](month_grid::MonthCursor) is the only piece of view state worth keeping between renders. \
//! The [`seed`] module provides the demo dataset everything boots from.
//!
//! Nothing is persisted and nothing talks to a network: every change lives in the current process and is gone when the `Planner` is dropped (although the whole planner (de)serializes with serde if an embedder wants a snapshot).

pub mod user;
pub use user::{Roster, User};
mod event;
pub use event::{Event, EventDraft, EventId, Rsvp, RsvpStatus, RsvpTally};
mod suggestion;
pub use suggestion::{Suggestion, SuggestionDraft, SuggestionId};

pub mod store;
pub use store::{EventStore, SuggestionStore};
mod planner;
pub use planner::Planner;

pub mod month_grid;
pub mod activity;
pub mod seed;

mod error;
pub use error::{PlannerError, PlannerResult};
pub mod config;
pub mod utils;
