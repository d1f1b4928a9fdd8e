//! The ordered collection of planned events

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{PlannerError, PlannerResult};
use crate::event::{Event, EventDraft, EventId, RsvpStatus};

/// How many events [`EventStore::upcoming_events`] returns at most
pub const UPCOMING_EVENTS_LIMIT: usize = 3;

/// All planned events, in creation order.
///
/// Creation order is incidental: anything a view displays goes through the
/// selectors below or through [`MonthGrid`](crate::month_grid::MonthGrid),
/// which impose their own order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an already-built event (e.g. sample data) to the store
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Create an event from a draft, on behalf of `acting_user`.
    ///
    /// Unset draft fields get their defaults (see [`EventDraft`]) and the
    /// acting user is recorded as going. Returns the stored event.
    pub fn create_event(&mut self, draft: EventDraft, acting_user: &str) -> &Event {
        let event = Event::new(draft, acting_user);
        log::debug!("Created event \"{}\" ({})", event.title(), event.id());
        self.events.push(event);
        self.events.last().unwrap(/* we just pushed it */)
    }

    /// Record `user_id`'s answer on an event.
    ///
    /// This replaces the member's previous answer if they had one, else
    /// appends a new RSVP. Repeating the current answer changes nothing.
    pub fn upsert_rsvp(&mut self, event_id: &EventId, user_id: &str, status: RsvpStatus) -> PlannerResult<&Event> {
        let event = match self.events.iter_mut().find(|event| event.id() == event_id) {
            None => return Err(PlannerError::EventNotFound(event_id.clone())),
            Some(event) => event,
        };
        event.set_rsvp(user_id, status);
        log::debug!("{} is now {:?} on event {}", user_id, status, event_id);
        Ok(event)
    }

    /// Every event that starts on this calendar day, whatever the time of
    /// day, in store order
    pub fn events_on_day(&self, day: NaiveDate) -> Vec<&Event> {
        self.events.iter()
            .filter(|event| event.occurs_on(day))
            .collect()
    }

    /// The next few events at or after `now`, soonest first.
    ///
    /// At most [`UPCOMING_EVENTS_LIMIT`] events are returned, and events that
    /// start at the very same instant keep their store order (the sort is
    /// stable). Nothing is cached: call it again whenever "now" has moved.
    pub fn upcoming_events(&self, now: NaiveDateTime) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> = self.events.iter()
            .filter(|event| event.start_time() >= now)
            .collect();
        upcoming.sort_by_key(|event| event.start_time());
        upcoming.truncate(UPCOMING_EVENTS_LIMIT);
        upcoming
    }

    /// Returns a particular event
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
