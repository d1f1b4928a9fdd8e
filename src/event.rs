//! Planned events and their RSVPs

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{Local, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::config::{read_setting, FALLBACK_EVENT_TITLE};
use crate::user::UserId;

/// A unique event identifier.
///
/// Ids are random rather than derived from the store size: size-derived ids
/// start colliding as soon as they are ever handed out from two places.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId {
    content: String,
}

impl EventId {
    /// Generate a random EventId
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self { content: s.to_string() }
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// A member's answer to an event invitation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Going,
    Maybe,
    Declined,
}

/// One member's RSVP to one event.
///
/// An event never holds two of these for the same member; answering again
/// replaces the previous answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rsvp {
    pub user_id: UserId,
    pub status: RsvpStatus,
}

impl Rsvp {
    pub fn new(user_id: &str, status: RsvpStatus) -> Self {
        Self { user_id: user_id.to_string(), status }
    }
}

/// Counts of the explicit answers on an event, one bucket per status.
///
/// Members who have not answered count towards no bucket at all, so the three
/// buckets sum to the number of RSVPs, not to the size of the group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpTally {
    pub going: usize,
    pub maybe: usize,
    pub declined: usize,
}

impl RsvpTally {
    /// How many members have answered at all
    pub fn total(&self) -> usize {
        self.going + self.maybe + self.declined
    }
}

/// The user-editable fields of an event being created, all optional.
///
/// [`Event::new`] fills whatever is missing: the configured fallback title,
/// empty description and location, and the current local time for both ends.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub location: Option<String>,
}

impl EventDraft {
    /// A draft pre-filled for a click on an empty calendar day: an evening
    /// slot from 18:00 to 20:00 on that day.
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            start_time: day.and_hms_opt(18, 0, 0),
            end_time: day.and_hms_opt(20, 0, 0),
            ..Self::default()
        }
    }
}

/// A planned occurrence on the group calendar.
///
/// Note that nothing requires `end_time` to be on or after `start_time`: the
/// planner stores whatever the creator typed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    title: String,
    description: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    location: String,
    created_by: UserId,
    rsvps: Vec<Rsvp>,
}

impl Event {
    /// Create a brand new event from a draft.
    ///
    /// This picks a new (random) event id, fills the unset fields with their
    /// defaults, and records `acting_user` as going.
    pub fn new(draft: EventDraft, acting_user: &str) -> Self {
        let title = match draft.title {
            Some(title) if !title.is_empty() => title,
            _ => read_setting(&FALLBACK_EVENT_TITLE),
        };
        let now = Local::now().naive_local();
        Self::new_with_parameters(
            EventId::random(),
            title,
            draft.description.unwrap_or_default(),
            draft.start_time.unwrap_or(now),
            draft.end_time.unwrap_or(now),
            draft.location.unwrap_or_default(),
            acting_user.to_string(),
            vec![Rsvp::new(acting_user, RsvpStatus::Going)],
        )
    }

    /// Create an event with every field already known (e.g. sample data)
    pub fn new_with_parameters(id: EventId, title: String, description: String,
                               start_time: NaiveDateTime, end_time: NaiveDateTime,
                               location: String, created_by: UserId, rsvps: Vec<Rsvp>) -> Self
    {
        Self { id, title, description, start_time, end_time, location, created_by, rsvps }
    }

    pub fn id(&self) -> &EventId      { &self.id          }
    pub fn title(&self) -> &str       { &self.title       }
    pub fn description(&self) -> &str { &self.description }
    pub fn location(&self) -> &str    { &self.location    }
    pub fn created_by(&self) -> &str  { &self.created_by  }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    /// The RSVPs recorded so far, in answering order
    pub fn rsvps(&self) -> &[Rsvp] {
        &self.rsvps
    }

    /// Whether this event starts on the given calendar day (the time of day
    /// plays no part)
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.start_time.date() == day
    }

    /// This member's current answer, if they have answered at all
    pub fn rsvp_of(&self, user_id: &str) -> Option<&Rsvp> {
        self.rsvps.iter().find(|rsvp| rsvp.user_id == user_id)
    }

    /// Record this member's answer, replacing any previous one.
    ///
    /// Answering the same thing twice in a row changes nothing.
    pub fn set_rsvp(&mut self, user_id: &str, status: RsvpStatus) {
        match self.rsvps.iter_mut().find(|rsvp| rsvp.user_id == user_id) {
            Some(rsvp) => rsvp.status = status,
            None => self.rsvps.push(Rsvp::new(user_id, status)),
        }
    }

    /// Count the explicit answers, one linear scan, nothing cached
    pub fn tally(&self) -> RsvpTally {
        let mut tally = RsvpTally::default();
        for rsvp in &self.rsvps {
            match rsvp.status {
                RsvpStatus::Going => tally.going += 1,
                RsvpStatus::Maybe => tally.maybe += 1,
                RsvpStatus::Declined => tally.declined += 1,
            }
        }
        tally
    }
}
