//! The top-level bundle an embedding UI holds on to

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::activity::ActivityReport;
use crate::seed;
use crate::store::{EventStore, SuggestionStore};
use crate::user::{Roster, User};

/// Everything the group shares: the member roster, the planned events with
/// their RSVPs, the suggestion box, and the canned activity digest.
///
/// All of it lives in memory and vanishes with the value; there is no backing
/// store to reload from. Each mutating store method is one synchronous
/// transaction that either completes entirely or, on error, changes nothing.
/// To serve several threads, wrap the planner in an `Arc<Mutex<_>>` and the
/// lock will serialize whole transactions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Planner {
    roster: Roster,
    events: EventStore,
    suggestions: SuggestionStore,
    activity: ActivityReport,
}

impl Planner {
    /// An empty planner for this roster
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            events: EventStore::new(),
            suggestions: SuggestionStore::new(),
            activity: ActivityReport::default(),
        }
    }

    /// A planner loaded with the demo dataset, scripted relative to `today`
    pub fn seeded(today: NaiveDate) -> Self {
        let mut planner = Self::new(seed::sample_roster());
        for event in seed::sample_events(today) {
            planner.events.add_event(event);
        }
        for suggestion in seed::sample_suggestions() {
            planner.suggestions.add_suggestion(suggestion);
        }
        planner.activity = seed::sample_activity();
        planner
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventStore {
        &mut self.events
    }

    pub fn suggestions(&self) -> &SuggestionStore {
        &self.suggestions
    }

    pub fn suggestions_mut(&mut self) -> &mut SuggestionStore {
        &mut self.suggestions
    }

    /// The prepared digest for the analytics view
    pub fn activity(&self) -> &ActivityReport {
        &self.activity
    }

    /// Look up a member, falling back to the sentinel unknown user so the
    /// caller always has a name and an avatar to display
    pub fn user(&self, id: &str) -> User {
        self.roster.user_or_unknown(id)
    }
}
