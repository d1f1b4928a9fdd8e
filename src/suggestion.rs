//! Suggested future events and the votes they gather

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlannerError, PlannerResult};
use crate::user::UserId;

/// A unique suggestion identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuggestionId {
    content: String,
}

impl SuggestionId {
    /// Generate a random SuggestionId
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<&str> for SuggestionId {
    fn from(s: &str) -> Self {
        Self { content: s.to_string() }
    }
}

impl Display for SuggestionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// The user-editable fields of a suggestion being created.
///
/// Unlike events, suggestions have no fallback title: a draft without one is
/// rejected outright.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionDraft {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// An idea for a future event, not yet on the calendar, that members vote on
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    id: SuggestionId,
    title: String,
    description: String,
    votes: Vec<UserId>,
}

impl Suggestion {
    /// Create a brand new suggestion from a draft.
    ///
    /// This picks a new (random) id and casts `acting_user`'s vote as the
    /// first one. Fails if the draft has an absent or empty title.
    pub fn new(draft: SuggestionDraft, acting_user: &str) -> PlannerResult<Self> {
        let title = match draft.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(PlannerError::EmptySuggestionTitle),
        };
        Ok(Self::new_with_parameters(
            SuggestionId::random(),
            title,
            draft.description.unwrap_or_default(),
            vec![acting_user.to_string()],
        ))
    }

    /// Create a suggestion with every field already known (e.g. sample data)
    pub fn new_with_parameters(id: SuggestionId, title: String, description: String, votes: Vec<UserId>) -> Self {
        Self { id, title, description, votes }
    }

    pub fn id(&self) -> &SuggestionId { &self.id          }
    pub fn title(&self) -> &str       { &self.title       }
    pub fn description(&self) -> &str { &self.description }

    /// Ids of the members currently in favour, oldest vote first.
    ///
    /// This list behaves as a set: a member appears at most once.
    pub fn votes(&self) -> &[UserId] {
        &self.votes
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    /// Whether this member's vote is currently counted
    pub fn has_voted(&self, user_id: &str) -> bool {
        self.votes.iter().any(|id| id == user_id)
    }

    /// Cast the member's vote if absent, withdraw it if present.
    ///
    /// Toggling twice in a row restores the vote list exactly.
    pub fn toggle_vote(&mut self, user_id: &str) {
        if self.has_voted(user_id) {
            self.votes.retain(|id| id != user_id);
        } else {
            self.votes.push(user_id.to_string());
        }
    }
}
