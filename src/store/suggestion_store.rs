//! The ordered collection of event suggestions

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::suggestion::{Suggestion, SuggestionDraft, SuggestionId};

/// All suggested (not yet scheduled) events, in creation order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionStore {
    suggestions: Vec<Suggestion>,
}

impl SuggestionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an already-built suggestion (e.g. sample data) to the store
    pub fn add_suggestion(&mut self, suggestion: Suggestion) {
        self.suggestions.push(suggestion);
    }

    /// Create a suggestion from a draft, on behalf of `acting_user`, who
    /// automatically casts the first vote.
    ///
    /// Fails with [`PlannerError::EmptySuggestionTitle`], storing nothing, if
    /// the draft has an absent or empty title; the caller can prompt for a
    /// title and try again.
    pub fn create_suggestion(&mut self, draft: SuggestionDraft, acting_user: &str) -> PlannerResult<&Suggestion> {
        let suggestion = Suggestion::new(draft, acting_user)?;
        log::debug!("Created suggestion \"{}\" ({})", suggestion.title(), suggestion.id());
        self.suggestions.push(suggestion);
        Ok(self.suggestions.last().unwrap(/* we just pushed it */))
    }

    /// Flip `user_id`'s vote on a suggestion: cast it if absent, withdraw it
    /// if present. Two toggles in a row cancel out exactly.
    pub fn toggle_vote(&mut self, suggestion_id: &SuggestionId, user_id: &str) -> PlannerResult<&Suggestion> {
        let suggestion = match self.suggestions.iter_mut().find(|suggestion| suggestion.id() == suggestion_id) {
            None => return Err(PlannerError::SuggestionNotFound(suggestion_id.clone())),
            Some(suggestion) => suggestion,
        };
        suggestion.toggle_vote(user_id);
        log::debug!("\"{}\" now has {} votes", suggestion.title(), suggestion.vote_count());
        Ok(suggestion)
    }

    /// Returns a particular suggestion
    pub fn get(&self, id: &SuggestionId) -> Option<&Suggestion> {
        self.suggestions.iter().find(|suggestion| suggestion.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions.iter()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
