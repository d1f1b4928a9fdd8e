//! Group members and the roster that holds them

use serde::{Deserialize, Serialize};

use crate::config::{read_setting, UNKNOWN_USER_NAME};

/// The id of a group member.
///
/// Member ids are handed out by whatever enrolled the group; this library only
/// ever looks them up.
pub type UserId = String;

/// The id the sentinel "unknown" user answers to
pub const UNKNOWN_USER_ID: &str = "unknown";

/// The stock placeholder picture of the sentinel user
const UNKNOWN_USER_AVATAR: &str = "https://randomuser.me/api/portraits/lego/1.jpg";

/// A member of the group
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    avatar: String,
}

impl User {
    pub fn new(id: &str, name: &str, avatar: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: avatar.to_string(),
        }
    }

    /// The sentinel user that lookups resolve to when an id matches nobody.
    ///
    /// This is a named fallback rather than an error, so a view always has
    /// *something* to display next to an RSVP or a vote.
    pub fn unknown() -> Self {
        Self {
            id: UNKNOWN_USER_ID.to_string(),
            name: read_setting(&UNKNOWN_USER_NAME),
            avatar: UNKNOWN_USER_AVATAR.to_string(),
        }
    }

    pub fn id(&self) -> &str     { &self.id     }
    pub fn name(&self) -> &str   { &self.name   }
    pub fn avatar(&self) -> &str { &self.avatar }

    /// Whether this is the sentinel returned for unmatched ids
    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_USER_ID
    }
}

/// The fixed list of group members.
///
/// The planner neither adds nor removes members; the roster is read-only
/// reference data that events and suggestions point into by id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The member with this exact id, if any
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// The member with this id, or the sentinel unknown user.
    ///
    /// Unmatched ids are logged, since they usually point at a typo somewhere
    /// in hand-written data.
    pub fn user_or_unknown(&self, id: &str) -> User {
        match self.get(id) {
            Some(user) => user.clone(),
            None => {
                log::warn!("No user {} in the roster, falling back to the unknown user", id);
                User::unknown()
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
