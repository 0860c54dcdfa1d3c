//! Friend records.
//!
//! A [`Friend`] is the unit the guest list is built from. Records are
//! supplied by the caller and only ever borrowed by the traversal engine.

use serde::{Deserialize, Serialize};

use crate::invitation::Result;

/// Gender of a friend, as used by the gender filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male friend.
    Male,
    /// Female friend.
    Female,
}

impl Gender {
    /// Converts to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Parses from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// A person who may end up on the guest list.
///
/// Only `name` is required when deserializing. A missing `gender` is
/// kept as `None` and fails both gender filters.
///
/// # Example
///
/// ```
/// use guestlist_core::friend::{Friend, Gender};
///
/// let sam = Friend::new("Sam")
///     .with_gender(Gender::Male)
///     .with_best(true)
///     .with_friends(["Mat", "Sharon"]);
///
/// assert!(sam.best);
/// assert_eq!(sam.friends, vec!["Mat", "Sharon"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// Unique name; friend lists refer to people by it.
    pub name: String,
    /// Gender, if known.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Whether this is one of the best friends that seed the first circle.
    #[serde(default)]
    pub best: bool,
    /// Names of this person's friends, in the order given.
    #[serde(default)]
    pub friends: Vec<String>,
}

impl Friend {
    /// Creates a friend with no gender, no friends, and not a best friend.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: None,
            best: false,
            friends: Vec::new(),
        }
    }

    /// Sets the gender.
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Marks or unmarks this friend as a best friend.
    #[must_use]
    pub const fn with_best(mut self, best: bool) -> Self {
        self.best = best;
        self
    }

    /// Adds one friend reference.
    #[must_use]
    pub fn with_friend(mut self, name: impl Into<String>) -> Self {
        self.friends.push(name.into());
        self
    }

    /// Adds multiple friend references.
    #[must_use]
    pub fn with_friends(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.friends.extend(names.into_iter().map(Into::into));
        self
    }

    /// Parses a JSON array of friend records.
    ///
    /// # Errors
    ///
    /// Returns `InvitationError::Json` if the JSON is invalid or a record
    /// has no `name`.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
