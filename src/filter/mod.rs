//! Filters deciding which friends make it onto the guest list.
//!
//! A filter only decides who is *returned*. Who is *visited* is decided
//! by the circle traversal alone, so swapping filters never changes
//! which circles a friend belongs to.

use std::str::FromStr;

use crate::friend::{Friend, Gender};
use crate::invitation::InvitationError;

/// Anything that can accept or reject a friend.
///
/// Implementations must be pure: the same friend always gets the same
/// answer. Closures of type `Fn(&Friend) -> bool` qualify.
pub trait Predicate {
    /// Returns `true` if `friend` passes.
    fn accepts(&self, friend: &Friend) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Friend) -> bool,
{
    fn accepts(&self, friend: &Friend) -> bool {
        self(friend)
    }
}

/// The built-in filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Accepts everyone.
    #[default]
    All,
    /// Accepts only best friends. Seeds the first circle.
    BestFriend,
    /// Accepts friends whose gender matches.
    Gender(Gender),
}

impl Filter {
    /// Filter that accepts everyone.
    #[must_use]
    pub const fn all() -> Self {
        Self::All
    }

    /// Filter that accepts only male friends.
    #[must_use]
    pub const fn male() -> Self {
        Self::Gender(Gender::Male)
    }

    /// Filter that accepts only female friends.
    #[must_use]
    pub const fn female() -> Self {
        Self::Gender(Gender::Female)
    }

    /// Filter that accepts only best friends.
    #[must_use]
    pub const fn best_friend() -> Self {
        Self::BestFriend
    }

    /// Converts to the name accepted by [`Filter::from_str`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::BestFriend => "best_friend",
            Self::Gender(gender) => gender.as_str(),
        }
    }
}

impl Predicate for Filter {
    fn accepts(&self, friend: &Friend) -> bool {
        match self {
            Self::All => true,
            Self::BestFriend => friend.best,
            Self::Gender(gender) => friend.gender == Some(*gender),
        }
    }
}

impl FromStr for Filter {
    type Err = InvitationError;

    /// Parses `all`, `best_friend`, `male` or `female`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "best_friend" => Ok(Self::BestFriend),
            other => Gender::parse(other).map(Self::Gender).ok_or_else(|| {
                InvitationError::InvalidArgument(format!("unknown filter: {other}"))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sam() -> Friend {
        Friend::new("Sam").with_gender(Gender::Male).with_best(true)
    }

    fn sharon() -> Friend {
        Friend::new("Sharon").with_gender(Gender::Female)
    }

    #[test]
    fn all_accepts_everyone() {
        assert!(Filter::all().accepts(&sam()));
        assert!(Filter::all().accepts(&sharon()));
        assert!(Filter::all().accepts(&Friend::new("Nobody")));
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn gender_filters_match_only_their_gender() {
        assert!(Filter::male().accepts(&sam()));
        assert!(!Filter::male().accepts(&sharon()));
        assert!(Filter::female().accepts(&sharon()));
        assert!(!Filter::female().accepts(&sam()));
    }

    #[test]
    fn gender_filters_reject_missing_gender() {
        let unknown = Friend::new("Pat");
        assert!(!Filter::male().accepts(&unknown));
        assert!(!Filter::female().accepts(&unknown));
    }

    #[test]
    fn best_friend_filter_checks_flag() {
        assert!(Filter::best_friend().accepts(&sam()));
        assert!(!Filter::best_friend().accepts(&sharon()));
    }

    #[test]
    fn closures_are_predicates() {
        let short_names = |friend: &Friend| friend.name.len() <= 3;
        assert!(short_names.accepts(&sam()));
        assert!(!short_names.accepts(&sharon()));
    }

    #[test]
    fn parse_known_names() {
        for filter in [
            Filter::all(),
            Filter::male(),
            Filter::female(),
            Filter::best_friend(),
        ] {
            assert_eq!(filter.as_str().parse::<Filter>().unwrap(), filter);
        }
    }

    #[test]
    fn parse_unknown_name_is_invalid_argument() {
        let err = "robots".parse::<Filter>().unwrap_err();
        assert!(matches!(err, InvitationError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid argument: unknown filter: robots");
    }
}
