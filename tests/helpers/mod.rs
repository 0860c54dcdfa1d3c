//! Reusable helpers for guest list integration tests.

use guestlist_core::friend::Friend;

/// Collects guest names from any iterator of friends.
pub fn names<'a>(guests: impl Iterator<Item = &'a Friend>) -> Vec<&'a str> {
    guests.map(|friend| friend.name.as_str()).collect()
}

/// Builds a friend with the given best flag and friend names.
#[allow(dead_code)] // Not every test binary uses it.
pub fn friend(name: &str, best: bool, friends: &[&str]) -> Friend {
    Friend::new(name)
        .with_best(best)
        .with_friends(friends.iter().copied())
}
