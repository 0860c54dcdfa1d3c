//! Circle-by-circle traversal of the friend graph.
//!
//! Circle 1 holds the best friends. Circle `n + 1` holds every friend of
//! circle `n` who has not been invited yet, sorted by name. A friend is
//! invited the moment they are placed in a circle, whether or not the
//! filter later returns them, so nobody lands in two circles and cyclic
//! friendships terminate.

use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::config::InvitationConfig;
use super::error::Result;
use crate::filter::{Filter, Predicate};
use crate::friend::{compare_names, Friend};

/// Lazily yields guests circle by circle.
///
/// The iterator borrows the friend list for its whole lifetime and is
/// advanced only by [`Iterator::next`] and [`GuestIterator::has_next`].
/// Once it returns `None` it stays exhausted.
///
/// # Examples
///
/// ```
/// use guestlist_core::filter::Filter;
/// use guestlist_core::friend::Friend;
/// use guestlist_core::invitation::GuestIterator;
///
/// let friends = vec![
///     Friend::new("A").with_best(true).with_friends(["B", "C"]),
///     Friend::new("B").with_friends(["A", "D"]),
///     Friend::new("C").with_friends(["A"]),
///     Friend::new("D").with_friends(["B"]),
/// ];
///
/// let names: Vec<&str> = GuestIterator::new(&friends, Filter::all())
///     .map(|friend| friend.name.as_str())
///     .collect();
/// assert_eq!(names, ["A", "B", "C", "D"]);
/// ```
pub struct GuestIterator<'a, P = Filter> {
    registry: HashMap<&'a str, &'a Friend>,
    filter: P,
    invited: HashSet<&'a str>,
    circle: Vec<&'a Friend>,
    cursor: usize,
    circle_number: u32,
    max_circle: Option<u32>,
    exhausted: bool,
}

impl<'a, P: Predicate> GuestIterator<'a, P> {
    /// Creates an iterator with no bound on circle depth.
    #[must_use]
    pub fn new(friends: &'a [Friend], filter: P) -> Self {
        Self::build(friends, filter, None)
    }

    /// Creates an iterator that stops after circle `max_circle`.
    ///
    /// A bound of `0` yields nothing.
    #[must_use]
    pub fn limited(friends: &'a [Friend], filter: P, max_circle: u32) -> Self {
        Self::build(friends, filter, Some(max_circle))
    }

    fn build(friends: &'a [Friend], filter: P, max_circle: Option<u32>) -> Self {
        let registry: HashMap<&str, &Friend> = friends
            .iter()
            .map(|friend| (friend.name.as_str(), friend))
            .collect();

        let best_friend = Filter::best_friend();
        let mut circle: Vec<&Friend> = registry
            .values()
            .copied()
            .filter(|friend| best_friend.accepts(friend))
            .collect();
        circle.sort_by(|a, b| compare_names(&a.name, &b.name));

        let invited = circle.iter().map(|friend| friend.name.as_str()).collect();

        debug!(
            friends = registry.len(),
            best_friends = circle.len(),
            ?max_circle,
            "guest iterator created"
        );

        Self {
            registry,
            filter,
            invited,
            circle,
            cursor: 0,
            circle_number: 1,
            max_circle,
            exhausted: false,
        }
    }

    /// Returns the number of the circle currently being walked.
    ///
    /// Once exhausted this is the last circle walked, capped at the bound,
    /// so a zero bound reports `0`.
    #[must_use]
    pub const fn circle_number(&self) -> u32 {
        self.circle_number
    }

    /// Returns the circle bound, or `None` if unbounded.
    #[must_use]
    pub const fn max_circle(&self) -> Option<u32> {
        self.max_circle
    }

    /// Returns whether `name` has been placed in any circle so far.
    #[must_use]
    pub fn is_invited(&self, name: &str) -> bool {
        self.invited.contains(name)
    }

    /// Returns how many names have been placed in circles so far.
    #[must_use]
    pub fn invited_count(&self) -> usize {
        self.invited.len()
    }

    /// Returns whether another guest is available.
    ///
    /// May advance to later circles to find out, but never skips a guest.
    pub fn has_next(&mut self) -> bool {
        self.seek().is_some()
    }

    const fn within_bound(&self, circle_number: u32) -> bool {
        match self.max_circle {
            Some(max) => circle_number <= max,
            None => true,
        }
    }

    /// Finds the index of the next accepted friend, advancing circles as needed.
    fn seek(&mut self) -> Option<usize> {
        while !self.exhausted {
            if self.within_bound(self.circle_number) {
                let found = self.circle[self.cursor..]
                    .iter()
                    .position(|friend| self.filter.accepts(friend));
                if let Some(offset) = found {
                    return Some(self.cursor + offset);
                }
            }

            let next_circle = self.expand();
            let next_number = self.circle_number.saturating_add(1);

            if next_circle.is_empty() || !self.within_bound(next_number) {
                debug!(
                    circle = self.circle_number,
                    invited = self.invited.len(),
                    "guest iterator exhausted"
                );
                self.exhausted = true;
                if let Some(max) = self.max_circle {
                    self.circle_number = self.circle_number.min(max);
                }
                self.circle.clear();
                self.cursor = 0;
            } else {
                debug!(
                    circle = next_number,
                    size = next_circle.len(),
                    "advancing to next circle"
                );
                self.circle = next_circle;
                self.cursor = 0;
                self.circle_number = next_number;
            }
        }

        None
    }

    /// Collects uninvited friends of the current circle, inviting them.
    fn expand(&mut self) -> Vec<&'a Friend> {
        let mut next_circle = Vec::new();

        for &friend in &self.circle {
            for name in &friend.friends {
                if !self.invited.insert(name.as_str()) {
                    continue;
                }
                match self.registry.get(name.as_str()) {
                    Some(&known) => next_circle.push(known),
                    None => trace!(from = %friend.name, to = %name, "skipping unknown friend"),
                }
            }
        }

        next_circle.sort_by(|a, b| compare_names(&a.name, &b.name));
        next_circle
    }
}

impl<'a> GuestIterator<'a, Filter> {
    /// Creates an iterator from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InvitationError::InvalidArgument`](super::InvitationError::InvalidArgument)
    /// if the configured filter name is not recognized.
    pub fn from_config(friends: &'a [Friend], config: &InvitationConfig) -> Result<Self> {
        let filter = config.filter()?;
        Ok(Self::build(friends, filter, config.max_circle))
    }
}

impl<'a, P: Predicate> Iterator for GuestIterator<'a, P> {
    type Item = &'a Friend;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.seek()?;
        self.cursor = index + 1;
        Some(self.circle[index])
    }
}

impl<P: Predicate> FusedIterator for GuestIterator<'_, P> {}

impl<P> std::fmt::Debug for GuestIterator<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestIterator")
            .field("friends", &self.registry.len())
            .field("invited", &self.invited.len())
            .field("circle_number", &self.circle_number)
            .field("circle_size", &self.circle.len())
            .field("cursor", &self.cursor)
            .field("max_circle", &self.max_circle)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
