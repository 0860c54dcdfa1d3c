//! Guest List Core Library
//!
//! Builds party guest lists by walking a friend graph outward from a set
//! of best friends, one circle at a time, with optional gender filters
//! and an optional bound on how many circles to invite from.
//!
//! ```
//! use guestlist_core::filter::Filter;
//! use guestlist_core::friend::Friend;
//! use guestlist_core::invitation::GuestIterator;
//!
//! let friends = Friend::list_from_json(r#"[
//!     { "name": "Sam", "gender": "male", "best": true, "friends": ["Sharon"] },
//!     { "name": "Sharon", "gender": "female", "friends": ["Sam"] }
//! ]"#).unwrap();
//!
//! let mut guests = GuestIterator::new(&friends, Filter::female());
//! assert_eq!(guests.next().map(|f| f.name.as_str()), Some("Sharon"));
//! assert!(guests.next().is_none());
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod filter;
pub mod friend;
pub mod invitation;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;
