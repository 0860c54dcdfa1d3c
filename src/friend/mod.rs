//! Friend records and name ordering.
//!
//! # Types
//!
//! - [`Friend`]: A person with a name, gender, best-friend flag and friend list
//! - [`Gender`]: The attribute the gender filters compare against
//!
//! [`compare_names`] is the ordering used inside every circle.

mod order;
pub mod types;

pub use order::compare_names;
pub use types::{Friend, Gender};
