//! Guest list construction.
//!
//! This module walks the friend graph outward from the best friends, one
//! circle at a time, handing out guests lazily.
//!
//! # Architecture
//!
//! ```text
//! GuestIterator (pull-based traversal)
//!     ├── registry (name -> Friend, borrowed)
//!     ├── invited set (every name ever placed in a circle)
//!     └── Predicate (decides who is returned)
//! ```
//!
//! # Guarantees
//!
//! - Nobody is returned twice and nobody sits in two circles
//! - Within a circle, guests come out sorted by [`compare_names`](crate::friend::compare_names)
//! - Cyclic friendships terminate
//! - The filter changes who is returned, never who is visited

mod config;
mod error;
mod iterator;

pub use config::InvitationConfig;
pub use error::{InvitationError, Result};
pub use iterator::GuestIterator;
