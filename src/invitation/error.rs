//! Error types for guest list construction.
//!
//! Traversal itself never fails; errors only arise while turning untyped
//! input (filter names, JSON) into a filter or a friend list.

use thiserror::Error;

/// Error type for invitation operations.
#[derive(Error, Debug)]
pub enum InvitationError {
    /// A filter name or other argument was not recognized.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for invitation operations.
pub type Result<T> = std::result::Result<T, InvitationError>;
