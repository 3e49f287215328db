//! Error types for freetime-engine operations.
//!
//! Only the collaborator boundaries (window construction, date resolution,
//! event decoding) can fail. The availability pipeline itself is infallible.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreetimeError {
    /// Working hours out of range, inverted, or empty.
    #[error("Invalid working window: {0}")]
    InvalidWindow(String),

    #[error("Could not parse date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Event JSON parse error: {0}")]
    EventParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FreetimeError>;
