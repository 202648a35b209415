//! Error Types
//!
//! Every failure the user can see ends up as one of these, rendered through `Display`.

use thiserror::Error;

/// Failures from talking to the recipe backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is already user-facing
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Client-side form validation failures; these never reach the network
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Title must be {max} characters or fewer.")]
    TitleTooLong { max: usize },

    #[error("Description must be {max} characters or fewer.")]
    DescriptionTooLong { max: usize },

    #[error("Color must be a hex value like #3b82f6.")]
    InvalidColor,
}
