use thiserror::Error;

use crate::api_connection::connection::ApiConnectionError;
use crate::config::ConfigError;

/// Longest raw-text excerpt kept on a [`ResponseFormatError`].
pub const MAX_EXCERPT_CHARS: usize = 240;

pub const RETRY_MESSAGE: &str = "Sorry, we couldn't generate new recipes. Please try again.";

/// The model answered, but not with what the schema asked for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason} (response excerpt: {excerpt:?})")]
pub struct ResponseFormatError {
    pub reason: String,
    pub excerpt: String,
}

impl ResponseFormatError {
    pub fn new(reason: impl Into<String>, raw_text: &str) -> Self {
        Self {
            reason: reason.into(),
            excerpt: excerpt(raw_text),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("recipe generation is not configured: {0}")]
    Configuration(#[from] ConfigError),

    #[error("recipe generation request failed: {0}")]
    Request(#[from] ApiConnectionError),

    #[error("recipe generation returned an unusable response: {0}")]
    ResponseFormat(#[from] ResponseFormatError),
}

impl GenerationError {
    /// Message for the person looking at the recipe list. Request and format
    /// failures read the same; only configuration problems get their own text.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Configuration(_) => {
                "AI recipe suggestions are unavailable because no API key is configured. Showing sample recipes."
            }
            GenerationError::Request(_) | GenerationError::ResponseFormat(_) => RETRY_MESSAGE,
        }
    }

    /// Configuration problems will not go away by trying again.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, GenerationError::Configuration(_))
    }
}

fn excerpt(raw_text: &str) -> String {
    let mut chars = raw_text.chars();
    let head: String = chars.by_ref().take(MAX_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
