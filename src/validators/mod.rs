//! Client-side checks for request payloads before they go on the wire.

mod community;
mod post;
mod vote;

pub use community::{CommunityCreationRequest, CommunityName};
pub use post::PostDraft;
pub use vote::PostVoteRequest;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters long")]
    TooLong { field: &'static str, max: usize },
}

/// Trims `value` and checks its length in characters.
fn bounded(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        return Err(ValidationError::Empty { field });
    }
    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }
    if len > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_string())
}

fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}
