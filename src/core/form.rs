//! # Prompt Form
//!
//! Validation for the page's single form field: `prompt` is required.
//! The field itself (text buffer, cursor, reset) lives in the TUI `InputBox`.

use std::fmt;

/// Reasons a prompt is rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "Prompt is required."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a prompt.
///
/// Whitespace-only input counts as missing: unlike a bare length check,
/// `"   "` is rejected and never reaches the endpoint.
/// Accepted prompts are returned unchanged (no trimming).
pub fn validate(prompt: &str) -> Result<&str, ValidationError> {
    if prompt.trim().is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty() {
        assert_eq!(validate(""), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        assert_eq!(validate("  \t "), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_keeps_surrounding_whitespace() {
        assert_eq!(validate("  pi? "), Ok("  pi? "));
    }

    #[test]
    fn test_required_message() {
        assert_eq!(ValidationError::Required.to_string(), "Prompt is required.");
    }
}
