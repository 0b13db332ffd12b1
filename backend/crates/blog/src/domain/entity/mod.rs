//! Domain Entities

pub mod comment;
pub mod post;

use crate::error::{BlogError, BlogResult};

/// Reject empty or whitespace-only text fields.
///
/// The value is stored as given; only the emptiness check trims.
pub(crate) fn require_non_empty(field: &str, value: &str) -> BlogResult<()> {
    if value.trim().is_empty() {
        return Err(BlogError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("title", "hello").is_ok());
        assert!(require_non_empty("title", "  x  ").is_ok());
        assert!(require_non_empty("title", "").is_err());
        assert!(require_non_empty("title", "   \t\n").is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = require_non_empty("content", "").unwrap_err();
        assert!(err.to_string().contains("content"));
    }
}
