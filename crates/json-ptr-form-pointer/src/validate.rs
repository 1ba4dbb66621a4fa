//! Validation of pointer strings against the form path conventions.

use thiserror::Error;

/// Maximum allowed pointer string length.
const MAX_POINTER_LENGTH: usize = 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("pointer must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("pointer must not end with '/': {0:?}")]
    TrailingSlash(String),
    #[error("pointer exceeds 1024 characters")]
    TooLong,
    #[error("invalid escape sequence in {0:?}")]
    InvalidEscape(String),
}

/// Validate a pointer string.
///
/// # Errors
///
/// Returns an error if:
/// - The pointer doesn't start with `/`
/// - The pointer is not the root and ends with `/`
/// - A `~` is not followed by `0` or `1`
/// - The pointer exceeds the maximum length (1024 characters)
///
/// # Example
///
/// ```
/// use json_ptr_form_pointer::validate_json_pointer;
///
/// validate_json_pointer("/").unwrap();
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();
/// validate_json_pointer("/foo/").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    if !pointer.starts_with('/') {
        return Err(ValidationError::MissingLeadingSlash(pointer.to_string()));
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(ValidationError::TooLong);
    }
    if pointer.len() > 1 && pointer.ends_with('/') {
        return Err(ValidationError::TrailingSlash(pointer.to_string()));
    }
    let mut chars = pointer.chars();
    while let Some(c) = chars.next() {
        if c == '~' && !matches!(chars.next(), Some('0') | Some('1')) {
            return Err(ValidationError::InvalidEscape(pointer.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_root() {
        assert!(validate_json_pointer("/").is_ok());
        assert!(validate_json_pointer("").is_err());
    }

    #[test]
    fn test_validate_absolute_pointer() {
        assert!(validate_json_pointer("/foo").is_ok());
        assert!(validate_json_pointer("/foo/bar").is_ok());
        assert!(validate_json_pointer("/a~0b/c~1d").is_ok());
    }

    #[test]
    fn test_validate_relative_pointer() {
        assert_eq!(
            validate_json_pointer("foo/bar"),
            Err(ValidationError::MissingLeadingSlash("foo/bar".to_string()))
        );
    }

    #[test]
    fn test_validate_trailing_slash() {
        assert!(validate_json_pointer("/foo/").is_err());
    }

    #[test]
    fn test_validate_bad_escape() {
        assert!(validate_json_pointer("/a~2").is_err());
        assert!(validate_json_pointer("/a~").is_err());
    }

    #[test]
    fn test_validate_long_pointer() {
        let long_pointer = "/".to_string() + &"a".repeat(2000);
        assert_eq!(validate_json_pointer(&long_pointer), Err(ValidationError::TooLong));
    }
}
