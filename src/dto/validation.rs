//! # Validation Rules
//!
//! Pure checks applied when domain types are constructed. Each rule hands the
//! value back on success so it can be used inline while building a type.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Result type for validation rules
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Smallest number a numeric item may hold
pub const NUMBER_MIN: i64 = 1;
/// Largest number a numeric item may hold
pub const NUMBER_MAX: i64 = 10;
/// Shortest text a text item may hold (in chars)
pub const TEXT_MIN_LEN: usize = 1;
/// Longest text a text item may hold (in chars)
pub const TEXT_MAX_LEN: usize = 10;

/// Rejection raised while constructing a domain type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("wrong item ID: {0}")]
    ItemId(String),

    #[error("wrong number: {0}")]
    Number(i64),

    #[error("wrong text: {0}")]
    Text(String),

    #[error("wrong version: {0}")]
    Version(String),
}

fn compile(slot: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    slot.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

pub(crate) fn item_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(&PATTERN, r"^[0-9a-zA-Z]{4}$")
}

pub(crate) fn numeric_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(&PATTERN, r"^[0-9]{4}$")
}

pub(crate) fn alphabetic_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(&PATTERN, r"^[a-zA-Z]{4}$")
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(&PATTERN, r"^[0-9]+\.[0-9]+\.[0-9]+$")
}

/// Accept exactly four ASCII letters or digits
pub fn check_item_id(item_id: &str) -> ValidationResult<&str> {
    if item_id_pattern().is_match(item_id) {
        Ok(item_id)
    } else {
        Err(ValidationError::ItemId(item_id.to_string()))
    }
}

/// Accept numbers in `NUMBER_MIN..=NUMBER_MAX`
pub fn check_number(number: i64) -> ValidationResult<i64> {
    if (NUMBER_MIN..=NUMBER_MAX).contains(&number) {
        Ok(number)
    } else {
        Err(ValidationError::Number(number))
    }
}

/// Accept texts whose length in chars is in `TEXT_MIN_LEN..=TEXT_MAX_LEN`
pub fn check_text(text: &str) -> ValidationResult<&str> {
    let len = text.chars().count();
    if (TEXT_MIN_LEN..=TEXT_MAX_LEN).contains(&len) {
        Ok(text)
    } else {
        Err(ValidationError::Text(text.to_string()))
    }
}

/// Accept `MAJOR.MINOR.PATCH` version strings
pub fn check_version(version: &str) -> ValidationResult<&str> {
    if version_pattern().is_match(version) {
        Ok(version)
    } else {
        Err(ValidationError::Version(version.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_accepts_alphanumerics() {
        assert_eq!(check_item_id("1234"), Ok("1234"));
        assert_eq!(check_item_id("abCD"), Ok("abCD"));
        assert_eq!(check_item_id("a1B2"), Ok("a1B2"));
    }

    #[test]
    fn test_item_id_rejects_bad_shapes() {
        assert!(check_item_id("").is_err());
        assert!(check_item_id("123").is_err());
        assert!(check_item_id("12345").is_err());
        assert!(check_item_id("ab1!").is_err());
        assert!(check_item_id("ab d").is_err());
        assert!(check_item_id("abc\n").is_err());
        // Non-ASCII letters are not part of the alphabet
        assert!(check_item_id("äbcd").is_err());
    }

    #[test]
    fn test_number_bounds() {
        assert!(check_number(0).is_err());
        assert_eq!(check_number(1), Ok(1));
        assert_eq!(check_number(10), Ok(10));
        assert!(check_number(11).is_err());
        assert!(check_number(-3).is_err());
    }

    #[test]
    fn test_text_length_counts_chars() {
        assert!(check_text("").is_err());
        assert_eq!(check_text("a"), Ok("a"));
        assert_eq!(check_text("0123456789"), Ok("0123456789"));
        assert!(check_text("0123456789a").is_err());
        // Ten multibyte chars are still ten chars
        assert!(check_text("ああああああああああ").is_ok());
    }

    #[test]
    fn test_version_format() {
        assert!(check_version("0.1.0").is_ok());
        assert!(check_version("10.20.30").is_ok());
        assert!(check_version("1.2").is_err());
        assert!(check_version("v1.2.3").is_err());
        assert!(check_version("1.2.3-beta").is_err());
        assert!(check_version("1.-2.3").is_err());
    }

    #[test]
    fn test_error_messages_embed_value() {
        assert_eq!(
            check_item_id("ab1!").unwrap_err().to_string(),
            "wrong item ID: ab1!"
        );
        assert_eq!(check_number(42).unwrap_err().to_string(), "wrong number: 42");
        assert_eq!(check_text("").unwrap_err().to_string(), "wrong text: ");
        assert_eq!(
            check_version("x").unwrap_err().to_string(),
            "wrong version: x"
        );
    }
}
