//! Deterministic validation of a user-entered value against a
//! [`FieldConfig`].
//!
//! Rules are checked in a fixed order and the first failing rule wins:
//!
//! 1. `required` – the trimmed value must not be empty,
//! 2. `minLength`,
//! 3. `maxLength`,
//! 4. `regex` – only tested when the value is non-empty, so an optional
//!    empty field is always valid whatever its pattern.
//!
//! Lengths count Unicode scalar values. A length bound of `0` and an empty
//! pattern are ignored, the same as an absent rule. Patterns use the
//! [`regex`] crate's syntax; a pattern that does not compile rejects every
//! non-empty value.

use regex::Regex;
use thiserror::Error;

use crate::field::FieldConfig;

/// Reason a value was rejected. The `Display` output is the message shown to
/// the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,
    #[error("Must be at least {min} characters.")]
    TooShort { min: usize },
    #[error("Must be at most {max} characters.")]
    TooLong { max: usize },
    #[error("Invalid format.")]
    InvalidFormat,
}

/// Validate `value` against `config`. `None` means the value is valid.
///
/// Compiles the pattern on every call; use [`FieldValidator`] to check many
/// values against the same configuration.
///
/// ```rust
/// use formai_core::{FieldConfig, ValidationError, validate_value};
///
/// let mut config = FieldConfig::default();
/// config.validation.required = Some(true);
///
/// assert_eq!(validate_value(None, &config), Some(ValidationError::Required));
/// assert_eq!(validate_value(Some("x"), &config), None);
/// ```
pub fn validate_value(value: Option<&str>, config: &FieldConfig) -> Option<ValidationError> {
    FieldValidator::new(config).validate(value)
}

/// The validation rules of one [`FieldConfig`] with the pattern compiled
/// once.
///
/// A bound of `0` and an empty pattern count as unset.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    /// `Err` when the configured pattern does not compile.
    pattern: Option<Result<Regex, regex::Error>>,
}

impl FieldValidator {
    pub fn new(config: &FieldConfig) -> Self {
        let rules = &config.validation;
        Self {
            required: rules.is_required(),
            min_length: rules.min_length.filter(|&min| min > 0),
            max_length: rules.max_length.filter(|&max| max > 0),
            pattern: rules
                .regex
                .as_deref()
                .filter(|pattern| !pattern.is_empty())
                .map(Regex::new),
        }
    }

    pub fn validate(&self, value: Option<&str>) -> Option<ValidationError> {
        let value = value.unwrap_or_default();
        let length = value.chars().count();

        if self.required && value.trim().is_empty() {
            return Some(ValidationError::Required);
        }

        if let Some(min) = self.min_length {
            if length < min {
                return Some(ValidationError::TooShort { min });
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Some(ValidationError::TooLong { max });
            }
        }

        if let Some(pattern) = &self.pattern {
            let matched = pattern.as_ref().is_ok_and(|re| re.is_match(value));
            if length > 0 && !matched {
                return Some(ValidationError::InvalidFormat);
            }
        }

        None
    }
}
