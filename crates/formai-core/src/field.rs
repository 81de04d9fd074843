//! The field configuration document and the options a caller can attach to a
//! generation request.
//!
//! [`FieldConfig`] is the JSON object the generation backend is instructed to
//! emit. Its doc comments double as the field descriptions of the JSON
//! schema embedded in the backend instruction, so keep them short and phrased
//! as rules for the model.
//!
//! ```rust
//! use formai_core::{FieldConfig, FieldType};
//!
//! let config: FieldConfig = serde_json::from_str(
//!     r#"{"type":"mask-text","placeholder":"00000-000","mask":"00000-000",
//!         "validation":{"required":true,"regex":null,"minLength":null,"maxLength":null}}"#,
//! ).unwrap();
//!
//! assert_eq!(config.field_type, FieldType::MaskText);
//! assert_eq!(config.effective_mask(), Some("00000-000"));
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder standing in for "any digit" when the caller does not pick one.
pub const DEFAULT_DIGIT_PLACEHOLDER: char = '0';

/// Placeholder standing in for "any letter" when the caller does not pick one.
pub const DEFAULT_LETTER_PLACEHOLDER: char = 'a';

/// Kind of input element the field should be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    #[default]
    Text,
    Select,
    MaskText,
    Radio,
    Checkbox,
}

/// Structured description of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct FieldConfig {
    /// Input kind. Use "mask-text" only when the value follows a fixed
    /// pattern of digits and letters.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Short example of a valid value shown inside the empty input, or null.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Input mask built from the configured placeholder characters. Null
    /// unless type is "mask-text".
    #[serde(default)]
    pub mask: Option<String>,
    /// Validation rules inferred from the description.
    #[serde(default)]
    pub validation: FieldValidation,
}

impl FieldConfig {
    /// The configuration a backend must emit when the description is not
    /// about a form field: a plain, optional text input without hints.
    pub fn fallback() -> Self {
        Self {
            field_type: FieldType::Text,
            placeholder: None,
            mask: None,
            validation: FieldValidation {
                required: Some(false),
                ..Default::default()
            },
        }
    }

    /// The mask, but only when the field actually is a masked input.
    ///
    /// Backends occasionally return a mask for a plain text field. Consumers
    /// that apply masks should go through this accessor.
    pub fn effective_mask(&self) -> Option<&str> {
        match self.field_type {
            FieldType::MaskText => self.mask.as_deref(),
            _ => None,
        }
    }
}

/// Validation rules attached to a [`FieldConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    /// True only when the description says the field is required or
    /// mandatory; otherwise false.
    #[serde(default)]
    pub required: Option<bool>,
    /// Pattern the whole value must match, or null when no format is implied.
    #[serde(default)]
    pub regex: Option<String>,
    /// Minimum number of characters, or null.
    #[serde(default)]
    pub min_length: Option<usize>,
    /// Maximum number of characters, or null.
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl FieldValidation {
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

/// Options a caller attaches to a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_patterns: Option<MaskPatterns>,
}

impl FieldOptions {
    pub fn with_mask_patterns(mut self, mask_patterns: MaskPatterns) -> Self {
        self.mask_patterns = Some(mask_patterns);
        self
    }

    /// Resolve the placeholder characters the backend should use in masks.
    pub fn placeholders(&self) -> MaskPlaceholders {
        self.mask_patterns
            .as_ref()
            .map(MaskPatterns::resolve)
            .unwrap_or_default()
    }
}

/// Caller-chosen placeholder characters as they travel over the wire.
///
/// Both entries are strings so that a caller can send `{"digit": "9"}`
/// straight from a UI; only the first character is significant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct MaskPatterns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
}

impl MaskPatterns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_digit(mut self, digit: impl ToString) -> Self {
        self.digit = Some(digit.to_string());
        self
    }

    pub fn with_letter(mut self, letter: impl ToString) -> Self {
        self.letter = Some(letter.to_string());
        self
    }

    /// Pick the first character of each entry, falling back to `'0'` for
    /// digits and `'a'` for letters when an entry is absent or empty.
    pub fn resolve(&self) -> MaskPlaceholders {
        MaskPlaceholders {
            digit: first_char(self.digit.as_deref()).unwrap_or(DEFAULT_DIGIT_PLACEHOLDER),
            letter: first_char(self.letter.as_deref()).unwrap_or(DEFAULT_LETTER_PLACEHOLDER),
        }
    }
}

fn first_char(value: Option<&str>) -> Option<char> {
    value.and_then(|v| v.chars().next())
}

/// Resolved placeholder characters used when rendering mask examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskPlaceholders {
    pub digit: char,
    pub letter: char,
}

impl Default for MaskPlaceholders {
    fn default() -> Self {
        Self {
            digit: DEFAULT_DIGIT_PLACEHOLDER,
            letter: DEFAULT_LETTER_PLACEHOLDER,
        }
    }
}

impl MaskPlaceholders {
    /// Render a mask template where `#` marks a digit slot and `@` marks a
    /// letter slot. Every other character is copied verbatim.
    ///
    /// ```rust
    /// use formai_core::MaskPlaceholders;
    ///
    /// let p = MaskPlaceholders { digit: '9', letter: 'A' };
    /// assert_eq!(p.render("@@@-#@##"), "AAA-9A99");
    /// ```
    pub fn render(&self, template: &str) -> String {
        template
            .chars()
            .map(|c| match c {
                '#' => self.digit,
                '@' => self.letter,
                other => other,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_names() {
        let config: FieldConfig = serde_json::from_str(
            r#"{"type":"text","placeholder":"email@example.com","mask":null,
                "validation":{"required":true,"regex":"^[^@]+@[^@]+$","minLength":null,"maxLength":120}}"#,
        )
        .unwrap();

        assert_eq!(config.field_type, FieldType::Text);
        assert_eq!(config.placeholder.as_deref(), Some("email@example.com"));
        assert!(config.validation.is_required());
        assert_eq!(config.validation.max_length, Some(120));
        assert_eq!(config.validation.min_length, None);
    }

    #[test]
    fn missing_validation_falls_back_to_empty_rules() {
        let config: FieldConfig = serde_json::from_str(r#"{"type":"checkbox"}"#).unwrap();
        assert_eq!(config.field_type, FieldType::Checkbox);
        assert_eq!(config.validation, FieldValidation::default());
        assert!(!config.validation.is_required());
    }

    #[test]
    fn serializes_absent_values_as_null() {
        let value = serde_json::to_value(FieldConfig::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "text",
                "placeholder": null,
                "mask": null,
                "validation": {
                    "required": null,
                    "regex": null,
                    "minLength": null,
                    "maxLength": null
                }
            })
        );
    }

    #[test]
    fn effective_mask_ignores_mask_on_non_mask_fields() {
        let config = FieldConfig {
            field_type: FieldType::Text,
            mask: Some("000".into()),
            ..Default::default()
        };
        assert_eq!(config.effective_mask(), None);
    }

    #[test]
    fn resolves_placeholders_with_defaults() {
        assert_eq!(
            FieldOptions::default().placeholders(),
            MaskPlaceholders { digit: '0', letter: 'a' }
        );

        let options = FieldOptions::default().with_mask_patterns(MaskPatterns::new().with_digit('9'));
        assert_eq!(options.placeholders(), MaskPlaceholders { digit: '9', letter: 'a' });

        let patterns = MaskPatterns {
            digit: Some(String::new()),
            letter: Some("XY".into()),
        };
        assert_eq!(patterns.resolve(), MaskPlaceholders { digit: '0', letter: 'X' });
    }

    #[test]
    fn options_serialize_camel_case() {
        let options = FieldOptions::default().with_mask_patterns(MaskPatterns::new().with_letter('A'));
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({ "maskPatterns": { "letter": "A" } })
        );
    }
}
