//! The system instruction that turns a free-text field description into a
//! [`FieldConfig`] document.
//!
//! The instruction is the whole contract between the field service and the
//! model, so it is rendered deterministically: the same placeholders always
//! produce byte-identical text. It is laid out as
//!
//! ```markdown
//! # Form Field Designer
//! …role and output hygiene…
//! ## Output Schema          <- JSON schema of FieldConfig + example
//! ## Fallback               <- fixed answer for unrelated descriptions
//! ## Validation Rules       <- prefer false / null over guessing
//! ## Mask Rules             <- caller's digit / letter placeholders
//! ```
//!
//! # Example
//!
//! ```rust
//! use formai_core::MaskPlaceholders;
//! use formai_types::fragments::FieldInstructionFragment;
//!
//! let placeholders = MaskPlaceholders { digit: '9', letter: 'a' };
//! let instruction = FieldInstructionFragment::new(placeholders).unwrap().render();
//!
//! assert!(instruction.contains("\"99999-999\""));
//! ```

use formai_core::{
    FieldConfig, FieldType, FieldValidation, MaskPlaceholders,
    error::Result,
    generic::{GenericMessage, GenericRole},
    schema_util::derive_response_schema,
    template::IntoPrompt,
};
use formai_prompt::builder::PromptBuilder;

/// Worked mask examples as `(description, template)` pairs. In a template
/// `#` is a digit slot and `@` a letter slot; see
/// [`MaskPlaceholders::render`].
pub const MASK_EXAMPLES: [(&str, &str); 5] = [
    ("Brazilian postal code (CEP)", "#####-###"),
    ("Phone number with area code", "(##) #####-####"),
    ("Date (day/month/year)", "##/##/####"),
    ("Vehicle licence plate", "@@@-#@##"),
    ("Credit card number", "#### #### #### ####"),
];

/// System instruction fragment for a single generation request.
#[derive(Debug, Clone)]
pub struct FieldInstructionFragment {
    placeholders: MaskPlaceholders,
    schema: String,
}

impl FieldInstructionFragment {
    /// Prepare the instruction for the given placeholders.
    ///
    /// # Errors
    ///
    /// Fails only if the `FieldConfig` schema cannot be serialised.
    pub fn new(placeholders: MaskPlaceholders) -> Result<Self> {
        let schema = serde_json::to_string_pretty(&derive_response_schema::<FieldConfig>()?)?;
        Ok(Self {
            placeholders,
            schema,
        })
    }

    pub fn placeholders(&self) -> MaskPlaceholders {
        self.placeholders
    }

    /// Render the complete markdown instruction.
    pub fn render(&self) -> String {
        let builder = PromptBuilder::new()
            .add_section_h1("Form Field Designer")
            .add_line(
                "You are a programming assistant specialised in forms. Read the \
                 description of a single form field and answer with exactly one \
                 JSON object that configures that field.",
            )
            .add_bullet("Answer with the JSON object only.")
            .add_bullet("Do not wrap the answer in markdown code fences.")
            .add_bullet("Do not add keys that are not part of the schema.")
            .add_blank_line();

        let builder = self.schema_section(builder);
        let builder = fallback_section(builder);
        let builder = validation_section(builder);
        self.mask_section(builder).finalize()
    }

    fn schema_section(&self, builder: PromptBuilder) -> PromptBuilder {
        builder
            .add_section_h2("Output Schema")
            .add_line("The answer must validate against this JSON schema:")
            .add_text_json(&self.schema)
            .add_line("Example answer for \"a required email field\":")
            .add_text_json(to_json(&example_config()))
            .add_blank_line()
    }

    fn mask_section(&self, builder: PromptBuilder) -> PromptBuilder {
        let MaskPlaceholders { digit, letter } = self.placeholders;

        let builder = builder
            .add_section_h2("Mask Rules")
            .add_bullet(
                "Use type \"mask-text\" only when the value has a fixed layout of \
                 digits, letters and separators. For every other type \"mask\" is null.",
            )
            .add_key_value("Digit placeholder", format!("'{digit}'"))
            .add_key_value("Letter placeholder", format!("'{letter}'"))
            .add_bullet(format!(
                "Write '{digit}' wherever any digit may be typed and '{letter}' \
                 wherever any letter may be typed."
            ))
            .add_bullet(
                "Copy separators such as '-', '/', '.', '(', ')' and spaces into the \
                 mask literally.",
            )
            .add_bullet(
                "Use the mask as the placeholder unless the description suggests a \
                 better example value.",
            )
            .add_line("Worked examples:");

        MASK_EXAMPLES
            .iter()
            .fold(builder, |builder, (description, template)| {
                builder.add_bullet(format!(
                    "{description}: \"mask\": \"{}\"",
                    self.placeholders.render(template)
                ))
            })
    }
}

fn fallback_section(builder: PromptBuilder) -> PromptBuilder {
    builder
        .add_section_h2("Fallback")
        .add_line(
            "If the description is not about a form field, do not try to \
             interpret it. Answer with exactly this object:",
        )
        .add_text_json(to_json(&FieldConfig::fallback()))
        .add_blank_line()
}

fn validation_section(builder: PromptBuilder) -> PromptBuilder {
    builder
        .add_section_h2("Validation Rules")
        .add_bullet(
            "Set \"required\" to true only when the description says the field is \
             required or mandatory. Otherwise set it to false.",
        )
        .add_bullet(
            "Set \"minLength\" and \"maxLength\" only when the description states a \
             length. Otherwise use null. Never guess a length.",
        )
        .add_bullet(
            "When the description names a format (email, phone number, tax id, \
             postal code, …) write a \"regex\" that matches the whole value. \
             Otherwise use null.",
        )
        .add_bullet(
            "Regexes are evaluated by the Rust `regex` engine: no look-ahead, no \
             look-behind and no back-references.",
        )
        .add_bullet("Escape backslashes for JSON, e.g. \"^\\\\d{9}$\".")
        .add_bullet("When in doubt prefer false or null over inventing a rule.")
        .add_blank_line()
}

fn example_config() -> FieldConfig {
    FieldConfig {
        field_type: FieldType::Text,
        placeholder: Some("email@example.com".into()),
        mask: None,
        validation: FieldValidation {
            required: Some(true),
            regex: Some("^[^@\\s]+@[^@\\s]+\\.[^@\\s]+$".into()),
            min_length: None,
            max_length: None,
        },
    }
}

fn to_json(config: &FieldConfig) -> String {
    serde_json::to_string(config).unwrap_or_default()
}

impl IntoPrompt for FieldInstructionFragment {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.render(), GenericRole::System)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction(digit: char, letter: char) -> String {
        FieldInstructionFragment::new(MaskPlaceholders { digit, letter })
            .unwrap()
            .render()
    }

    #[test]
    fn default_placeholders_appear_in_worked_examples() {
        let text = instruction('0', 'a');
        assert!(text.contains("**Digit placeholder**: '0'"));
        assert!(text.contains("**Letter placeholder**: 'a'"));
        assert!(text.contains("\"mask\": \"00000-000\""));
        assert!(text.contains("\"mask\": \"aaa-0a00\""));
    }

    #[test]
    fn custom_digit_placeholder_is_embedded() {
        let text = instruction('9', 'a');
        assert!(text.contains("**Digit placeholder**: '9'"));
        assert!(text.contains("\"mask\": \"99999-999\""));
        assert!(text.contains("\"mask\": \"(99) 99999-9999\""));
        assert!(text.contains("\"mask\": \"99/99/9999\""));
        assert!(!text.contains("\"mask\": \"00000-000\""));
    }

    #[test]
    fn contains_schema_fallback_and_rules() {
        let text = instruction('0', 'a');
        assert!(text.contains("## Output Schema"));
        assert!(text.contains("\"mask-text\""));
        assert!(text.contains("## Fallback"));
        assert!(text.contains(
            r#"{"type":"text","placeholder":null,"mask":null,"validation":{"required":false,"regex":null,"minLength":null,"maxLength":null}}"#
        ));
        assert!(text.contains("## Validation Rules"));
        assert!(text.contains("prefer false or null"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(instruction('#', 'X'), instruction('#', 'X'));
        assert_ne!(instruction('9', 'a'), instruction('0', 'a'));
    }

    #[test]
    fn example_regex_is_valid_for_the_validation_engine() {
        let config = example_config();
        assert_eq!(formai_core::validate_value(Some("a@b.co"), &config), None);
        assert!(formai_core::validate_value(Some("nope"), &config).is_some());
    }

    #[test]
    fn into_prompt_yields_one_system_message() {
        let fragment = FieldInstructionFragment::new(MaskPlaceholders::default()).unwrap();
        let expected = fragment.render();
        let messages = fragment.into_prompt();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(messages[0].text(), expected);
    }
}
