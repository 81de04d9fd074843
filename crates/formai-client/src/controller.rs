use std::sync::{Mutex, PoisonError};

use formai_core::{FieldConfig, FieldOptions, FieldValidator};

use crate::{generator::FieldConfigGenerator, state::FieldState};

/// Message stored in the field state when generation fails.
pub const FIELD_GENERATION_FAILED: &str = "Failed to generate the AI field.";

/// Framework-neutral driver for one AI-configured input.
///
/// A UI binding owns one controller per mounted field: it calls
/// [`Self::initialize`] once per mount (or per distinct prompt),
/// [`Self::set_value`] on input and [`Self::validate`] on blur, and renders
/// from [`FieldState::subscribe`].
///
/// On generation failure the field stays usable but unconfigured: no mask,
/// no inferred validators, and [`FIELD_GENERATION_FAILED`] as its error.
#[derive(Debug, Default)]
pub struct FieldController {
    generator: FieldConfigGenerator,
    state: FieldState,
    /// Validator for the configuration it was built from.
    validator: Mutex<Option<(FieldValidator, FieldConfig)>>,
}

impl FieldController {
    /// Controller talking to [`crate::DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator(generator: FieldConfigGenerator) -> Self {
        Self {
            generator,
            state: FieldState::new(),
            validator: Mutex::new(None),
        }
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Fetch the configuration for `prompt` and store it.
    pub async fn initialize(&self, prompt: &str, options: Option<&FieldOptions>) {
        self.state.set_loading(true);
        self.state.set_error(None);

        match self.generator.get_field_config(prompt, options).await {
            Ok(config) => self.state.set_config(Some(config)),
            Err(_) => self.state.set_error(Some(FIELD_GENERATION_FAILED.to_owned())),
        }

        self.state.set_loading(false);
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.state.set_value(value);
    }

    /// Validate the current value. Does nothing until a configuration has
    /// been loaded.
    pub fn validate(&self) {
        let Some(config) = self.state.config() else {
            return;
        };

        let value = self.state.value();
        let error = {
            let mut cached = self.validator.lock().unwrap_or_else(PoisonError::into_inner);
            if cached.as_ref().is_none_or(|(_, built_for)| *built_for != config) {
                *cached = Some((FieldValidator::new(&config), config));
            }
            cached
                .as_ref()
                .and_then(|(validator, _)| validator.validate(Some(&value)))
                .map(|e| e.to_string())
        };
        self.state.set_error(error);
    }
}
