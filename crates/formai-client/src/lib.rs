//! # `formai-client`
//!
//! Everything a UI binding needs to drive an AI-configured input:
//!
//! | Item                              | Purpose                                                        |
//! |-----------------------------------|----------------------------------------------------------------|
//! | [`get_field_config`]              | Ask the field service for a [`FieldConfig`]                    |
//! | [`validate_value`]                | Check a value against a [`FieldConfig`]                        |
//! | [`FieldState`]                    | Observable value / error / config / loading record             |
//! | [`FieldController`]               | Framework-neutral driver combining the three above             |
//!
//! ```rust,no_run
//! use formai_client::{FieldController, FieldOptions, MaskPatterns};
//!
//! # async fn run() {
//! let controller = FieldController::new();
//! let options = FieldOptions::default().with_mask_patterns(MaskPatterns::new().with_digit('9'));
//!
//! controller.initialize("CEP", Some(&options)).await;
//! controller.set_value("12345-678");
//! controller.validate();
//!
//! println!("{:?}", controller.state().snapshot().error);
//! # }
//! ```
mod controller;
mod error;
mod generator;
mod state;

pub use controller::{FIELD_GENERATION_FAILED, FieldController};
pub use error::GenerationFailure;
pub use generator::{DEFAULT_ENDPOINT, FieldConfigGenerator, get_field_config};
pub use state::{FieldSnapshot, FieldState};

pub use formai_core::{
    FieldConfig, FieldOptions, FieldType, FieldValidation, FieldValidator, MaskPatterns,
    ValidationError, validate_value,
};
