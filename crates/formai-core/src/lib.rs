//! # `formai-core`
//!
//! Provider-agnostic building blocks shared by every crate in the workspace:
//!
//! * [`field`] – the [`FieldConfig`] document produced by the generation
//!   backend and the caller-supplied [`FieldOptions`],
//! * [`validate`] – the deterministic validation engine consuming a
//!   [`FieldConfig`],
//! * [`provider`], [`generic`], [`model`], [`template`] – the seam between
//!   the field service and a concrete chat-completion backend,
//! * [`error`] – the unified error type.
pub mod error;
pub mod field;
pub mod generic;
pub mod model;
pub mod provider;
pub mod schema_util;
pub mod template;
pub mod validate;

pub use field::{
    FieldConfig, FieldOptions, FieldType, FieldValidation, MaskPatterns, MaskPlaceholders,
};
pub use validate::{FieldValidator, ValidationError, validate_value};
