//! Helpers for turning Rust type information into JSON Schema that can be
//! shipped inside a backend instruction. The JSON is produced with
//! [`schemars`].

use schemars::{JsonSchema, SchemaGenerator, r#gen::SchemaSettings};
use serde_json::Value;

use crate::error::Result;

/// Generate a JSON Schema for the given `T` **inline**, i.e. without
/// `$ref` pointers to external definitions.
///
/// Language models read an inlined schema far more reliably than one that
/// points into a `definitions` table.
///
/// # Example
///
/// ```
/// use formai_core::{FieldConfig, schema_util::derive_response_schema};
///
/// let schema = derive_response_schema::<FieldConfig>().unwrap();
/// assert!(schema["properties"]["type"].is_object());
/// ```
pub fn derive_response_schema<T>() -> Result<Value>
where
    T: JsonSchema + 'static,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    Ok(serde_json::to_value(root)?)
}
