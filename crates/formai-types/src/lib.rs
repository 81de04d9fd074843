//! Reusable prompt fragments for the formai field service.
//!
//! * [`fragments::StaticFragment`] – a fixed string with a chat role, used
//!   for the caller's field description.
//! * [`fragments::FieldInstructionFragment`] – the system instruction that
//!   pins the backend to the [`FieldConfig`](formai_core::FieldConfig)
//!   schema and to the caller's mask placeholders.
pub mod fragments;
