//! Markdown prompt construction for the formai instruction documents.
pub mod builder;
pub mod chain;
