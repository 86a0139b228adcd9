//! Style objects and the normalization pipeline.
//!
//! This module provides the styling primitives:
//!
//! - [`StyleSpec`]: The declarative input (object, generator, list or nothing)
//! - [`StyleObject`]: An ordered map of CSS properties, the resolved output
//! - [`merge_into`] / [`merged`]: The deep merge used to compose specs
//! - [`transform_value`] / [`compile_with`]: Per-property value transformation
//! - [`StyleError`]: Failures raised while resolving a spec
//!
//! Every object in a spec goes through the same steps: shorthand and alias
//! expansion, responsive expansion into conditional blocks, then per-value
//! transformation (spacing, lengths and design tokens).

mod error;
mod merge;
pub(crate) mod responsive;
pub mod shorthand;
mod spec;
mod transform;

/// An insertion-ordered map of property names (or selector and condition
/// keys) to values.
pub type StyleObject = serde_json::Map<String, serde_json::Value>;

pub use error::StyleError;
pub use merge::{merge_into, merged};
pub use spec::{BoxError, GeneratorFn, StyleSpec};
pub use transform::{compile_with, transform_value, PropertyKind};
