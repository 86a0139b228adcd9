//! The style specification input type.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::StyleObject;
use crate::theme::Theme;

/// Error type a fallible generator may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A theme-dependent specification, evaluated at resolution time.
pub type GeneratorFn = dyn Fn(&Theme) -> Result<StyleSpec, BoxError> + Send + Sync;

/// A declarative style specification.
///
/// Specifications compose: a list is resolved first to last, later entries
/// overriding earlier ones, and [`StyleSpec::Empty`] entries contribute
/// nothing. That makes conditional composition cheap:
///
/// ```rust
/// use ldstyle::{resolve, StyleSpec};
/// use serde_json::json;
///
/// let disabled = false;
/// let spec = StyleSpec::from(vec![
///     StyleSpec::from(json!({ "color": "primary", "p": 1 })),
///     disabled.then(|| StyleSpec::from(json!({ "opacity": 0.5 }))).into(),
///     StyleSpec::from_fn(|theme| json!({ "gap": theme.space(&json!(1)) }).into()),
/// ]);
///
/// let style = resolve(spec).unwrap();
/// assert_eq!(style["padding"], json!("8px"));
/// assert_eq!(style["gap"], json!("8px"));
/// assert!(style.get("opacity").is_none());
/// ```
#[derive(Clone, Default)]
pub enum StyleSpec {
    /// Contributes nothing.
    #[default]
    Empty,
    /// A style map of property names to values.
    Object(StyleObject),
    /// A function of the theme producing another specification.
    Generator(Arc<GeneratorFn>),
    /// Specifications composed left to right.
    List(Vec<StyleSpec>),
}

impl StyleSpec {
    /// Wraps an infallible theme-dependent specification.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Theme) -> StyleSpec + Send + Sync + 'static,
    {
        StyleSpec::Generator(Arc::new(move |theme| Ok(f(theme))))
    }

    /// Wraps a fallible theme-dependent specification. An error aborts the
    /// resolution that evaluates it.
    pub fn try_from_fn<F, E>(f: F) -> Self
    where
        F: Fn(&Theme) -> Result<StyleSpec, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        StyleSpec::Generator(Arc::new(move |theme| f(theme).map_err(Into::into)))
    }

    /// Returns `true` for [`StyleSpec::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, StyleSpec::Empty)
    }

    /// Appends another specification, producing a list.
    pub fn then(self, next: impl Into<StyleSpec>) -> Self {
        match self {
            StyleSpec::List(mut items) => {
                items.push(next.into());
                StyleSpec::List(items)
            }
            StyleSpec::Empty => StyleSpec::List(vec![next.into()]),
            other => StyleSpec::List(vec![other, next.into()]),
        }
    }
}

impl fmt::Debug for StyleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSpec::Empty => f.write_str("Empty"),
            StyleSpec::Object(obj) => f.debug_tuple("Object").field(obj).finish(),
            StyleSpec::Generator(_) => f.write_str("Generator(<fn>)"),
            StyleSpec::List(items) => f.debug_tuple("List").field(items).finish(),
        }
    }
}

impl From<StyleObject> for StyleSpec {
    fn from(obj: StyleObject) -> Self {
        StyleSpec::Object(obj)
    }
}

/// Objects become [`StyleSpec::Object`], arrays become lists, and every
/// scalar (`null`, `false`, numbers, strings) contributes nothing.
impl From<Value> for StyleSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(obj) => StyleSpec::Object(obj),
            Value::Array(items) => StyleSpec::List(items.into_iter().map(Into::into).collect()),
            _ => StyleSpec::Empty,
        }
    }
}

impl<T: Into<StyleSpec>> From<Option<T>> for StyleSpec {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleSpec::Empty, Into::into)
    }
}

impl<T: Into<StyleSpec>> From<Vec<T>> for StyleSpec {
    fn from(items: Vec<T>) -> Self {
        StyleSpec::List(items.into_iter().map(Into::into).collect())
    }
}
