//! Style resolution for design-system components.
//!
//! `ldstyle` takes a declarative style specification and compiles it into a
//! concrete, insertion-ordered map of CSS properties. It behaves like a small
//! compiler:
//!
//! - expands spacing shorthands and property aliases (`p`, `mx`, `bgcolor`)
//! - expands responsive values into conditional blocks keyed by media query
//! - resolves design tokens (color roles, radius and shadow scales) into
//!   `var(...)` fallback chains ending in a literal
//! - composes lists of specifications with a deep merge, later entries winning
//!
//! Unknown properties and tokens pass through unchanged, so raw CSS always
//! works.
//!
//! # Example
//!
//! ```rust
//! use ldstyle::resolve;
//! use serde_json::json;
//!
//! let style = resolve(json!({
//!     "p": 2,
//!     "bgcolor": "primary.hover",
//!     "width": { "xs": "100%", "md": 400 },
//! }))
//! .unwrap();
//!
//! assert_eq!(style["padding"], json!("16px"));
//! assert_eq!(
//!     style["backgroundColor"],
//!     json!("var(--ld-color-primary-hover, var(--color-primary-hover, #2563eb))")
//! );
//! assert_eq!(style["width"], json!("100%"));
//! assert_eq!(style["@media (min-width:900px)"], json!({ "width": "400px" }));
//! ```
//!
//! # Themes
//!
//! Breakpoint widths and the spacing scale come from a [`Theme`]. The
//! built-in theme ([`default_theme`]) has tiers at 0/600/900/1200/1536px and
//! a spacing unit of 8px. Themes are built fluently or loaded from YAML:
//!
//! ```rust
//! use ldstyle::{resolve_with, Theme};
//! use serde_json::json;
//!
//! let theme = Theme::from_yaml("spacing: 4\nbreakpoints:\n  md: 768\n").unwrap();
//! let style = resolve_with(json!({ "m": { "md": 2 } }), &theme).unwrap();
//! assert_eq!(style["@media (min-width:768px)"], json!({ "margin": "8px" }));
//! ```
//!
//! # Modules
//!
//! - [`style`]: Specifications, the normalization pipeline and deep merge
//! - [`theme`]: Breakpoints, spacing and theme configuration
//! - [`tokens`]: Color, radius and shadow token tables

mod resolver;
pub mod style;
pub mod theme;
pub mod tokens;
mod util;

pub use resolver::{resolve, resolve_with, Resolver, MAX_GENERATOR_DEPTH};
pub use style::{
    compile_with, merge_into, merged, transform_value, BoxError, GeneratorFn, PropertyKind,
    StyleError, StyleObject, StyleSpec,
};
pub use theme::{
    default_theme, Breakpoint, Breakpoints, RuleFn, Spacing, SpacingFn, Theme, ThemeConfig,
    ThemeError,
};
pub use util::{format_px, to_css_length};

/// Compiles a flat style object against the default theme.
///
/// See [`compile_with`].
///
/// ```rust
/// use ldstyle::compile;
/// use serde_json::json;
///
/// let obj = json!({ "px": 1, "radius": "sm" }).as_object().cloned().unwrap();
/// let once = compile(&obj);
/// assert_eq!(once["paddingLeft"], json!("8px"));
/// assert_eq!(compile(&once), once);
/// ```
pub fn compile(obj: &StyleObject) -> StyleObject {
    compile_with(obj, default_theme())
}
