//! Resolution of style specifications into compiled style objects.

use tracing::{debug, trace};

use crate::style::responsive::normalize;
use crate::style::{merge_into, StyleError, StyleObject, StyleSpec};
use crate::theme::{default_theme, Theme};

/// How many generators may produce generators before resolution gives up.
pub const MAX_GENERATOR_DEPTH: usize = 64;

/// Resolves a specification against a theme.
///
/// Lists are folded first to last, each entry normalized and deep-merged
/// over the accumulated result; `Empty` entries contribute nothing and
/// generators are called with `theme` before their output is folded in the
/// same way. The first generator error aborts the whole call.
///
/// # Example
///
/// ```rust
/// use ldstyle::{resolve_with, Breakpoint, Theme};
/// use serde_json::json;
///
/// let theme = Theme::new().with_breakpoint(Breakpoint::Md, 768);
/// let style = resolve_with(json!({ "width": { "xs": "100%", "md": 400 } }), &theme).unwrap();
///
/// assert_eq!(
///     serde_json::Value::Object(style),
///     json!({ "width": "100%", "@media (min-width:768px)": { "width": "400px" } })
/// );
/// ```
pub fn resolve_with(spec: impl Into<StyleSpec>, theme: &Theme) -> Result<StyleObject, StyleError> {
    let spec = spec.into();
    debug!(entries = entry_count(&spec), "resolving style spec");
    let mut acc = StyleObject::new();
    fold(&spec, theme, 0, &mut acc)?;
    debug!(keys = acc.len(), "resolved style spec");
    Ok(acc)
}

/// Resolves a specification against the default theme.
pub fn resolve(spec: impl Into<StyleSpec>) -> Result<StyleObject, StyleError> {
    resolve_with(spec, default_theme())
}

fn entry_count(spec: &StyleSpec) -> usize {
    match spec {
        StyleSpec::List(items) => items.len(),
        StyleSpec::Empty => 0,
        _ => 1,
    }
}

fn fold(
    spec: &StyleSpec,
    theme: &Theme,
    depth: usize,
    acc: &mut StyleObject,
) -> Result<(), StyleError> {
    match spec {
        StyleSpec::Empty => {
            trace!("skipping empty style entry");
            Ok(())
        }
        StyleSpec::Object(obj) => {
            merge_into(acc, normalize(obj.clone(), theme));
            Ok(())
        }
        StyleSpec::List(items) => items
            .iter()
            .try_for_each(|item| fold(item, theme, depth, acc)),
        StyleSpec::Generator(generator) => {
            if depth >= MAX_GENERATOR_DEPTH {
                return Err(StyleError::GeneratorDepth {
                    limit: MAX_GENERATOR_DEPTH,
                });
            }
            trace!(depth, "calling style generator");
            let produced = generator(theme).map_err(StyleError::generator)?;
            fold(&produced, theme, depth + 1, acc)
        }
    }
}

/// A resolver bound to one theme.
///
/// # Example
///
/// ```rust
/// use ldstyle::{Resolver, Spacing, StyleSpec, Theme};
/// use serde_json::json;
///
/// let resolver = Resolver::new(Theme::new().with_spacing(Spacing::Unit(4.0)));
///
/// let style = resolver.resolve(json!({ "p": 2 })).unwrap().unwrap();
/// assert_eq!(style["padding"], json!("8px"));
///
/// assert!(resolver.resolve(StyleSpec::Empty).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    theme: Theme,
}

impl Resolver {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Resolves `spec` against this resolver's theme. A spec that is
    /// `Empty` at the top level yields `None`.
    pub fn resolve(&self, spec: impl Into<StyleSpec>) -> Result<Option<StyleObject>, StyleError> {
        match spec.into() {
            StyleSpec::Empty => Ok(None),
            spec => resolve_with(spec, &self.theme).map(Some),
        }
    }
}
