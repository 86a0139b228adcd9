//! Theme struct threaded through every resolution.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;

use super::breakpoint::{Breakpoint, Breakpoints};
use super::error::ThemeError;
use crate::util::format_px;

/// Maps a spacing multiplier to pixels.
pub type SpacingFn = dyn Fn(f64) -> f64 + Send + Sync;

/// The spacing scale of a theme.
///
/// [`Spacing::Unit`] multiplies: with the default unit of 8, a spacing value
/// of `2` is `16px`. `Spacing::Unit(1.0)` makes spacing values plain pixels.
#[derive(Clone)]
pub enum Spacing {
    Unit(f64),
    Custom(Arc<SpacingFn>),
}

impl Spacing {
    /// The default spacing unit, in pixels.
    pub const DEFAULT_UNIT: f64 = 8.0;

    /// Wraps an arbitrary spacing function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Spacing::Custom(Arc::new(f))
    }

    /// Applies the scale to a multiplier.
    pub fn apply(&self, n: f64) -> f64 {
        match self {
            Spacing::Unit(unit) => n * unit,
            Spacing::Custom(f) => f(n),
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Unit(Self::DEFAULT_UNIT)
    }
}

impl fmt::Debug for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Unit(unit) => f.debug_tuple("Unit").field(unit).finish(),
            Spacing::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// Breakpoints and spacing used when resolving style specifications.
///
/// Themes are immutable values built with a fluent API. Anything not set
/// keeps its built-in default, so a partially configured theme is always
/// usable.
///
/// # Example
///
/// ```rust
/// use ldstyle::{Breakpoint, Spacing, Theme};
///
/// let theme = Theme::new()
///     .with_spacing(Spacing::Unit(4.0))
///     .with_breakpoint(Breakpoint::Md, 768);
///
/// assert_eq!(theme.spacing(3.0), 12.0);
/// assert_eq!(theme.media_query(Breakpoint::Md), "@media (min-width:768px)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    breakpoints: Breakpoints,
    spacing: Spacing,
}

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(Theme::new);

/// The shared built-in theme: five tiers at 0/600/900/1200/1536px and a
/// spacing unit of 8px.
pub fn default_theme() -> &'static Theme {
    &DEFAULT_THEME
}

impl Theme {
    /// Creates a theme with the built-in breakpoints and spacing.
    pub fn new() -> Self {
        Self {
            breakpoints: Breakpoints::new(),
            spacing: Spacing::default(),
        }
    }

    /// Replaces the spacing scale.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Replaces the spacing scale with a function.
    pub fn with_spacing_fn<F>(self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.with_spacing(Spacing::custom(f))
    }

    /// Replaces the whole breakpoint table.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Overrides the min width of one tier.
    pub fn with_breakpoint(mut self, breakpoint: Breakpoint, px: u32) -> Self {
        self.breakpoints = self.breakpoints.with_value(breakpoint, px);
        self
    }

    /// Replaces the rule that builds conditional block keys.
    pub fn with_rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(Breakpoint, u32) -> String + Send + Sync + 'static,
    {
        self.breakpoints = self.breakpoints.with_rule(rule);
        self
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Applies the spacing scale to a multiplier.
    pub fn spacing(&self, n: f64) -> f64 {
        self.spacing.apply(n)
    }

    /// The conditional block key for a tier and above.
    pub fn media_query(&self, breakpoint: Breakpoint) -> String {
        self.breakpoints.up(breakpoint)
    }

    /// Converts a spacing value to CSS: numbers go through the spacing scale
    /// and become pixel lengths, anything else is returned unchanged.
    ///
    /// ```rust
    /// use ldstyle::default_theme;
    /// use serde_json::json;
    ///
    /// assert_eq!(default_theme().space(&json!(2)), json!("16px"));
    /// assert_eq!(default_theme().space(&json!("1rem")), json!("1rem"));
    /// ```
    pub fn space(&self, value: &Value) -> Value {
        match value.as_f64() {
            Some(n) => Value::String(format_px(self.spacing(n))),
            None => value.clone(),
        }
    }

    /// Checks that tier widths never decrease from one tier to the next.
    ///
    /// Resolution does not require this, but a theme that breaks it produces
    /// conditional blocks whose override order fights the cascade.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let tiers: Vec<(Breakpoint, u32)> = self.breakpoints.iter().collect();
        for pair in tiers.windows(2) {
            let (smaller, smaller_px) = pair[0];
            let (larger, larger_px) = pair[1];
            if larger_px < smaller_px {
                return Err(ThemeError::UnorderedBreakpoints {
                    smaller,
                    smaller_px,
                    larger,
                    larger_px,
                });
            }
        }
        if let Spacing::Unit(unit) = self.spacing {
            if !unit.is_finite() || unit < 0.0 {
                return Err(ThemeError::InvalidSpacing { unit });
            }
        }
        Ok(())
    }
}
