//! Design token tables.
//!
//! Semantic tokens name a design concept instead of a concrete value:
//!
//! - Color tokens: a [`ColorRole`] optionally followed by a [`ColorState`],
//!   written `"primary"`, `"primary.hover"` or in kebab form
//!   `"background-level1"`
//! - Radius tokens: [`RadiusToken`] (`"sm"` .. `"2xl"`, `"pill"`, `"circle"`)
//! - Shadow tokens: [`ShadowToken`] (`"xs"` .. `"xl"`)
//!
//! A token resolves into a fallback chain of indirect references ending in a
//! literal default, so a consumer that never defines the referenced custom
//! properties still receives a renderable value:
//!
//! ```text
//! var(--ld-color-primary-hover, var(--color-primary-hover, #2563eb))
//! ```
//!
//! Lookups are driven by the data tables at the bottom of this module. Adding
//! a token default is a table change. Unknown names resolve to `None`, and
//! callers pass the original value through untouched.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Prefix of the engine's own custom properties.
pub const VAR_PREFIX: &str = "--ld-";

/// Prefix of the legacy custom properties kept as a secondary fallback.
pub const LEGACY_VAR_PREFIX: &str = "--";

/// Semantic color roles recognized at design-system level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Neutral,
    Background,
    Text,
    Border,
    Surface,
}

impl ColorRole {
    /// Every role, in declaration order.
    pub const ALL: [ColorRole; 11] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Success,
        ColorRole::Danger,
        ColorRole::Warning,
        ColorRole::Info,
        ColorRole::Neutral,
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::Border,
        ColorRole::Surface,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Success => "success",
            ColorRole::Danger => "danger",
            ColorRole::Warning => "warning",
            ColorRole::Info => "info",
            ColorRole::Neutral => "neutral",
            ColorRole::Background => "background",
            ColorRole::Text => "text",
            ColorRole::Border => "border",
            ColorRole::Surface => "surface",
        }
    }

    /// Looks up a role by its token name.
    pub fn from_name(name: &str) -> Option<Self> {
        ROLES_BY_NAME.get(name).copied()
    }

    /// The literal color used when nothing more specific is known.
    pub fn default_color(self) -> &'static str {
        COLOR_LITERALS
            .get(&(self, None))
            .copied()
            .unwrap_or(FALLBACK_COLOR)
    }
}

/// States and variants that may follow a role in a dotted color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorState {
    Default,
    Hover,
    Active,
    Disabled,
    Muted,
    Contrast,
    Secondary,
    Level0,
    Level1,
    Level2,
    OutlinedBorder,
    Solid,
    SolidBg,
    Soft,
    SoftBg,
    Plain,
    PlainColor,
}

impl ColorState {
    /// Every state, in declaration order.
    pub const ALL: [ColorState; 17] = [
        ColorState::Default,
        ColorState::Hover,
        ColorState::Active,
        ColorState::Disabled,
        ColorState::Muted,
        ColorState::Contrast,
        ColorState::Secondary,
        ColorState::Level0,
        ColorState::Level1,
        ColorState::Level2,
        ColorState::OutlinedBorder,
        ColorState::Solid,
        ColorState::SolidBg,
        ColorState::Soft,
        ColorState::SoftBg,
        ColorState::Plain,
        ColorState::PlainColor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorState::Default => "default",
            ColorState::Hover => "hover",
            ColorState::Active => "active",
            ColorState::Disabled => "disabled",
            ColorState::Muted => "muted",
            ColorState::Contrast => "contrast",
            ColorState::Secondary => "secondary",
            ColorState::Level0 => "level0",
            ColorState::Level1 => "level1",
            ColorState::Level2 => "level2",
            ColorState::OutlinedBorder => "outlinedBorder",
            ColorState::Solid => "solid",
            ColorState::SolidBg => "solidBg",
            ColorState::Soft => "soft",
            ColorState::SoftBg => "softBg",
            ColorState::Plain => "plain",
            ColorState::PlainColor => "plainColor",
        }
    }

    /// Looks up a state by its token name.
    pub fn from_name(name: &str) -> Option<Self> {
        STATES_BY_NAME.get(name).copied()
    }
}

/// A parsed color token: a role with an optional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken {
    pub role: ColorRole,
    pub state: Option<ColorState>,
}

impl ColorToken {
    /// Parses `"role"`, `"role.state"` or the kebab alias `"role-state"`.
    ///
    /// Returns `None` for anything outside the closed role and state sets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ldstyle::tokens::{ColorRole, ColorState, ColorToken};
    ///
    /// let token = ColorToken::parse("background-level1").unwrap();
    /// assert_eq!(token.role, ColorRole::Background);
    /// assert_eq!(token.state, Some(ColorState::Level1));
    ///
    /// assert!(ColorToken::parse("primary.sparkly").is_none());
    /// assert!(ColorToken::parse("#ff0000").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let split = token.split_once('.').or_else(|| token.split_once('-'));
        match split {
            Some((role, state)) => Some(Self {
                role: ColorRole::from_name(role)?,
                state: Some(ColorState::from_name(state)?),
            }),
            None => Some(Self {
                role: ColorRole::from_name(token)?,
                state: None,
            }),
        }
    }

    /// The reference name shared by both custom property families,
    /// e.g. `primary-hover`.
    pub fn reference_name(&self) -> String {
        match self.state {
            Some(state) => format!("{}-{}", self.role.as_str(), state.as_str()),
            None => self.role.as_str().to_string(),
        }
    }

    /// The literal default: the exact pair if known, otherwise the role's.
    pub fn literal(&self) -> &'static str {
        COLOR_LITERALS
            .get(&(self.role, self.state))
            .copied()
            .unwrap_or_else(|| self.role.default_color())
    }

    /// Builds the full fallback chain for this token.
    pub fn chain(&self) -> String {
        fallback_chain("color", &self.reference_name(), self.literal())
    }
}

/// The radius scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Pill,
    Circle,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 7] = [
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Xl,
        RadiusToken::Xxl,
        RadiusToken::Pill,
        RadiusToken::Circle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RadiusToken::Sm => "sm",
            RadiusToken::Md => "md",
            RadiusToken::Lg => "lg",
            RadiusToken::Xl => "xl",
            RadiusToken::Xxl => "2xl",
            RadiusToken::Pill => "pill",
            RadiusToken::Circle => "circle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// The literal CSS value of this radius step.
    pub fn literal(self) -> &'static str {
        match self {
            RadiusToken::Sm => "4px",
            RadiusToken::Md => "8px",
            RadiusToken::Lg => "16px",
            RadiusToken::Xl => "20px",
            RadiusToken::Xxl => "24px",
            RadiusToken::Pill => "9999px",
            RadiusToken::Circle => "50%",
        }
    }

    /// `pill` and `circle` are layout constants and never themed.
    pub fn is_themeable(self) -> bool {
        !matches!(self, RadiusToken::Pill | RadiusToken::Circle)
    }

    /// The resolved CSS value: a fallback chain, or the bare literal for
    /// non-themeable steps.
    pub fn resolve(self) -> String {
        if self.is_themeable() {
            fallback_chain("radius", self.as_str(), self.literal())
        } else {
            self.literal().to_string()
        }
    }
}

/// The elevation (box shadow) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl ShadowToken {
    pub const ALL: [ShadowToken; 5] = [
        ShadowToken::Xs,
        ShadowToken::Sm,
        ShadowToken::Md,
        ShadowToken::Lg,
        ShadowToken::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShadowToken::Xs => "xs",
            ShadowToken::Sm => "sm",
            ShadowToken::Md => "md",
            ShadowToken::Lg => "lg",
            ShadowToken::Xl => "xl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn literal(self) -> &'static str {
        match self {
            ShadowToken::Xs => "0 1px 2px rgba(0, 0, 0, .50)",
            ShadowToken::Sm => "0 1px 3px rgba(0, 0, 0, .60)",
            ShadowToken::Md => "0 4px 12px rgba(0, 0, 0, .70)",
            ShadowToken::Lg => "0 8px 24px rgba(0, 0, 0, .80)",
            ShadowToken::Xl => "0 14px 40px rgba(0, 0, 0, .90)",
        }
    }

    pub fn resolve(self) -> String {
        fallback_chain("shadow", self.as_str(), self.literal())
    }
}

/// Resolves a color token string into its fallback chain.
///
/// Literal colors, keywords and existing references are not tokens and
/// return `None`.
///
/// # Example
///
/// ```rust
/// use ldstyle::tokens::resolve_color;
///
/// assert_eq!(
///     resolve_color("primary.hover").as_deref(),
///     Some("var(--ld-color-primary-hover, var(--color-primary-hover, #2563eb))"),
/// );
/// assert_eq!(resolve_color("rgb(1,2,3)"), None);
/// ```
pub fn resolve_color(value: &str) -> Option<String> {
    if is_color_literal(value) {
        return None;
    }
    ColorToken::parse(value).map(|token| token.chain())
}

/// Resolves a radius token string. Unknown names return `None`.
pub fn resolve_radius(value: &str) -> Option<String> {
    RadiusToken::from_name(value.trim()).map(RadiusToken::resolve)
}

/// Resolves a shadow token string. Unknown names return `None`.
pub fn resolve_shadow(value: &str) -> Option<String> {
    ShadowToken::from_name(value.trim()).map(ShadowToken::resolve)
}

/// Converts any color token into its primary indirect reference without
/// validating it against the role tables.
///
/// ```rust
/// use ldstyle::tokens::color_var;
///
/// assert_eq!(color_var("text.secondary"), "var(--ld-color-text-secondary)");
/// assert_eq!(color_var("background-level1"), "var(--ld-color-background-level1)");
/// ```
pub fn color_var(token: &str) -> String {
    format!("var({}color-{})", VAR_PREFIX, token.trim().replace('.', "-"))
}

/// Returns `true` for values that are colors in their own right: hex
/// literals, functional notations, CSS keywords and existing references.
pub fn is_color_literal(value: &str) -> bool {
    let s = value.trim();
    if s.starts_with('#') || crate::util::is_css_reference(s) {
        return true;
    }
    let lower = s.to_ascii_lowercase();
    ["rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color("]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
        || CSS_COLOR_KEYWORDS.contains(&lower.as_str())
}

fn fallback_chain(family: &str, name: &str, literal: &str) -> String {
    format!(
        "var({}{}-{}, var({}{}-{}, {}))",
        VAR_PREFIX, family, name, LEGACY_VAR_PREFIX, family, name, literal
    )
}

const FALLBACK_COLOR: &str = "currentcolor";

const CSS_COLOR_KEYWORDS: &[&str] = &[
    "black",
    "silver",
    "gray",
    "grey",
    "white",
    "maroon",
    "red",
    "purple",
    "fuchsia",
    "green",
    "lime",
    "olive",
    "yellow",
    "navy",
    "blue",
    "teal",
    "aqua",
    "orange",
    "aliceblue",
    "antiquewhite",
    "transparent",
    "currentcolor",
    "inherit",
    "initial",
    "revert",
    "unset",
];

// Literal defaults. `None` rows are the role's base color.
const COLOR_DEFAULTS: &[(ColorRole, Option<ColorState>, &str)] = &[
    (ColorRole::Primary, None, "#3b82f6"),
    (ColorRole::Primary, Some(ColorState::Hover), "#2563eb"),
    (ColorRole::Primary, Some(ColorState::Active), "#1d4ed8"),
    (ColorRole::Primary, Some(ColorState::Contrast), "#ffffff"),
    (ColorRole::Secondary, None, "#e5e7eb"),
    (ColorRole::Secondary, Some(ColorState::Hover), "#d1d5db"),
    (ColorRole::Secondary, Some(ColorState::Disabled), "#f3f4f6"),
    (ColorRole::Success, None, "#22c55e"),
    (ColorRole::Danger, None, "#ef4444"),
    (ColorRole::Warning, None, "#f59e0b"),
    (ColorRole::Info, None, "#0ea5e9"),
    (ColorRole::Neutral, None, "#6b7280"),
    (ColorRole::Background, None, "#0b0f16"),
    (ColorRole::Background, Some(ColorState::Level0), "#0b0f16"),
    (ColorRole::Background, Some(ColorState::Level1), "#0e0e12"),
    (ColorRole::Background, Some(ColorState::Level2), "#12131a"),
    (ColorRole::Text, None, "#e5e7eb"),
    (ColorRole::Text, Some(ColorState::Secondary), "#9ca3af"),
    (ColorRole::Text, Some(ColorState::Muted), "#9ca3af"),
    (ColorRole::Text, Some(ColorState::Disabled), "#6b7280"),
    (ColorRole::Border, None, "#1f2937"),
    (ColorRole::Border, Some(ColorState::Default), "#1f2937"),
    (ColorRole::Surface, None, "#12131a"),
];

static COLOR_LITERALS: Lazy<HashMap<(ColorRole, Option<ColorState>), &'static str>> =
    Lazy::new(|| {
        COLOR_DEFAULTS
            .iter()
            .map(|&(role, state, literal)| ((role, state), literal))
            .collect()
    });

static ROLES_BY_NAME: Lazy<HashMap<&'static str, ColorRole>> =
    Lazy::new(|| ColorRole::ALL.into_iter().map(|r| (r.as_str(), r)).collect());

static STATES_BY_NAME: Lazy<HashMap<&'static str, ColorState>> =
    Lazy::new(|| ColorState::ALL.into_iter().map(|s| (s.as_str(), s)).collect());
