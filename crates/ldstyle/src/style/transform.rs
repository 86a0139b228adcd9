//! Per-property value transformation.
//!
//! Each canonical property belongs to at most one [`PropertyKind`], which
//! decides how its value is rewritten:
//!
//! - Spacing properties: numbers go through the theme's spacing scale
//! - Length properties: numbers become pixel lengths
//! - Color properties: color tokens become fallback chains
//! - Radius properties: numbers become pixels, radius tokens become chains
//! - Shadow properties: shadow tokens become chains
//!
//! Everything else, and every value that is not recognized, passes through
//! unchanged.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::trace;

use super::responsive::{has_tier_keys, split_tiers};
use super::{shorthand, StyleObject};
use crate::theme::Theme;
use crate::tokens;
use crate::util::format_px;

/// How a property's value is transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Spacing,
    Length,
    Color,
    Radius,
    Shadow,
}

impl PropertyKind {
    /// Classifies a canonical property name. Unknown properties return `None`.
    pub fn of(property: &str) -> Option<Self> {
        PROPERTY_KINDS.get(property).copied()
    }
}

const SPACING_PROPERTIES: &[&str] = &[
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "gap",
    "rowGap",
    "columnGap",
];

const LENGTH_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "minWidth",
    "maxWidth",
    "minHeight",
    "maxHeight",
    "top",
    "right",
    "bottom",
    "left",
    "inset",
    "flexBasis",
    "fontSize",
    "borderWidth",
];

const COLOR_PROPERTIES: &[&str] = &[
    "color",
    "background",
    "backgroundColor",
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "outlineColor",
    "fill",
    "stroke",
    "caretColor",
    "textDecorationColor",
    "accentColor",
];

const RADIUS_PROPERTIES: &[&str] = &[
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomRightRadius",
    "borderBottomLeftRadius",
];

const SHADOW_PROPERTIES: &[&str] = &["boxShadow"];

static PROPERTY_KINDS: Lazy<HashMap<&'static str, PropertyKind>> = Lazy::new(|| {
    let tables: [(&[&'static str], PropertyKind); 5] = [
        (SPACING_PROPERTIES, PropertyKind::Spacing),
        (LENGTH_PROPERTIES, PropertyKind::Length),
        (COLOR_PROPERTIES, PropertyKind::Color),
        (RADIUS_PROPERTIES, PropertyKind::Radius),
        (SHADOW_PROPERTIES, PropertyKind::Shadow),
    ];
    tables
        .into_iter()
        .flat_map(|(names, kind)| names.iter().map(move |&name| (name, kind)))
        .collect()
});

/// Transforms a single leaf value of a canonical property.
///
/// # Example
///
/// ```rust
/// use ldstyle::{default_theme, transform_value};
/// use serde_json::json;
///
/// let theme = default_theme();
/// assert_eq!(transform_value("padding", json!(2), theme), json!("16px"));
/// assert_eq!(transform_value("width", json!(400), theme), json!("400px"));
/// assert_eq!(transform_value("opacity", json!(0.5), theme), json!(0.5));
/// assert_eq!(transform_value("borderRadius", json!("pill"), theme), json!("9999px"));
/// assert_eq!(transform_value("color", json!("#ff0000"), theme), json!("#ff0000"));
/// ```
pub fn transform_value(property: &str, value: Value, theme: &Theme) -> Value {
    let Some(kind) = PropertyKind::of(property) else {
        return value;
    };
    match value {
        Value::Number(n) => match (kind, n.as_f64()) {
            (PropertyKind::Spacing, Some(n)) => Value::String(format_px(theme.spacing(n))),
            (PropertyKind::Length | PropertyKind::Radius, Some(n)) => Value::String(format_px(n)),
            _ => Value::Number(n),
        },
        Value::String(s) => {
            let resolved = match kind {
                PropertyKind::Color => tokens::resolve_color(&s),
                PropertyKind::Radius => tokens::resolve_radius(&s),
                PropertyKind::Shadow => tokens::resolve_shadow(&s),
                PropertyKind::Spacing | PropertyKind::Length => return Value::String(s),
            };
            match resolved {
                Some(resolved) => Value::String(resolved),
                None => {
                    trace!(property, value = %s, "passing through unrecognized token");
                    Value::String(s)
                }
            }
        }
        other => other,
    }
}

/// Compiles a flat style object against a theme: aliases, shorthands,
/// tokens and spacing, without breakpoint expansion or list composition.
///
/// Per-property responsive maps keep their shape with each tier's value
/// transformed, followed by any non-tier keys compiled as a nested object;
/// other nested objects are compiled recursively. Compiling a
/// compiled object changes nothing.
pub fn compile_with(obj: &StyleObject, theme: &Theme) -> StyleObject {
    shorthand::expand(obj.clone())
        .into_iter()
        .map(|(key, value)| {
            let value = compile_value(&key, value, theme);
            (key, value)
        })
        .collect()
}

fn compile_value(property: &str, value: Value, theme: &Theme) -> Value {
    match value {
        Value::Object(inner) if has_tier_keys(&inner) => {
            let (tiers, rest) = split_tiers(inner);
            let mut out: StyleObject = tiers
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(tier, v)| {
                    let v = match v {
                        Value::Object(nested) => Value::Object(compile_with(&nested, theme)),
                        leaf => transform_value(property, leaf, theme),
                    };
                    (tier, v)
                })
                .collect();
            out.extend(compile_with(&rest, theme));
            Value::Object(out)
        }
        Value::Object(inner) => Value::Object(compile_with(&inner, theme)),
        leaf => transform_value(property, leaf, theme),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn property() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "p", "px", "mt", "m", "gap", "width", "top", "color", "bgcolor", "borderColor",
            "radius", "borderRadius", "boxShadow", "shadow", "opacity", "display", "zIndex",
        ])
        .prop_map(str::to_string)
    }

    fn leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            (-20i32..20).prop_map(Value::from),
            prop::sample::select(vec![
                "primary", "primary.hover", "text-secondary", "danger.soft", "sm", "md",
                "2xl", "pill", "circle", "xs", "#123456", "rgb(1,2,3)", "auto", "10%",
                "var(--x)", "flex", "none", "brand",
            ])
            .prop_map(Value::from),
        ]
    }

    fn value() -> impl Strategy<Value = Value> {
        prop_oneof![
            3 => leaf(),
            1 => prop::collection::btree_map(
                prop::sample::select(vec!["xs", "sm", "md", "lg", "xl"]),
                leaf(),
                1..4,
            )
            .prop_map(|m| Value::Object(m.into_iter().map(|(k, v)| (k.to_string(), v)).collect())),
        ]
    }

    fn flat_object() -> impl Strategy<Value = StyleObject> {
        prop::collection::vec((property(), value()), 0..8)
            .prop_map(|entries| entries.into_iter().collect())
    }

    proptest! {
        #[test]
        fn compile_is_idempotent(obj in flat_object()) {
            let theme = Theme::new();
            let once = compile_with(&obj, &theme);
            let twice = compile_with(&once, &theme);
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn compile_leaves_no_shorthands(obj in flat_object()) {
            let out = compile_with(&obj, &Theme::new());
            for key in out.keys() {
                prop_assert!(!shorthand::is_shorthand(key), "shorthand {} survived", key);
            }
        }
    }
}
