//! Breakpoint expansion.
//!
//! Two responsive forms are recognized in a style object:
//!
//! ```text
//! { "width": { "xs": "100%", "md": 400 } }      per-property map
//! { "md": { "width": 400 } }                     tier-keyed block
//! ```
//!
//! Both become conditional blocks keyed by the theme's media query for the
//! tier. The base tier (`xs`) is unconditional, so its values land at the top
//! level instead of inside a block. No breakpoint name survives as a key of
//! the normalized object.

use serde_json::Value;
use tracing::trace;

use super::merge::{merge_entry, merge_into};
use super::transform::transform_value;
use super::{shorthand, StyleObject};
use crate::theme::{Breakpoint, Theme};

/// Returns `true` if any key of the object names a breakpoint.
pub(crate) fn has_tier_keys(obj: &StyleObject) -> bool {
    obj.keys().any(|key| Breakpoint::from_name(key).is_some())
}

/// Splits a map into its breakpoint-named entries and everything else.
pub(crate) fn split_tiers(obj: StyleObject) -> (StyleObject, StyleObject) {
    obj.into_iter()
        .partition(|(key, _)| Breakpoint::from_name(key).is_some())
}

/// Normalizes one style object: shorthands expanded, values transformed and
/// every responsive form turned into conditional blocks. Nested selectors
/// are normalized recursively.
///
/// In a property map mixing tiers with other keys, the tiers are expanded
/// and the remaining keys stay under the property as a nested selector. A
/// breakpoint-named key with a scalar value has no block to go to and is
/// dropped.
pub(crate) fn normalize(obj: StyleObject, theme: &Theme) -> StyleObject {
    let mut out = StyleObject::new();
    for (key, value) in shorthand::expand(obj) {
        match (Breakpoint::from_name(&key), value) {
            (Some(breakpoint), Value::Object(block)) => {
                let block = normalize(block, theme);
                if breakpoint.is_base() {
                    merge_into(&mut out, block);
                } else {
                    merge_entry(&mut out, theme.media_query(breakpoint), Value::Object(block));
                }
            }
            (Some(breakpoint), scalar) => {
                trace!(tier = %breakpoint, value = %scalar, "dropping scalar under breakpoint key");
            }
            (None, Value::Object(inner)) if has_tier_keys(&inner) => {
                let (tiers, rest) = split_tiers(inner);
                if !rest.is_empty() {
                    merge_entry(&mut out, key.clone(), Value::Object(normalize(rest, theme)));
                }
                spread_tiers(&mut out, &key, tiers, theme);
            }
            (None, Value::Object(nested)) => {
                merge_entry(&mut out, key, Value::Object(normalize(nested, theme)));
            }
            (None, leaf) => {
                let leaf = transform_value(&key, leaf, theme);
                out.insert(key, leaf);
            }
        }
    }
    out
}

/// Writes each tier of a per-property map, in ascending tier order.
fn spread_tiers(out: &mut StyleObject, property: &str, mut tiers: StyleObject, theme: &Theme) {
    for breakpoint in Breakpoint::ALL {
        let Some(value) = tiers.get_mut(breakpoint.as_str()).map(Value::take) else {
            continue;
        };
        let value = match value {
            Value::Null => continue,
            Value::Object(nested) => Value::Object(normalize(nested, theme)),
            leaf => transform_value(property, leaf, theme),
        };
        if breakpoint.is_base() {
            merge_entry(out, property.to_string(), value);
        } else {
            let mut block = StyleObject::new();
            block.insert(property.to_string(), value);
            merge_entry(out, theme.media_query(breakpoint), Value::Object(block));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize_json(value: Value) -> Value {
        let Value::Object(obj) = value else {
            panic!("expected object");
        };
        Value::Object(normalize(obj, &Theme::new()))
    }

    fn assert_no_tier_keys(value: &Value) {
        if let Value::Object(obj) = value {
            for (key, inner) in obj {
                assert!(Breakpoint::from_name(key).is_none(), "tier key {} survived", key);
                assert_no_tier_keys(inner);
            }
        }
    }

    #[test]
    fn test_has_tier_keys() {
        let pure = json!({"xs": 1, "lg": 2});
        let mixed = json!({"xs": 1, "color": "red"});
        let none = json!({"color": "red"});
        let empty = json!({});
        assert!(has_tier_keys(pure.as_object().unwrap()));
        assert!(has_tier_keys(mixed.as_object().unwrap()));
        assert!(!has_tier_keys(none.as_object().unwrap()));
        assert!(!has_tier_keys(empty.as_object().unwrap()));
    }

    #[test]
    fn test_split_tiers_keeps_order() {
        let obj = json!({"&:hover": 1, "md": 2, "xs": 3, "color": 4});
        let (tiers, rest) = split_tiers(obj.as_object().cloned().unwrap());
        let tier_keys: Vec<&str> = tiers.keys().map(String::as_str).collect();
        let rest_keys: Vec<&str> = rest.keys().map(String::as_str).collect();
        assert_eq!(tier_keys, vec!["md", "xs"]);
        assert_eq!(rest_keys, vec!["&:hover", "color"]);
    }

    #[test]
    fn test_mixed_property_map_expands_tiers() {
        let out = normalize_json(json!({"width": {"md": 400, "&:hover": {"color": "red"}}}));
        assert_eq!(
            out,
            json!({
                "width": {"&:hover": {"color": "red"}},
                "@media (min-width:900px)": {"width": "400px"}
            })
        );
        assert_no_tier_keys(&out);
    }

    #[test]
    fn test_mixed_property_map_with_base_value() {
        let out = normalize_json(json!({"width": {"xs": "100%", "md": 400, "&:hover": 1}}));
        assert_eq!(out["width"], json!("100%"));
        assert_eq!(out["@media (min-width:900px)"], json!({"width": "400px"}));
        assert_no_tier_keys(&out);
    }

    #[test]
    fn test_per_property_base_extraction() {
        assert_eq!(
            normalize_json(json!({"width": {"xs": "100%", "md": 400}})),
            json!({
                "width": "100%",
                "@media (min-width:900px)": {"width": "400px"}
            })
        );
    }

    #[test]
    fn test_tiers_ascend_regardless_of_input_order() {
        let out = normalize_json(json!({"gap": {"lg": 3, "sm": 1}}));
        let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["@media (min-width:600px)", "@media (min-width:1200px)"]);
        assert_eq!(out["@media (min-width:600px)"], json!({"gap": "8px"}));
        assert_eq!(out["@media (min-width:1200px)"], json!({"gap": "24px"}));
    }

    #[test]
    fn test_shared_blocks_merge() {
        assert_eq!(
            normalize_json(json!({
                "width": {"md": 400},
                "height": {"md": 200},
                "md": {"color": "red"}
            })),
            json!({"@media (min-width:900px)": {"width": "400px", "height": "200px", "color": "red"}})
        );
    }

    #[test]
    fn test_shorthand_with_responsive_map() {
        assert_eq!(
            normalize_json(json!({"px": {"xs": 1, "sm": 2}})),
            json!({
                "paddingLeft": "8px",
                "@media (min-width:600px)": {"paddingLeft": "16px", "paddingRight": "16px"},
                "paddingRight": "8px"
            })
        );
    }

    #[test]
    fn test_tier_block_is_normalized() {
        assert_eq!(
            normalize_json(json!({"lg": {"p": 1, "bg": "danger"}})),
            json!({"@media (min-width:1200px)": {
                "padding": "8px",
                "backgroundColor": "var(--ld-color-danger, var(--color-danger, #ef4444))"
            }})
        );
    }

    #[test]
    fn test_base_tier_block_lands_at_top_level() {
        assert_eq!(
            normalize_json(json!({"xs": {"m": 1}, "color": "red"})),
            json!({"margin": "8px", "color": "red"})
        );
    }

    #[test]
    fn test_nested_selector_recursion() {
        assert_eq!(
            normalize_json(json!({"&:hover": {"opacity": {"xs": 0.5, "md": 1}}})),
            json!({"&:hover": {
                "opacity": 0.5,
                "@media (min-width:900px)": {"opacity": 1}
            }})
        );
    }

    #[test]
    fn test_object_tier_values() {
        assert_eq!(
            normalize_json(json!({"&:hover": {"xs": {"color": "red"}, "md": {"color": "blue"}}})),
            json!({
                "&:hover": {"color": "red"},
                "@media (min-width:900px)": {"&:hover": {"color": "blue"}}
            })
        );
    }

    #[test]
    fn test_null_tiers_skipped() {
        assert_eq!(
            normalize_json(json!({"width": {"xs": null, "sm": 10}})),
            json!({"@media (min-width:600px)": {"width": "10px"}})
        );
    }

    #[test]
    fn test_breakpoint_key_with_scalar_is_dropped() {
        let out = normalize_json(json!({"md": 3, "color": "red", "&:hover": {"xs": {"lg": "x"}}}));
        assert_eq!(out, json!({"color": "red", "&:hover": {}}));
        assert_no_tier_keys(&out);
    }

    #[test]
    fn test_custom_rule_keys_blocks() {
        let theme = Theme::new().with_rule(|bp, px| format!("@container {} ({}px)", bp, px));
        let obj = json!({"width": {"sm": 1}}).as_object().cloned().unwrap();
        let out = normalize(obj, &theme);
        assert_eq!(Value::Object(out), json!({"@container sm (600px)": {"width": "1px"}}));
    }
}
