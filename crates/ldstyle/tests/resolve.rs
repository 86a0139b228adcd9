//! Integration tests for style resolution through the public API.

use ldstyle::tokens::{ColorRole, ColorState, ColorToken};
use ldstyle::{
    compile, resolve, resolve_with, Breakpoint, Resolver, Spacing, StyleError, StyleObject,
    StyleSpec, Theme,
};
use serde_json::{json, Value};

fn object(value: Value) -> StyleObject {
    match value {
        Value::Object(obj) => obj,
        other => panic!("expected object, got {}", other),
    }
}

fn resolve_json(spec: impl Into<StyleSpec>) -> Value {
    Value::Object(resolve(spec).expect("spec should resolve"))
}

#[test]
fn test_spacing_shorthand_scales() {
    assert_eq!(resolve_json(json!({"p": 2})), json!({"padding": "16px"}));
}

#[test]
fn test_pixel_spacing_variant() {
    let theme = Theme::new().with_spacing(Spacing::Unit(1.0));
    let out = resolve_with(json!({"p": 1}), &theme).unwrap();
    assert_eq!(Value::Object(out), json!({"padding": "1px"}));
}

#[test]
fn test_custom_spacing_function() {
    let theme = Theme::new().with_spacing_fn(|n| n * n);
    let out = resolve_with(json!({"gap": 3, "mt": 4}), &theme).unwrap();
    assert_eq!(Value::Object(out), json!({"gap": "9px", "marginTop": "16px"}));
}

#[test]
fn test_base_extraction() {
    assert_eq!(
        resolve_json(json!({"width": {"xs": "100%", "md": 400}})),
        json!({
            "width": "100%",
            "@media (min-width:900px)": {"width": "400px"}
        })
    );
}

fn tier_keys_left(value: &Value) -> Vec<String> {
    match value {
        Value::Object(obj) => obj
            .iter()
            .flat_map(|(key, inner)| {
                let mut found = tier_keys_left(inner);
                if Breakpoint::from_name(key).is_some() {
                    found.push(key.clone());
                }
                found
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[test]
fn test_mixed_tier_map_leaves_no_tier_keys() {
    let out = resolve_json(json!({"width": {"xs": "100%", "md": 400, "&:hover": 1}}));
    assert!(tier_keys_left(&out).is_empty(), "{}", out);
    assert_eq!(out["width"], json!("100%"));
    assert_eq!(out["@media (min-width:900px)"], json!({"width": "400px"}));
}

#[test]
fn test_scalar_under_tier_key_leaves_no_tier_keys() {
    let out = resolve_json(json!({"md": 3, "color": "red"}));
    assert!(tier_keys_left(&out).is_empty(), "{}", out);
    assert_eq!(out, json!({"color": "red"}));
}

#[test]
fn test_two_element_lists_are_order_sensitive() {
    let a = json!({"color": "red", "p": 1});
    let b = json!({"color": "blue"});
    let ab = resolve_json(json!([a.clone(), b.clone()]));
    let ba = resolve_json(json!([b, a]));
    assert_eq!(ab["color"], json!("blue"));
    assert_eq!(ba["color"], json!("red"));
    assert_eq!(ab["padding"], ba["padding"]);
}

#[test]
fn test_token_chain_ends_in_literal() {
    let out = resolve_json(json!({"color": "text.disabled", "borderColor": "border"}));
    let color = out["color"].as_str().unwrap();
    assert!(color.starts_with("var(--ld-color-text-disabled, var(--color-text-disabled, "));
    assert!(color.ends_with("#6b7280))"));
    assert_eq!(
        out["borderColor"],
        json!("var(--ld-color-border, var(--color-border, #1f2937))")
    );
}

#[test]
fn test_every_color_token_resolves_to_a_chain() {
    for role in ColorRole::ALL {
        for state in ColorState::ALL {
            let token = ColorToken { role, state: Some(state) };
            let out = resolve_json(json!({"color": format!("{}.{}", role.as_str(), state.as_str())}));
            assert_eq!(out["color"], json!(token.chain()));
            assert!(token.chain().ends_with(&format!("{}))", token.literal())));
        }
    }
}

#[test]
fn test_raw_colors_pass_through() {
    for raw in ["#ff0000", "rgba(0, 0, 0, .5)", "transparent", "currentColor", "var(--accent)"] {
        let out = resolve_json(json!({"color": raw, "bg": raw}));
        assert_eq!(out["color"], json!(raw));
        assert_eq!(out["backgroundColor"], json!(raw));
    }
}

#[test]
fn test_unknown_properties_pass_through() {
    assert_eq!(
        resolve_json(json!({"display": "grid", "zIndex": 3, "gridTemplateColumns": "1fr 2fr"})),
        json!({"display": "grid", "zIndex": 3, "gridTemplateColumns": "1fr 2fr"})
    );
}

#[test]
fn test_deep_merge_keeps_nested_blocks() {
    assert_eq!(
        resolve_json(json!([
            {"&:hover": {"color": "red"}},
            {"&:hover": {"opacity": 0.8}}
        ])),
        json!({"&:hover": {"color": "red", "opacity": 0.8}})
    );
}

#[test]
fn test_falsy_specs_contribute_nothing() {
    let base = json!({"m": 1, "radius": "md"});
    let with_falsy = json!([null, base.clone(), false, null]);
    assert_eq!(resolve_json(with_falsy), resolve_json(base));
    let none: Option<Value> = None;
    assert!(resolve(none).unwrap().is_empty());
}

#[test]
fn test_shorthand_precedence_ignores_declaration_order() {
    let one = resolve_json(json!({"p": 1, "px": 2, "pl": 3, "paddingLeft": 4}));
    let two = resolve_json(json!({"paddingLeft": 4, "pl": 3, "px": 2, "p": 1}));
    for out in [&one, &two] {
        assert_eq!(out["padding"], json!("8px"));
        assert_eq!(out["paddingRight"], json!("16px"));
        assert_eq!(out["paddingLeft"], json!("32px"));
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let spec = json!([
        {"px": {"xs": 1, "lg": 3}, "shadow": "lg", "&:focus": {"outlineColor": "primary"}},
        {"md": {"bgcolor": "surface"}}
    ]);
    assert_eq!(resolve_json(spec.clone()), resolve_json(spec));
}

#[test]
fn test_compile_is_idempotent() {
    let obj = object(json!({
        "p": 2,
        "bgcolor": "secondary.hover",
        "radius": "xl",
        "shadow": "xs",
        "width": {"xs": 100, "md": "50%"},
        "&:active": {"color": "primary.active", "mx": 1}
    }));
    let once = compile(&obj);
    assert_eq!(compile(&once), once);
    assert_eq!(once["width"], json!({"xs": "100px", "md": "50%"}));
}

#[test]
fn test_generators_compose_with_objects() {
    let spec = StyleSpec::from(json!({"color": "red"}))
        .then(StyleSpec::from_fn(|theme| {
            json!({"minHeight": theme.spacing(5.0)}).into()
        }))
        .then(None::<Value>);
    assert_eq!(
        resolve_json(spec),
        json!({"color": "red", "minHeight": "40px"})
    );
}

#[test]
fn test_generator_error_leaves_no_partial_result() {
    let spec = StyleSpec::from(vec![
        StyleSpec::from(json!({"p": 1})),
        StyleSpec::try_from_fn(|_| -> Result<StyleSpec, std::io::Error> {
            Err(std::io::Error::other("theme lookup failed"))
        }),
    ]);
    match resolve(spec) {
        Err(StyleError::Generator(source)) => {
            assert_eq!(source.to_string(), "theme lookup failed");
        }
        other => panic!("expected generator error, got {:?}", other),
    }
}

#[test]
fn test_resolver_from_yaml_fixture() {
    let theme = Theme::load("tests/fixtures/compact.yaml").unwrap();
    assert_eq!(theme.breakpoints().value(Breakpoint::Xl), 1536);
    let resolver = Resolver::new(theme);
    let out = resolver
        .resolve(json!({"p": {"xs": 1, "sm": 2, "lg": 4}}))
        .unwrap()
        .unwrap();
    assert_eq!(
        Value::Object(out),
        json!({
            "padding": "4px",
            "@media (min-width:480px)": {"padding": "8px"},
            "@media (min-width:1024px)": {"padding": "16px"}
        })
    );
}

#[test]
fn test_theme_is_shared_across_threads() {
    let resolver = std::sync::Arc::new(Resolver::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let resolver = resolver.clone();
            std::thread::spawn(move || resolver.resolve(json!({"m": i})).unwrap())
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap().unwrap();
        assert_eq!(out["margin"], json!(format!("{}px", i * 8)));
    }
}
