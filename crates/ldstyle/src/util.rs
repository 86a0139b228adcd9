//! Utility functions for CSS value formatting.

use serde_json::Value;

/// Formats a pixel quantity as a CSS length.
///
/// Whole numbers are printed without a fractional part, so `16.0` becomes
/// `"16px"` rather than `"16.0px"`.
///
/// # Example
///
/// ```rust
/// use ldstyle::format_px;
///
/// assert_eq!(format_px(16.0), "16px");
/// assert_eq!(format_px(12.5), "12.5px");
/// assert_eq!(format_px(-8.0), "-8px");
/// ```
pub fn format_px(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}px", n as i64)
    } else {
        format!("{}px", n)
    }
}

/// Converts a numeric value into a pixel length, leaving anything else alone.
///
/// Strings such as `"100%"`, `"2rem"` or `"calc(100% - 8px)"` are already
/// valid lengths and are returned unchanged.
///
/// # Example
///
/// ```rust
/// use ldstyle::to_css_length;
/// use serde_json::json;
///
/// assert_eq!(to_css_length(&json!(400)), json!("400px"));
/// assert_eq!(to_css_length(&json!("100%")), json!("100%"));
/// ```
pub fn to_css_length(value: &Value) -> Value {
    match value.as_f64() {
        Some(n) => Value::String(format_px(n)),
        None => value.clone(),
    }
}

/// Returns `true` if the string is already an indirect reference
/// (`var(...)`) or a custom property name (`--name`).
pub(crate) fn is_css_reference(s: &str) -> bool {
    let s = s.trim_start();
    s.starts_with("var(") || s.starts_with("--")
}
