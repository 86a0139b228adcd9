//! Deep merge of compiled style objects.

use serde_json::Value;

use super::StyleObject;

/// Merges `source` into `target`.
///
/// - leaf values at the same path: the source wins
/// - objects at the same path: merged key by key, recursively
/// - a leaf replacing an object drops the nested structure entirely
///
/// Keys already in `target` keep their position; new keys are appended.
///
/// # Example
///
/// ```rust
/// use ldstyle::merge_into;
/// use serde_json::json;
///
/// let mut target = json!({ "a": { "x": 1 } }).as_object().cloned().unwrap();
/// let source = json!({ "a": { "y": 2 } }).as_object().cloned().unwrap();
/// merge_into(&mut target, source);
/// assert_eq!(serde_json::Value::Object(target), json!({ "a": { "x": 1, "y": 2 } }));
/// ```
pub fn merge_into(target: &mut StyleObject, source: StyleObject) {
    for (key, value) in source {
        merge_entry(target, key, value);
    }
}

/// Returns `base` with `overlay` merged over it.
pub fn merged(mut base: StyleObject, overlay: StyleObject) -> StyleObject {
    merge_into(&mut base, overlay);
    base
}

/// Merges a single entry into `target` with [`merge_into`] semantics.
pub(crate) fn merge_entry(target: &mut StyleObject, key: String, value: Value) {
    if let Value::Object(incoming) = value {
        if let Some(Value::Object(existing)) = target.get_mut(&key) {
            merge_into(existing, incoming);
            return;
        }
        target.insert(key, Value::Object(incoming));
    } else {
        target.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> StyleObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_nested_objects_merge() {
        let out = merged(obj(json!({"A": {"x": 1}})), obj(json!({"A": {"y": 2}})));
        assert_eq!(Value::Object(out), json!({"A": {"x": 1, "y": 2}}));
    }

    #[test]
    fn test_leaf_last_write_wins() {
        let out = merged(obj(json!({"color": "red"})), obj(json!({"color": "blue"})));
        assert_eq!(out["color"], json!("blue"));
    }

    #[test]
    fn test_leaf_discards_object() {
        let out = merged(obj(json!({"A": {"x": 1}})), obj(json!({"A": 3})));
        assert_eq!(Value::Object(out), json!({"A": 3}));
    }

    #[test]
    fn test_object_replaces_leaf() {
        let out = merged(obj(json!({"A": 3})), obj(json!({"A": {"x": 1}})));
        assert_eq!(Value::Object(out), json!({"A": {"x": 1}}));
    }

    #[test]
    fn test_deep_nesting() {
        let out = merged(
            obj(json!({"@media a": {"&:hover": {"color": "red", "width": 1}}})),
            obj(json!({"@media a": {"&:hover": {"color": "blue"}}})),
        );
        assert_eq!(
            Value::Object(out),
            json!({"@media a": {"&:hover": {"color": "blue", "width": 1}}})
        );
    }

    #[test]
    fn test_existing_keys_keep_position() {
        let out = merged(
            obj(json!({"a": 1, "b": 2})),
            obj(json!({"c": 3, "a": 4})),
        );
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(out["a"], json!(4));
    }
}
