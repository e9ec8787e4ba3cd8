//! Structural deep merge for rule documents.

use serde_json::Value;

/// Merges `overlay` into `base` in place.
///
/// Objects merge key by key, recursively. Every other value in `overlay`
/// (arrays, strings, numbers, booleans, null) replaces the value in `base`
/// wholesale; arrays are never concatenated.
pub fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => merge_json(base_value, overlay_value),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_objects_merge() {
        let mut base = json!({"a": {"x": 1, "y": 2}, "b": 3});
        merge_json(&mut base, json!({"a": {"y": 20}}));
        assert_eq!(base, json!({"a": {"x": 1, "y": 20}, "b": 3}));
    }

    #[test]
    fn test_arrays_replace() {
        let mut base = json!({"list": [1, 2, 3]});
        merge_json(&mut base, json!({"list": [9]}));
        assert_eq!(base, json!({"list": [9]}));
    }

    #[test]
    fn test_scalar_replaces_object() {
        let mut base = json!({"a": {"x": 1}});
        merge_json(&mut base, json!({"a": 5}));
        assert_eq!(base, json!({"a": 5}));
    }

    #[test]
    fn test_object_replaces_scalar() {
        let mut base = json!({"a": 5});
        merge_json(&mut base, json!({"a": {"x": 1}}));
        assert_eq!(base, json!({"a": {"x": 1}}));
    }

    #[test]
    fn test_new_keys_are_added() {
        let mut base = json!({"a": 1});
        merge_json(&mut base, json!({"b": {"c": 2}}));
        assert_eq!(base, json!({"a": 1, "b": {"c": 2}}));
    }

    #[test]
    fn test_non_object_overlay_replaces_root() {
        let mut base = json!({"a": 1});
        merge_json(&mut base, json!([1, 2]));
        assert_eq!(base, json!([1, 2]));
    }
}
