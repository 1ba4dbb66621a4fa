use json_ptr_form_pointer::escape_component;
use serde_json::Value;

use super::types::AnnotationMap;

/// Map every pointer reachable inside `value` to `marker`.
///
/// Each scalar leaf contributes its own pointer and all of its ancestors
/// below the root. Empty objects and arrays hold no leaf, so they contribute
/// nothing. A scalar `value` has no inner pointers and yields an empty map.
///
/// # Example
///
/// ```
/// use json_ptr_form::sync::enumerate;
/// use serde_json::json;
///
/// let all = enumerate(&json!({"a": {"b": 1}, "c": [1, 2], "d": []}), true);
/// assert_eq!(all.keys().collect::<Vec<_>>(), ["/a", "/a/b", "/c", "/c/0", "/c/1"]);
/// ```
pub fn enumerate<V: Clone>(value: &Value, marker: V) -> AnnotationMap<V> {
    let mut out = AnnotationMap::new();
    let mut pointer = String::new();
    walk(value, &mut pointer, &marker, &mut out);
    out
}

/// Returns whether any leaf was found under `value`.
fn walk<V: Clone>(value: &Value, pointer: &mut String, marker: &V, out: &mut AnnotationMap<V>) -> bool {
    let mut found = false;
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                found |= visit(child, pointer, &escape_component(key), marker, out);
            }
        }
        Value::Array(arr) => {
            for (index, child) in arr.iter().enumerate() {
                found |= visit(child, pointer, &index.to_string(), marker, out);
            }
        }
        _ => {}
    }
    found
}

fn visit<V: Clone>(
    child: &Value,
    pointer: &mut String,
    segment: &str,
    marker: &V,
    out: &mut AnnotationMap<V>,
) -> bool {
    let len = pointer.len();
    pointer.push('/');
    pointer.push_str(segment);
    let found = match child {
        Value::Object(_) | Value::Array(_) => walk(child, pointer, marker, out),
        _ => true,
    };
    if found {
        out.insert(pointer.clone(), marker.clone());
    }
    pointer.truncate(len);
    found
}
