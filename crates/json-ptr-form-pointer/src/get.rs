use serde_json::Value;

use crate::util::{parse_index, parse_pointer};

/// Get a value from a JSON document by path components.
///
/// Returns `None` if the path doesn't exist or is invalid.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for path_step in path {
        match current {
            Value::Array(arr) => {
                current = arr.get(parse_index(path_step)?)?;
            }
            Value::Object(map) => {
                current = map.get(path_step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path components.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for path_step in path {
        match current {
            Value::Array(arr) => {
                current = arr.get_mut(parse_index(path_step)?)?;
            }
            Value::Object(map) => {
                current = map.get_mut(path_step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Read the value at `pointer`; `/` yields the document itself.
///
/// Any lookup failure is reported as `None`.
///
/// # Example
///
/// ```
/// use json_ptr_form_pointer::ptr_get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// assert_eq!(ptr_get(&doc, "/foo/bar"), Some(&json!(42)));
/// assert_eq!(ptr_get(&doc, "/"), Some(&doc));
/// assert_eq!(ptr_get(&doc, "/missing"), None);
/// ```
pub fn ptr_get<'a>(val: &'a Value, pointer: &str) -> Option<&'a Value> {
    get(val, &parse_pointer(pointer))
}

/// Mutable counterpart of [`ptr_get`].
pub fn ptr_get_mut<'a>(val: &'a mut Value, pointer: &str) -> Option<&'a mut Value> {
    get_mut(val, &parse_pointer(pointer))
}

/// Whether `pointer` resolves inside `val`. An explicit `null` counts as present.
pub fn ptr_has(val: &Value, pointer: &str) -> bool {
    ptr_get(val, pointer).is_some()
}
