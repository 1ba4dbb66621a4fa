use json_ptr_form_pointer::ptr_get_mut;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which kinds of empty values [`clean_deep`] strips.
///
/// Missing fields deserialize to `true`, matching [`CleanOptions::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Drop arrays that are empty after cleaning.
    pub empty_arrays: bool,
    /// Drop objects that are empty after cleaning.
    pub empty_objects: bool,
    /// Drop `""`.
    pub empty_strings: bool,
    /// Drop `null`.
    pub null_values: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            empty_arrays: true,
            empty_objects: true,
            empty_strings: true,
            null_values: true,
        }
    }
}

/// Recursively remove empty values from objects and arrays.
///
/// Children are cleaned before their parent is checked, so a container that
/// only held empty values disappears in the same pass. The root itself is
/// never removed: a root container that cleans down to nothing comes back
/// empty, and a scalar root is returned unchanged.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_ptr_form_util::{clean_deep, CleanOptions};
///
/// let doc = json!({"a": "", "b": {"c": null}, "d": [1, null, []]});
/// assert_eq!(clean_deep(&doc, &CleanOptions::default()), json!({"d": [1]}));
/// ```
pub fn clean_deep(value: &Value, options: &CleanOptions) -> Value {
    match value {
        Value::Array(_) => clean_node(value, options).unwrap_or_else(|| Value::Array(Vec::new())),
        Value::Object(_) => clean_node(value, options).unwrap_or_else(|| Value::Object(Map::new())),
        _ => value.clone(),
    }
}

fn clean_node(value: &Value, options: &CleanOptions) -> Option<Value> {
    match value {
        Value::Null if options.null_values => None,
        Value::String(s) if s.is_empty() && options.empty_strings => None,
        Value::Array(arr) => {
            let cleaned: Vec<Value> = arr.iter().filter_map(|v| clean_node(v, options)).collect();
            if cleaned.is_empty() && options.empty_arrays {
                None
            } else {
                Some(Value::Array(cleaned))
            }
        }
        Value::Object(map) => {
            let cleaned: Map<String, Value> = map
                .iter()
                .filter_map(|(k, v)| clean_node(v, options).map(|v| (k.clone(), v)))
                .collect();
            if cleaned.is_empty() && options.empty_objects {
                None
            } else {
                Some(Value::Object(cleaned))
            }
        }
        other => Some(other.clone()),
    }
}

/// Return a copy of `source` where the subtree under each pointer is cleaned.
///
/// Pointers that do not resolve are skipped.
pub fn clean_deep_ptrs<S: AsRef<str>>(source: &Value, ptrs: &[S], options: &CleanOptions) -> Value {
    let mut doc = source.clone();
    for ptr in ptrs {
        if let Some(target) = ptr_get_mut(&mut doc, ptr.as_ref()) {
            let cleaned = clean_deep(target, options);
            *target = cleaned;
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_root_untouched() {
        let opts = CleanOptions::default();
        assert_eq!(clean_deep(&json!(null), &opts), json!(null));
        assert_eq!(clean_deep(&json!(""), &opts), json!(""));
        assert_eq!(clean_deep(&json!(0), &opts), json!(0));
    }

    #[test]
    fn test_nested_empties_collapse() {
        let opts = CleanOptions::default();
        let doc = json!({"a": {"b": {"c": [null, "", {}]}}, "keep": false});
        assert_eq!(clean_deep(&doc, &opts), json!({"keep": false}));
    }

    #[test]
    fn test_root_becomes_empty_container() {
        let opts = CleanOptions::default();
        assert_eq!(clean_deep(&json!({"a": null}), &opts), json!({}));
        assert_eq!(clean_deep(&json!([null, []]), &opts), json!([]));
    }

    #[test]
    fn test_options_respected() {
        let opts = CleanOptions {
            null_values: false,
            empty_arrays: false,
            ..CleanOptions::default()
        };
        let doc = json!({"a": null, "b": [], "c": "", "d": {}});
        assert_eq!(clean_deep(&doc, &opts), json!({"a": null, "b": []}));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let opts: CleanOptions = serde_json::from_value(json!({"null_values": false})).unwrap();
        assert!(!opts.null_values);
        assert!(opts.empty_arrays && opts.empty_objects && opts.empty_strings);
    }

    #[test]
    fn test_clean_deep_ptrs() {
        let doc = json!({"a": {"x": null, "y": 1}, "b": {"x": null}});
        let out = clean_deep_ptrs(&doc, &["/a", "/missing"], &CleanOptions::default());
        assert_eq!(out, json!({"a": {"y": 1}, "b": {"x": null}}));
        // source is not modified
        assert_eq!(doc["a"]["x"], json!(null));
    }
}
