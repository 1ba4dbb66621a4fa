use serde_json::Value;

use crate::clean_deep::{clean_deep, CleanOptions};
use crate::sort::sort_deep;

/// Loose equality of two possibly absent JSON values.
///
/// Two absent values are equal, and an absent value never equals a present
/// one. When both are containers they are compared after [`clean_deep`] with
/// default options and [`sort_deep`], so empty leaves and array order do not
/// count. Anything else compares structurally.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_ptr_form_util::deep_equal;
///
/// let a = json!({"tags": ["x", "y"], "note": ""});
/// let b = json!({"tags": ["y", "x"]});
/// assert!(deep_equal(Some(&a), Some(&b)));
/// assert!(!deep_equal(Some(&a), None));
/// assert!(!deep_equal(Some(&json!("")), Some(&json!(null))));
/// ```
pub fn deep_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) if is_container(a) && is_container(b) => normalize(a) == normalize(b),
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

fn normalize(value: &Value) -> Value {
    sort_deep(&clean_deep(value, &CleanOptions::default()))
}
