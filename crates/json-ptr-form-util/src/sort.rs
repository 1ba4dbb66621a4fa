//! Deterministic ordering of JSON values.

use std::cmp::Ordering;

use serde_json::Value;

/// Compare two strings for object key ordering.
///
/// The comparison is first by length, then by lexicographic order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use json_ptr_form_util::obj_key_cmp;
///
/// assert_eq!(obj_key_cmp("a", "b"), Ordering::Less);
/// assert_eq!(obj_key_cmp("aa", "b"), Ordering::Greater); // "aa" is longer
/// ```
pub fn obj_key_cmp(a: &str, b: &str) -> Ordering {
    let len1 = a.len();
    let len2 = b.len();

    if len1 == len2 {
        a.cmp(b)
    } else {
        len1.cmp(&len2)
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over JSON values.
///
/// Values of different types order by type (`null` < bool < number < string
/// < array < object). Arrays compare element-wise, objects compare their keys
/// (in [`obj_key_cmp`] order) and then the values under those keys.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x.cmp(&y),
                // 1 and 1.0 differ as values; integers sort first
                _ => x
                    .as_f64()
                    .zip(y.as_f64())
                    .and_then(|(x, y)| x.partial_cmp(&y))
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| x.is_f64().cmp(&y.is_f64())),
            },
        },
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y.iter())
            .map(|(x, y)| compare_values(x, y))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Object(x), Value::Object(y)) => {
            let mut xk: Vec<&String> = x.keys().collect();
            let mut yk: Vec<&String> = y.keys().collect();
            xk.sort_by(|a, b| obj_key_cmp(a, b));
            yk.sort_by(|a, b| obj_key_cmp(a, b));
            let keys = xk
                .iter()
                .zip(yk.iter())
                .map(|(a, b)| obj_key_cmp(a, b))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| xk.len().cmp(&yk.len()));
            if keys.is_ne() {
                return keys;
            }
            xk.iter()
                .map(|k| compare_values(&x[k.as_str()], &y[k.as_str()]))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Insertion sort; form arrays are short, and most arrive already sorted.
fn insertion_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && compare(&arr[j - 1], &arr[j]) == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Return a copy of `value` where every array, at any depth, is sorted by
/// [`compare_values`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_ptr_form_util::sort_deep;
///
/// assert_eq!(sort_deep(&json!({"a": [3, 1, [2, 0]]})), json!({"a": [1, 3, [0, 2]]}));
/// ```
pub fn sort_deep(value: &Value) -> Value {
    match value {
        Value::Array(arr) => {
            let mut sorted: Vec<Value> = arr.iter().map(sort_deep).collect();
            insertion_sort_by(&mut sorted, compare_values);
            Value::Array(sorted)
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), sort_deep(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
