use json_ptr_form_pointer::child_pointer;
use serde_json::Value;
use tracing::trace;

use super::prune::{clear_slot, prune_descendants};
use super::types::{AnnotationMap, PrefixMatch};

/// Drop annotations made stale by replacing `previous` with `next` at `path`.
///
/// - array to shorter array: the trailing indices go, without renumbering
/// - array or object to a value of another kind: everything under `path` goes
/// - object to object: each dropped property goes, with its descendants
///
/// Anything else, including an absent or scalar `previous`, leaves the map
/// as it was. The entry for `path` itself is never removed.
///
/// # Example
///
/// ```
/// use json_ptr_form::sync::{diff, AnnotationMap, PrefixMatch};
/// use serde_json::json;
///
/// let map: AnnotationMap<bool> = ["/x", "/x/0", "/x/1", "/x/2/y"]
///     .into_iter()
///     .map(|k| (k.to_string(), true))
///     .collect();
/// let prev = json!([1, 2, {"y": 3}]);
/// let next = json!([1]);
/// let out = diff(&map, "/x", Some(&prev), Some(&next), PrefixMatch::Segment);
/// assert_eq!(out.keys().collect::<Vec<_>>(), ["/x", "/x/0"]);
/// ```
pub fn diff<V: Clone>(
    map: &AnnotationMap<V>,
    path: &str,
    previous: Option<&Value>,
    next: Option<&Value>,
    matching: PrefixMatch,
) -> AnnotationMap<V> {
    let mut out = map.clone();
    match previous {
        Some(Value::Array(prev)) => match next {
            Some(Value::Array(next)) => {
                for index in next.len()..prev.len() {
                    clear_slot(&mut out, &child_pointer(path, &index.to_string()), matching);
                }
            }
            _ => {
                prune_descendants(&mut out, path, matching);
            }
        },
        Some(Value::Object(prev)) => match next {
            Some(Value::Object(next)) => {
                for key in prev.keys().filter(|k| !next.contains_key(k.as_str())) {
                    clear_slot(&mut out, &child_pointer(path, key), matching);
                }
            }
            _ => {
                prune_descendants(&mut out, path, matching);
            }
        },
        _ => {}
    }
    if out.len() != map.len() {
        trace!(path, dropped = map.len() - out.len(), "diffed annotations");
    }
    out
}
