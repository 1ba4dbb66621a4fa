use std::ops::Bound;

use json_ptr_form_pointer::{child_pointer, is_root, parse_index};
use tracing::trace;

use super::prune::clear_slot;
use super::types::{descendant_keys, AnnotationMap, PrefixMatch};

/// Model removal of element `index` from the array at `parent`.
///
/// Entries of the removed element are dropped, then every later sibling slot
/// moves down by one together with its descendants, so the remaining indices
/// stay contiguous. Slots are matched by whole segments: `/items/1` never
/// captures `/items/10`.
///
/// Each destination slot is empty before a sibling moves in, so nothing from
/// the removed element survives under a shifted sibling. Gaps are tolerated:
/// a sibling without annotations does not stop later siblings from moving.
///
/// # Example
///
/// ```
/// use json_ptr_form::sync::{remove_index, AnnotationMap};
///
/// let map: AnnotationMap<bool> = ["/items/0", "/items/1", "/items/2"]
///     .into_iter()
///     .map(|k| (k.to_string(), true))
///     .collect();
/// let out = remove_index(&map, "/items", 0);
/// assert_eq!(out.keys().collect::<Vec<_>>(), ["/items/0", "/items/1"]);
/// ```
pub fn remove_index<V: Clone>(map: &AnnotationMap<V>, parent: &str, index: usize) -> AnnotationMap<V> {
    let mut out = map.clone();
    clear_slot(&mut out, &child_pointer(parent, &index.to_string()), PrefixMatch::Segment);

    let Some(last) = last_sibling(&out, parent) else {
        return out;
    };
    for cur in index..last {
        shift_slot(&mut out, parent, cur + 1, cur);
    }
    out
}

fn sibling_prefix(parent: &str) -> String {
    if is_root(parent) {
        "/".to_string()
    } else {
        format!("{parent}/")
    }
}

/// Highest array index annotated directly under `parent`.
fn last_sibling<V>(map: &AnnotationMap<V>, parent: &str) -> Option<usize> {
    let prefix = sibling_prefix(parent);
    map.range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
        .map(|(k, _)| k)
        .take_while(|k| k.starts_with(&prefix))
        .filter_map(|k| k[prefix.len()..].split('/').next().and_then(parse_index))
        .max()
}

/// Move slot `from` and everything under it to slot `to`, which must be empty.
fn shift_slot<V>(map: &mut AnnotationMap<V>, parent: &str, from: usize, to: usize) {
    let from = child_pointer(parent, &from.to_string());
    let to = child_pointer(parent, &to.to_string());

    let mut moved: Vec<String> = descendant_keys(map, &from, PrefixMatch::Segment).cloned().collect();
    if map.contains_key(&from) {
        moved.push(from.clone());
    }
    for key in &moved {
        if let Some(value) = map.remove(key) {
            map.insert(format!("{to}{}", &key[from.len()..]), value);
        }
    }
    if !moved.is_empty() {
        trace!(from = %from, to = %to, moved = moved.len(), "shifted array slot");
    }
}
