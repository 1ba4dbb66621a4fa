use json_ptr_form_pointer::{last_segment, parent_pointer, parse_index};

use super::prune::clear_slot;
use super::reindex::remove_index;
use super::types::{AnnotationMap, PrefixMatch};

/// Drop the annotations of a value deleted at `path`.
///
/// A canonical index as last segment is taken to address an array element
/// and goes through [`remove_index`], renumbering later siblings. Any other
/// path loses its own entry and its descendants.
pub fn remove_entry<V: Clone>(
    map: &AnnotationMap<V>,
    path: &str,
    matching: PrefixMatch,
) -> AnnotationMap<V> {
    if let Some(index) = last_segment(path).and_then(parse_index) {
        if let Some(parent) = parent_pointer(path) {
            return remove_index(map, &parent, index);
        }
    }
    remove_key(map, path, matching)
}

/// Drop `path` and its descendants without any renumbering.
pub fn remove_key<V: Clone>(
    map: &AnnotationMap<V>,
    path: &str,
    matching: PrefixMatch,
) -> AnnotationMap<V> {
    let mut out = map.clone();
    clear_slot(&mut out, path, matching);
    out
}
