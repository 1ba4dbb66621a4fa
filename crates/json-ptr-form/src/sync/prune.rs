use tracing::trace;

use super::types::{descendant_keys, AnnotationMap, PrefixMatch};

/// Return a copy of `map` without the entries that lie strictly under `path`.
///
/// The entry for `path` itself is kept.
///
/// # Example
///
/// ```
/// use json_ptr_form::sync::{prune_children, AnnotationMap, PrefixMatch};
///
/// let map: AnnotationMap<bool> = ["/a", "/a/b", "/c"]
///     .into_iter()
///     .map(|k| (k.to_string(), true))
///     .collect();
/// let pruned = prune_children(&map, "/a", PrefixMatch::Literal);
/// assert_eq!(pruned.keys().collect::<Vec<_>>(), ["/a", "/c"]);
/// ```
pub fn prune_children<V: Clone>(
    map: &AnnotationMap<V>,
    path: &str,
    matching: PrefixMatch,
) -> AnnotationMap<V> {
    let mut out = map.clone();
    prune_descendants(&mut out, path, matching);
    out
}

/// In-place pruning; returns how many entries were dropped.
pub(crate) fn prune_descendants<V>(
    map: &mut AnnotationMap<V>,
    path: &str,
    matching: PrefixMatch,
) -> usize {
    let doomed: Vec<String> = descendant_keys(map, path, matching).cloned().collect();
    for key in &doomed {
        map.remove(key);
    }
    if !doomed.is_empty() {
        trace!(path, pruned = doomed.len(), "pruned descendant annotations");
    }
    doomed.len()
}

/// Drop `path` and everything under it.
pub(crate) fn clear_slot<V>(map: &mut AnnotationMap<V>, path: &str, matching: PrefixMatch) {
    prune_descendants(map, path, matching);
    map.remove(path);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touched(keys: &[&str]) -> AnnotationMap<bool> {
        keys.iter().map(|k| (k.to_string(), true)).collect()
    }

    #[test]
    fn test_keeps_own_entry() {
        let map = touched(&["/a", "/a/b", "/a/b/c"]);
        let out = prune_children(&map, "/a", PrefixMatch::Literal);
        assert_eq!(out, touched(&["/a"]));
    }

    #[test]
    fn test_no_descendants_is_noop() {
        let map = touched(&["/a", "/b"]);
        assert_eq!(prune_children(&map, "/b", PrefixMatch::Literal), map);
        assert_eq!(prune_children(&map, "/zzz", PrefixMatch::Segment), map);
    }

    #[test]
    fn test_literal_prefix_takes_siblings() {
        let map = touched(&["/a", "/ab", "/a/x"]);
        assert_eq!(prune_children(&map, "/a", PrefixMatch::Literal), touched(&["/a"]));
        assert_eq!(
            prune_children(&map, "/a", PrefixMatch::Segment),
            touched(&["/a", "/ab"])
        );
    }

    #[test]
    fn test_root_prunes_everything_else() {
        let map = touched(&["/", "/a", "/b/0"]);
        assert_eq!(prune_children(&map, "/", PrefixMatch::Literal), touched(&["/"]));
        assert_eq!(prune_children(&map, "/", PrefixMatch::Segment), touched(&["/"]));
    }

    #[test]
    fn test_clear_slot() {
        let mut map = touched(&["/a", "/a/b", "/c"]);
        clear_slot(&mut map, "/a", PrefixMatch::Segment);
        assert_eq!(map, touched(&["/c"]));
    }
}
