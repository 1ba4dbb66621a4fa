//! Annotation map types and the descendant relation between pointers.

use std::collections::BTreeMap;
use std::ops::Bound;

use json_ptr_form_pointer::is_root;
use serde::{Deserialize, Serialize};

/// Per-path metadata keyed by pointer.
///
/// A touched map is `AnnotationMap<bool>`, an error map is
/// `AnnotationMap<Vec<FieldError>>`. Ordered storage keeps all keys sharing
/// a string prefix adjacent, so descendant scans are range scans.
///
/// [`FieldError`]: crate::validator::FieldError
pub type AnnotationMap<V> = BTreeMap<String, V>;

/// How a key is decided to lie under a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMatch {
    /// Raw string prefix: `/ab` counts as under `/a`.
    #[default]
    Literal,
    /// Whole segments only: `/a/b` is under `/a`, `/ab` is not.
    Segment,
}

impl PrefixMatch {
    /// Whether `key` lies strictly under `path`.
    pub fn is_descendant(self, key: &str, path: &str) -> bool {
        if key == path {
            return false;
        }
        match self {
            PrefixMatch::Literal => key.starts_with(path),
            PrefixMatch::Segment if is_root(path) => key.starts_with('/'),
            PrefixMatch::Segment => {
                key.starts_with(path) && key.as_bytes().get(path.len()) == Some(&b'/')
            }
        }
    }

    /// Whether `key` is `path` itself or lies under it.
    pub fn covers(self, key: &str, path: &str) -> bool {
        key == path || self.is_descendant(key, path)
    }
}

/// Keys of `map` that lie strictly under `path`.
pub(crate) fn descendant_keys<'a, V>(
    map: &'a AnnotationMap<V>,
    path: &'a str,
    matching: PrefixMatch,
) -> impl Iterator<Item = &'a String> + 'a {
    // every key starting with `path` sorts into one contiguous run after it
    map.range::<str, _>((Bound::Excluded(path), Bound::Unbounded))
        .map(|(k, _)| k)
        .take_while(move |k| k.starts_with(path) || is_root(path))
        .filter(move |k| matching.is_descendant(k, path))
}

/// Whether any key of `map` is `path` or lies under it.
pub fn has_covered<V>(map: &AnnotationMap<V>, path: &str, matching: PrefixMatch) -> bool {
    map.contains_key(path) || descendant_keys(map, path, matching).next().is_some()
}

/// Merge a seed map under existing entries; existing entries win.
pub fn merge_seed<V: Clone>(existing: &AnnotationMap<V>, seed: AnnotationMap<V>) -> AnnotationMap<V> {
    let mut out = seed;
    out.extend(existing.iter().map(|(k, v)| (k.clone(), v.clone())));
    out
}
