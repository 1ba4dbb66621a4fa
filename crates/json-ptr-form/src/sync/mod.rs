//! Keeps pointer-keyed annotation maps consistent with document edits.
//!
//! Every function here is a pure transform: it borrows the current map and
//! returns the next one. The caller performs the document mutation itself and
//! commits document and map together.
//!
//! - [`diff`] when a value at a path is replaced
//! - [`remove_entry`] when a value at a path is deleted
//! - [`enumerate`] to seed annotations for a whole subtree at once

mod diff;
mod enumerate;
mod prune;
mod reindex;
mod remove;
mod types;

pub use diff::diff;
pub use enumerate::enumerate;
pub use prune::prune_children;
pub use reindex::remove_index;
pub use remove::{remove_entry, remove_key};
pub use types::{has_covered, merge_seed, AnnotationMap, PrefixMatch};
