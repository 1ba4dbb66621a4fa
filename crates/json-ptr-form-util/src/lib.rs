//! json-ptr-form-util - JSON value helpers for form documents.
//!
//! Forms compare what the user typed against default values and hand
//! validators trimmed-down documents. Both need the same notion of "empty":
//! `null`, `""`, `[]` and `{}` are noise, and array order is not significant.

pub mod clean_deep;
pub mod json_equal;
pub mod sort;

// Re-exports for convenience
pub use clean_deep::{clean_deep, clean_deep_ptrs, CleanOptions};
pub use json_equal::deep_equal;
pub use sort::{compare_values, obj_key_cmp, sort_deep};
