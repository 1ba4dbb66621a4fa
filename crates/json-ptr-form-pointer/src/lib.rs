//! JSON Pointer (RFC 6901) path syntax used to address form documents.
//!
//! Pointers here follow one convention on top of the RFC: the whole document
//! is addressed by `/` rather than by the empty string. Every other pointer
//! starts with `/` and has no trailing separator.
//!
//! # Example
//!
//! ```
//! use json_ptr_form_pointer::{child_pointer, join_pointers, parent_pointer, ptr_get};
//!
//! assert_eq!(join_pointers(&["/items/0", "name"]), "/items/0/name");
//! assert_eq!(child_pointer("/", "a/b"), "/a~1b");
//! assert_eq!(parent_pointer("/items/0").as_deref(), Some("/items"));
//!
//! let doc = serde_json::json!({"items": [{"name": "x"}]});
//! assert_eq!(ptr_get(&doc, "/items/0/name"), Some(&serde_json::json!("x")));
//! ```

pub mod get;
pub mod util;
pub mod validate;

pub use get::{get, get_mut, ptr_get, ptr_get_mut, ptr_has};
pub use util::{
    child_pointer, escape_component, format_pointer, is_root, is_valid_index,
    join_pointers, last_segment, parent_pointer, parse_index, parse_pointer, unescape_component,
    ROOT,
};
pub use validate::{validate_json_pointer, ValidationError};
