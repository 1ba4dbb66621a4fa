//! Headless JSON Pointer forms.
//!
//! A form is a JSON document plus two side maps keyed by pointer: which
//! paths the user has touched, and which paths carry validation errors.
//! [`sync`] keeps those maps consistent when the document changes shape,
//! most notably renumbering array annotations when an element is removed.
//!
//! # Example
//!
//! ```
//! use json_ptr_form::{Form, FormOptions};
//! use serde_json::json;
//!
//! let mut form = Form::new(Some(json!({"items": ["a", "b", "c"]})), FormOptions::default());
//! form.set_touched(Some("/items/1"));
//! form.set_touched(Some("/items/2"));
//!
//! form.remove_value("/items/0").unwrap();
//! assert!(form.touched("/items/0"));
//! assert!(form.touched("/items/1"));
//! assert!(!form.touched_map().contains_key("/items/2"));
//! ```

pub mod form;
pub mod store;
pub mod sync;
pub mod validator;

pub use form::{Form, FormOptions};
pub use store::{DocumentStore, MemoryStore, StoreError};
pub use sync::{AnnotationMap, PrefixMatch};
pub use validator::{
    issues_to_errors, ErrorMap, FieldError, FormValidator, Schema, ValidationIssue, ValidatorError,
};
