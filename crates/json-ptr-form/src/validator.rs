//! Validator seam: schema engines plug in here and report errors per pointer.
//!
//! No schema engine ships with this crate. An adapter implements
//! [`FormValidator`] and is handed to [`Form::validate`] explicitly, so each
//! form decides which engine instance it talks to.
//!
//! [`Form::validate`]: crate::form::Form::validate

use json_ptr_form_pointer::join_pointers;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::sync::AnnotationMap;

/// One validation error attached to a pointer.
///
/// Engine-specific fields (keyword, params, schema path, ...) are kept in
/// `extra` and round-trip through serde untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            extra: Map::new(),
        }
    }
}

/// Errors keyed by the pointer they belong to.
pub type ErrorMap = AnnotationMap<Vec<FieldError>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    #[error("schema not found: {0}")]
    SchemaNotFound(String),
    #[error("validator failed: {0}")]
    Engine(String),
}

/// A schema registered with a validator under a tag.
pub trait Schema {
    fn tag(&self) -> &str;
}

/// A schema engine the form can validate against.
pub trait FormValidator {
    type Schema: Schema;

    /// Register `schema` under its tag; registering a known tag again is a no-op.
    fn add_schema(&mut self, schema: Self::Schema) -> Result<(), ValidatorError>;

    /// Forget the schema registered under `tag`, if any.
    fn remove_schema(&mut self, tag: &str) -> Result<(), ValidatorError>;

    /// Validate `value` against the schema registered under `tag`.
    fn validate(&self, tag: &str, value: &Value) -> Result<ErrorMap, ValidatorError>;
}

/// A single finding as schema engines usually report it: the location of the
/// offending instance, plus the property name when a required one is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub instance_path: String,
    pub missing_property: Option<String>,
    pub error: FieldError,
}

/// Fold engine findings into an [`ErrorMap`].
///
/// A missing-property finding is filed under the pointer of the missing
/// property, not under its parent object. Findings on the same pointer
/// accumulate in report order.
///
/// # Example
///
/// ```
/// use json_ptr_form::validator::{issues_to_errors, FieldError, ValidationIssue};
///
/// let errors = issues_to_errors(vec![ValidationIssue {
///     instance_path: "/address".to_string(),
///     missing_property: Some("zip".to_string()),
///     error: FieldError::new("is required"),
/// }]);
/// assert_eq!(errors["/address/zip"][0].message.as_deref(), Some("is required"));
/// ```
pub fn issues_to_errors(issues: impl IntoIterator<Item = ValidationIssue>) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for issue in issues {
        let fragments: Vec<&str> = std::iter::once(issue.instance_path.as_str())
            .chain(issue.missing_property.as_deref())
            .filter(|f| !f.is_empty())
            .collect();
        errors
            .entry(join_pointers(&fragments))
            .or_default()
            .push(issue.error);
    }
    errors
}
