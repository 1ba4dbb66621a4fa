//! Headless form state: a document plus touched and error annotations.

use json_ptr_form_pointer::{last_segment, parent_pointer, parse_index, ptr_get, ROOT};
use json_ptr_form_util::{clean_deep, deep_equal, CleanOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::store::{DocumentStore, MemoryStore, StoreError};
use crate::sync::{
    diff, enumerate, has_covered, merge_seed, remove_entry, remove_key, AnnotationMap, PrefixMatch,
};
use crate::validator::{ErrorMap, FormValidator, ValidatorError};

/// Form behaviour knobs. Every field has a default, so partial config works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// How annotation keys are matched against a path. Defaults to
    /// [`PrefixMatch::Segment`].
    ///
    /// With [`PrefixMatch::Literal`], replacing `/items/1` also drops the
    /// annotations of `/items/10` and up.
    pub matching: PrefixMatch,
    /// Clean the document this way before it is handed to a validator.
    pub validate_pre_clean: Option<CleanOptions>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            matching: PrefixMatch::Segment,
            validate_pre_clean: None,
        }
    }
}

/// A form over a [`DocumentStore`].
///
/// Every mutation goes through the form so the touched and error maps are
/// updated in the same step as the document.
#[derive(Debug, Clone)]
pub struct Form<S = MemoryStore> {
    store: S,
    default_value: Option<Value>,
    touched: AnnotationMap<bool>,
    errors: ErrorMap,
    options: FormOptions,
}

impl Form<MemoryStore> {
    pub fn new(default_value: Option<Value>, options: FormOptions) -> Self {
        Self {
            store: MemoryStore::new(default_value.clone()),
            default_value,
            touched: AnnotationMap::new(),
            errors: ErrorMap::new(),
            options,
        }
    }
}

impl<S: DocumentStore> Form<S> {
    /// Wrap `store` and load `default_value` into it.
    pub fn with_store(
        store: S,
        default_value: Option<Value>,
        options: FormOptions,
    ) -> Result<Self, StoreError> {
        let mut form = Self {
            store,
            default_value: None,
            touched: AnnotationMap::new(),
            errors: ErrorMap::new(),
            options,
        };
        form.reset(default_value)?;
        Ok(form)
    }

    /// Start over from a new default value; touched and errors are cleared.
    pub fn reset(&mut self, default_value: Option<Value>) -> Result<(), StoreError> {
        match &default_value {
            Some(value) => {
                self.store.set(ROOT, value.clone())?;
            }
            None => {
                if self.store.slice(ROOT).is_some() {
                    self.store.del(ROOT)?;
                }
            }
        }
        self.default_value = default_value;
        self.touched.clear();
        self.errors.clear();
        debug!("form reset");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn values(&self) -> Option<&Value> {
        self.store.slice(ROOT)
    }

    pub fn value(&self, path: &str) -> Option<&Value> {
        self.store.slice(path)
    }

    pub fn touched_map(&self) -> &AnnotationMap<bool> {
        &self.touched
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Write `value` at `path`, dropping annotations under parts of the old
    /// value that no longer exist.
    pub fn set_value(&mut self, path: &str, value: Value) -> Result<(), StoreError> {
        let matching = self.options.matching;
        let previous = self.store.slice(path);
        let touched = diff(&self.touched, path, previous, Some(&value), matching);
        let errors = diff(&self.errors, path, previous, Some(&value), matching);

        self.store.set(path, value)?;
        self.touched = touched;
        self.errors = errors;
        debug!(path, "value set");
        Ok(())
    }

    /// Delete the value at `path`. Returns `false` when nothing was there.
    ///
    /// Removing an array element renumbers the annotations of the elements
    /// after it.
    pub fn remove_value(&mut self, path: &str) -> Result<bool, StoreError> {
        if self.store.slice(path).is_none() {
            return Ok(false);
        }
        let matching = self.options.matching;
        let (touched, errors) = if self.is_array_element(path) {
            (
                remove_entry(&self.touched, path, matching),
                remove_entry(&self.errors, path, matching),
            )
        } else {
            // a numeric key of an object is a property, not an index
            (
                remove_key(&self.touched, path, matching),
                remove_key(&self.errors, path, matching),
            )
        };

        self.store.del(path)?;
        self.touched = touched;
        self.errors = errors;
        debug!(path, "value removed");
        Ok(true)
    }

    /// Put `value`, or the default value at `path` when `None`, back at
    /// `path` and forget that it was touched.
    ///
    /// Errors under parts of the old value that no longer exist are dropped.
    pub fn reset_value(&mut self, path: &str, value: Option<Value>) -> Result<(), StoreError> {
        let matching = self.options.matching;
        let touched = remove_key(&self.touched, path, matching);
        let next = value
            .or_else(|| {
                self.default_value
                    .as_ref()
                    .and_then(|d| ptr_get(d, path))
                    .cloned()
            })
            // keep array length stable; siblings keep their indices
            .or_else(|| self.is_array_element(path).then_some(Value::Null));

        match next {
            Some(next) => {
                let errors = diff(&self.errors, path, self.store.slice(path), Some(&next), matching);
                self.store.set(path, next)?;
                self.errors = errors;
            }
            None => {
                if self.store.slice(path).is_some() {
                    let errors = remove_key(&self.errors, path, matching);
                    self.store.del(path)?;
                    self.errors = errors;
                }
            }
        }
        self.touched = touched;
        debug!(path, "value reset");
        Ok(())
    }

    /// Mark `path` as touched, or with `None` mark every pointer that has an
    /// error or exists in the current or default document.
    ///
    /// Existing touched entries are kept as they are.
    pub fn set_touched(&mut self, path: Option<&str>) {
        match path {
            Some(path) => {
                self.touched.insert(path.to_string(), true);
            }
            None => {
                let mut seed: AnnotationMap<bool> =
                    self.errors.keys().map(|k| (k.clone(), true)).collect();
                if let Some(doc) = self.store.slice(ROOT) {
                    seed.extend(enumerate(doc, true));
                }
                if let Some(default_value) = &self.default_value {
                    seed.extend(enumerate(default_value, true));
                }
                self.touched = merge_seed(&self.touched, seed);
                debug!(touched = self.touched.len(), "touched all");
            }
        }
    }

    /// Whether `path` or anything under it was touched.
    pub fn touched(&self, path: &str) -> bool {
        has_covered(&self.touched, path, self.options.matching)
    }

    /// Whether neither `path` nor anything under it has errors.
    pub fn valid(&self, path: &str) -> bool {
        !has_covered(&self.errors, path, self.options.matching)
    }

    /// First error message recorded for exactly `path`.
    pub fn error(&self, path: &str) -> Option<&str> {
        self.errors.get(path)?.first()?.message.as_deref()
    }

    pub fn error_count(&self, path: &str) -> usize {
        self.errors.get(path).map_or(0, Vec::len)
    }

    /// Whether the value at `path` differs from the default value there.
    ///
    /// Empty leaves and array order are ignored.
    pub fn dirty(&self, path: &str) -> bool {
        let default_value = self.default_value.as_ref().and_then(|d| ptr_get(d, path));
        !deep_equal(self.store.slice(path), default_value)
    }

    /// Replace the error map wholesale, e.g. with results computed elsewhere.
    pub fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    /// Validate the current document against the schema tagged `tag`.
    pub fn validate<F>(&mut self, validator: &F, tag: &str) -> &ErrorMap
    where
        F: FormValidator + ?Sized,
    {
        self.validate_with(validator, tag, |_, errors| Ok(errors))
    }

    /// Like [`Form::validate`], then let `post` amend the errors.
    ///
    /// `post` sees the document as stored, not the pre-cleaned copy the
    /// validator got. If the validator fails the form has no errors; if
    /// `post` fails the validator's errors are kept.
    pub fn validate_with<F, P>(&mut self, validator: &F, tag: &str, post: P) -> &ErrorMap
    where
        F: FormValidator + ?Sized,
        P: FnOnce(&Value, ErrorMap) -> Result<ErrorMap, ValidatorError>,
    {
        let values = self.store.slice(ROOT).cloned().unwrap_or(Value::Null);
        let subject = match &self.options.validate_pre_clean {
            Some(opts) => clean_deep(&values, opts),
            None => values.clone(),
        };

        let errors = validator.validate(tag, &subject).unwrap_or_else(|err| {
            warn!(tag, error = %err, "validator failed");
            ErrorMap::new()
        });
        let errors = match post(&values, errors.clone()) {
            Ok(amended) => amended,
            Err(err) => {
                warn!(tag, error = %err, "post validator failed");
                errors
            }
        };

        debug!(tag, pointers = errors.len(), "validated");
        self.errors = errors;
        &self.errors
    }

    fn is_array_element(&self, path: &str) -> bool {
        match (parent_pointer(path), last_segment(path).and_then(parse_index)) {
            (Some(parent), Some(_)) => self.store.slice(&parent).is_some_and(Value::is_array),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::FieldError;
    use serde_json::json;

    #[test]
    fn test_new_loads_default() {
        let form = Form::new(Some(json!({"a": 1})), FormOptions::default());
        assert_eq!(form.values(), Some(&json!({"a": 1})));
        assert!(!form.dirty("/"));
        assert!(!form.touched("/"));
        assert!(form.valid("/"));
    }

    #[test]
    fn test_set_value_prunes_touched() {
        let mut form = Form::new(Some(json!({"tags": ["a", "b", "c"]})), FormOptions::default());
        form.set_touched(Some("/tags/2"));
        form.set_touched(Some("/tags/0"));

        form.set_value("/tags", json!(["a"])).unwrap();
        assert!(form.touched("/tags/0"));
        assert!(!form.touched("/tags/2"));
        assert!(form.dirty("/tags"));
    }

    #[test]
    fn test_failed_set_leaves_annotations() {
        let mut form = Form::new(Some(json!({"s": {"x": 1}})), FormOptions::default());
        form.set_touched(Some("/s/x"));
        let before = form.touched_map().clone();

        assert!(form.set_value("/s/x/deep/9", json!(1)).is_err());
        assert_eq!(form.touched_map(), &before);
    }

    #[test]
    fn test_remove_value_missing() {
        let mut form = Form::new(Some(json!({})), FormOptions::default());
        assert_eq!(form.remove_value("/nope"), Ok(false));
    }

    #[test]
    fn test_remove_numeric_object_key() {
        let mut form = Form::new(Some(json!({"years": {"0": "a", "1": "b"}})), FormOptions::default());
        form.set_touched(Some("/years/1"));
        assert_eq!(form.remove_value("/years/0"), Ok(true));
        // object keys do not shift
        assert!(form.touched("/years/1"));
        assert!(!form.touched("/years/0"));
    }

    #[test]
    fn test_reset_value_restores_default() {
        let mut form = Form::new(Some(json!({"name": "x"})), FormOptions::default());
        form.set_value("/name", json!("y")).unwrap();
        form.set_touched(Some("/name"));

        form.reset_value("/name", None).unwrap();
        assert_eq!(form.value("/name"), Some(&json!("x")));
        assert!(!form.touched("/name"));
        assert!(!form.dirty("/"));
    }

    #[test]
    fn test_reset_value_without_default() {
        let mut form = Form::new(Some(json!({"l": []})), FormOptions::default());
        form.set_value("/l/0", json!(1)).unwrap();
        form.set_value("/extra", json!(true)).unwrap();

        form.reset_value("/l/0", None).unwrap();
        form.reset_value("/extra", None).unwrap();
        assert_eq!(form.values(), Some(&json!({"l": [null]})));
    }

    #[test]
    fn test_replacing_an_element_keeps_double_digit_siblings() {
        let items: Vec<Value> = (0..12).map(|i| json!({"n": i})).collect();
        let mut form = Form::new(Some(json!({"items": items})), FormOptions::default());
        form.set_touched(Some("/items/10/n"));

        form.set_value("/items/1", json!("x")).unwrap();
        assert!(form.touched("/items/10/n"));

        let mut literal = Form::new(
            form.default_value().cloned(),
            FormOptions {
                matching: PrefixMatch::Literal,
                validate_pre_clean: None,
            },
        );
        literal.set_touched(Some("/items/10/n"));
        literal.set_value("/items/1", json!("x")).unwrap();
        assert!(!literal.touched("/items/10/n"));
    }

    #[test]
    fn test_reset_value_drops_stale_errors() {
        let mut form = Form::new(Some(json!({"l": [1], "o": {"k": 1}})), FormOptions::default());
        form.set_value("/l", json!([1, 2, 3])).unwrap();
        form.set_value("/o/extra", json!("")).unwrap();
        let mut errors = ErrorMap::new();
        errors.insert("/l/2".to_string(), vec![FieldError::new("too big")]);
        errors.insert("/o/extra".to_string(), vec![FieldError::new("empty")]);
        form.set_errors(errors);

        form.reset_value("/l", None).unwrap();
        assert_eq!(form.value("/l"), Some(&json!([1])));
        assert!(form.valid("/l"));

        form.reset_value("/o/extra", None).unwrap();
        assert_eq!(form.value("/o/extra"), None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_options_from_partial_config() {
        let opts: FormOptions = serde_json::from_value(json!({"matching": "literal"})).unwrap();
        assert_eq!(opts.matching, PrefixMatch::Literal);
        assert_eq!(opts.validate_pre_clean, None);

        let opts: FormOptions =
            serde_json::from_value(json!({"validate_pre_clean": {"null_values": false}})).unwrap();
        assert_eq!(opts.matching, PrefixMatch::Segment);
        assert_eq!(opts.validate_pre_clean.map(|c| c.null_values), Some(false));
    }
}
