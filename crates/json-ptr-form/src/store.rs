//! Document storage behind a form.

use json_ptr_form_pointer::{is_root, parse_index, parse_pointer, ptr_get};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("nothing at {0}")]
    NotFound(String),
    #[error("invalid array index in {0}")]
    InvalidIndex(String),
    #[error("cannot descend into a scalar at {0}")]
    InvalidTarget(String),
}

/// Pointer-addressed access to a JSON document.
pub trait DocumentStore {
    /// Borrow the value at `path`; `/` is the whole document.
    fn slice(&self, path: &str) -> Option<&Value>;

    /// Owned copy of the value at `path`.
    fn get(&self, path: &str) -> Option<Value> {
        self.slice(path).cloned()
    }

    /// Write `value` at `path` and return what it replaced.
    fn set(&mut self, path: &str, value: Value) -> Result<Option<Value>, StoreError>;

    /// Delete the value at `path` and return it.
    fn del(&mut self, path: &str) -> Result<Value, StoreError>;
}

/// In-memory [`DocumentStore`].
///
/// Missing containers on the way to a written path are created: an array
/// when the next segment is an index or `-`, an object otherwise. `null`
/// along the way is replaced the same way. Arrays only grow at their end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    doc: Option<Value>,
}

impl MemoryStore {
    pub fn new(doc: Option<Value>) -> Self {
        Self { doc }
    }

    pub fn document(&self) -> Option<&Value> {
        self.doc.as_ref()
    }

    pub fn into_document(self) -> Option<Value> {
        self.doc
    }
}

fn container_for(next_step: &str) -> Value {
    if next_step == "-" || parse_index(next_step).is_some() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Resolve an array step for writing: an existing index or one past the end.
fn write_slot(arr: &[Value], step: &str, path: &str) -> Result<usize, StoreError> {
    let idx = if step == "-" {
        arr.len()
    } else {
        parse_index(step).ok_or_else(|| StoreError::InvalidIndex(path.to_string()))?
    };
    if idx > arr.len() {
        return Err(StoreError::InvalidIndex(path.to_string()));
    }
    Ok(idx)
}

impl DocumentStore for MemoryStore {
    fn slice(&self, path: &str) -> Option<&Value> {
        ptr_get(self.doc.as_ref()?, path)
    }

    fn set(&mut self, path: &str, value: Value) -> Result<Option<Value>, StoreError> {
        if is_root(path) {
            debug!("replacing whole document");
            return Ok(self.doc.replace(value));
        }
        let steps = parse_pointer(path);
        let (last, parents) = steps
            .split_last()
            .ok_or_else(|| StoreError::NotFound(path.to_string()))?;

        let first = parents.first().unwrap_or(last);
        let mut current = self.doc.get_or_insert_with(|| container_for(first));
        for (i, step) in parents.iter().enumerate() {
            let next_step = parents.get(i + 1).unwrap_or(last);
            if current.is_null() {
                *current = container_for(step);
            }
            current = match current {
                Value::Object(map) => map
                    .entry(step.clone())
                    .or_insert_with(|| container_for(next_step)),
                Value::Array(arr) => {
                    let idx = write_slot(arr, step, path)?;
                    if idx == arr.len() {
                        arr.push(container_for(next_step));
                    }
                    &mut arr[idx]
                }
                _ => return Err(StoreError::InvalidTarget(path.to_string())),
            };
        }

        if current.is_null() {
            *current = container_for(last);
        }
        match current {
            Value::Object(map) => Ok(map.insert(last.clone(), value)),
            Value::Array(arr) => {
                let idx = write_slot(arr, last, path)?;
                if idx == arr.len() {
                    arr.push(value);
                    Ok(None)
                } else {
                    Ok(Some(std::mem::replace(&mut arr[idx], value)))
                }
            }
            _ => Err(StoreError::InvalidTarget(path.to_string())),
        }
    }

    fn del(&mut self, path: &str) -> Result<Value, StoreError> {
        if is_root(path) {
            return self.doc.take().ok_or_else(|| StoreError::NotFound(path.to_string()));
        }
        let steps = parse_pointer(path);
        let (last, parents) = steps
            .split_last()
            .ok_or_else(|| StoreError::NotFound(path.to_string()))?;
        let parent = self
            .doc
            .as_mut()
            .and_then(|doc| json_ptr_form_pointer::get_mut(doc, parents))
            .ok_or_else(|| StoreError::NotFound(path.to_string()))?;
        match parent {
            Value::Object(map) => map
                .remove(last.as_str())
                .ok_or_else(|| StoreError::NotFound(path.to_string())),
            Value::Array(arr) => match parse_index(last) {
                Some(idx) if idx < arr.len() => Ok(arr.remove(idx)),
                _ => Err(StoreError::NotFound(path.to_string())),
            },
            _ => Err(StoreError::NotFound(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_set_and_slice() {
        let mut store = MemoryStore::default();
        assert_eq!(store.slice("/"), None);
        assert_eq!(store.set("/", json!({"a": 1})), Ok(None));
        assert_eq!(store.slice("/a"), Some(&json!(1)));
        assert_eq!(store.get("/"), Some(json!({"a": 1})));
    }

    #[test]
    fn test_set_creates_containers() {
        let mut store = MemoryStore::default();
        store.set("/user/emails/0", json!("a@b.c")).unwrap();
        store.set("/user/name", json!("Ada")).unwrap();
        assert_eq!(
            store.document(),
            Some(&json!({"user": {"emails": ["a@b.c"], "name": "Ada"}}))
        );
    }

    #[test]
    fn test_set_replaces_and_appends() {
        let mut store = MemoryStore::new(Some(json!({"l": [1, 2]})));
        assert_eq!(store.set("/l/0", json!(10)), Ok(Some(json!(1))));
        assert_eq!(store.set("/l/2", json!(3)), Ok(None));
        assert_eq!(store.set("/l/-", json!(4)), Ok(None));
        assert_eq!(store.slice("/l"), Some(&json!([10, 2, 3, 4])));
    }

    #[test]
    fn test_set_rejects_gaps_and_scalars() {
        let mut store = MemoryStore::new(Some(json!({"l": [], "s": "x"})));
        assert_eq!(store.set("/l/3", json!(1)), Err(StoreError::InvalidIndex("/l/3".into())));
        assert_eq!(store.set("/l/x", json!(1)), Err(StoreError::InvalidIndex("/l/x".into())));
        assert_eq!(store.set("/s/a", json!(1)), Err(StoreError::InvalidTarget("/s/a".into())));
    }

    #[test]
    fn test_set_through_null() {
        let mut store = MemoryStore::new(Some(json!({"a": null})));
        store.set("/a/b", json!(true)).unwrap();
        assert_eq!(store.slice("/a"), Some(&json!({"b": true})));
    }

    #[test]
    fn test_del() {
        let mut store = MemoryStore::new(Some(json!({"l": [1, 2, 3], "o": {"k": 1}})));
        assert_eq!(store.del("/l/0"), Ok(json!(1)));
        assert_eq!(store.slice("/l"), Some(&json!([2, 3])));
        assert_eq!(store.del("/o/k"), Ok(json!(1)));
        assert_eq!(store.del("/o/k"), Err(StoreError::NotFound("/o/k".into())));
        assert_eq!(store.del("/l/9"), Err(StoreError::NotFound("/l/9".into())));
        assert!(store.del("/").is_ok());
        assert_eq!(store.document(), None);
    }
}
