//! Form State
//!
//! Draft of a new entity as raw string inputs, keyed by a registry of known
//! fields. The registry starts from the default field set and only ever grows.

use serde_json::{Map, Value};

use crate::entity::{ArrayField, Entity};
use crate::normalize::scalar_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    /// One of the fixed array fields: comma-separated input, stored as a list
    List,
}

#[derive(Debug, Clone, PartialEq)]
struct FormField {
    key: String,
    kind: FieldKind,
    value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    fields: Vec<FormField>,
}

impl Default for FormDraft {
    fn default() -> Self {
        let scalar = |key: &str| FormField { key: key.to_string(), kind: FieldKind::Scalar, value: String::new() };
        let mut fields = vec![scalar("name"), scalar("imageUrl")];
        fields.extend(ArrayField::ALL.into_iter().map(|field| FormField {
            key: field.key().to_string(),
            kind: FieldKind::List,
            value: String::new(),
        }));
        fields.push(scalar("url"));
        Self { fields }
    }
}

impl FormDraft {
    /// (key, kind, value) in registry order
    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldKind, &str)> {
        self.fields.iter().map(|f| (f.key.as_str(), f.kind, f.value.as_str()))
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.value.as_str())
    }

    pub fn kind(&self, key: &str) -> Option<FieldKind> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.kind)
    }

    /// Replace one field's value. Unknown keys are ignored.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(field) => field.value = value.into(),
            None => log::debug!("[FORM] Ignoring value for unknown field {}", key),
        }
    }

    /// Register keys of a sample entity that aren't known yet, pre-filled
    /// from the sample. Discovered fields are always scalar; only the fixed
    /// array fields are lists. Existing fields keep their value.
    pub fn discover(&mut self, sample: &Entity) {
        for (key, value) in sample.fields() {
            if key == "_id" || self.kind(&key).is_some() {
                continue;
            }
            let text = match &value {
                Value::Array(items) => items.iter().filter_map(scalar_text).collect::<Vec<_>>().join(", "),
                Value::Null => String::new(),
                Value::Object(_) => value.to_string(),
                other => scalar_text(other).unwrap_or_default(),
            };
            log::debug!("[FORM] Discovered field {}", key);
            self.fields.push(FormField { key, kind: FieldKind::Scalar, value: text });
        }
    }

    /// Record for submission: values trimmed, lists split on commas,
    /// empty scalars omitted.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        for field in &self.fields {
            let value = field.value.trim();
            match field.kind {
                FieldKind::List => {
                    let items = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(|s| Value::String(s.to_string()))
                        .collect();
                    record.insert(field.key.clone(), Value::Array(items));
                }
                FieldKind::Scalar if !value.is_empty() => {
                    record.insert(field.key.clone(), Value::String(value.to_string()));
                }
                FieldKind::Scalar => {}
            }
        }
        record
    }

    /// Clear every value, keeping the known field set
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, PlaceholderIds};
    use serde_json::json;

    #[test]
    fn test_default_fields_in_order() {
        let draft = FormDraft::default();
        let keys: Vec<_> = draft.fields().map(|(k, _, _)| k).collect();
        assert_eq!(keys.first(), Some(&"name"));
        assert_eq!(keys.last(), Some(&"url"));
        assert_eq!(keys.len(), 10);
        assert_eq!(draft.kind("films"), Some(FieldKind::List));
        assert!(draft.fields().all(|(_, _, v)| v.is_empty()));
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut draft = FormDraft::default();
        draft.set_field("name", "Test");
        draft.set_field("nope", "x");
        assert_eq!(draft.value("name"), Some("Test"));
        assert_eq!(draft.value("url"), Some(""));
        assert_eq!(draft.value("nope"), None);
    }

    #[test]
    fn test_to_record_splits_and_omits() {
        let mut draft = FormDraft::default();
        draft.set_field("name", "  Test ");
        draft.set_field("films", "A, B,, C ,");
        draft.set_field("url", "   ");
        let record = draft.to_record();
        assert_eq!(record.get("name"), Some(&json!("Test")));
        assert_eq!(record.get("films"), Some(&json!(["A", "B", "C"])));
        assert_eq!(record.get("allies"), Some(&json!([])));
        assert!(!record.contains_key("url"));
        assert!(!record.contains_key("imageUrl"));
    }

    #[test]
    fn test_discover_extends_once_and_reset_keeps_fields() {
        let sample = normalize(
            &json!({"_id": 1, "name": "Mickey", "sourceUrl": "https://x", "__v": 0, "tags": ["a", "b"]}),
            &mut PlaceholderIds::default(),
        );
        let mut draft = FormDraft::default();
        draft.set_field("name", "Mine");
        draft.discover(&sample);
        draft.discover(&sample);

        assert_eq!(draft.fields().count(), 13);
        assert_eq!(draft.value("name"), Some("Mine"));
        assert_eq!(draft.value("sourceUrl"), Some("https://x"));
        assert_eq!(draft.value("__v"), Some("0"));
        assert_eq!(draft.value("tags"), Some("a, b"));
        assert_eq!(draft.kind("tags"), Some(FieldKind::Scalar));

        let record = draft.to_record();
        assert_eq!(record.get("tags"), Some(&json!("a, b")));
        assert_eq!(record.get("films"), Some(&json!([])));

        draft.reset();
        assert_eq!(draft.fields().count(), 13);
        assert!(draft.fields().all(|(_, _, v)| v.is_empty()));
    }
}
