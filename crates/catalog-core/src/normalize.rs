//! Entity Normalizer
//!
//! Total mapping from whatever the remote sent to a canonical `Entity`.
//! Missing or mistyped fields are coerced into defaults, never rejected.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::entity::{ArrayField, ArrayFields, Entity, EntityId, PLACEHOLDER_IMAGE, UNKNOWN_NAME};

/// Keys consumed into canonical fields; everything else lands in `extra`
const CANONICAL_KEYS: &[&str] = &["_id", "id", "name", "imageUrl", "image", "url"];

/// Source of display-only ids for records without one
///
/// Generated ids are never numeric, so they can't collide with remote
/// numeric ids and are ignored when allocating local ids. Reserved strings
/// (real ids on the same page) are skipped.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderIds {
    next: u64,
    reserved: HashSet<String>,
}

impl PlaceholderIds {
    pub fn next_id(&mut self) -> EntityId {
        loop {
            self.next += 1;
            let candidate = format!("tmp-{:x}", self.next);
            if !self.reserved.contains(&candidate) {
                return EntityId::Placeholder(candidate);
            }
        }
    }

    /// Keep `id` from being handed out while the current page is normalized
    pub fn reserve(&mut self, id: String) {
        self.reserved.insert(id);
    }
}

/// Normalize a fetched page. Ids present on the page are reserved first so
/// no generated placeholder can shadow a real record.
pub fn normalize_page(records: &[Value], ids: &mut PlaceholderIds) -> Vec<Entity> {
    ids.reserved.clear();
    for record in records.iter().filter_map(Value::as_object) {
        if let Some(id) = id_from(record.get("_id")).or_else(|| id_from(record.get("id"))) {
            ids.reserve(id.to_string());
        }
    }
    records.iter().map(|raw| normalize(raw, ids)).collect()
}

pub fn normalize(raw: &Value, ids: &mut PlaceholderIds) -> Entity {
    let empty = Map::new();
    let record = raw.as_object().unwrap_or(&empty);

    let id = id_from(record.get("_id"))
        .or_else(|| id_from(record.get("id")))
        .unwrap_or_else(|| ids.next_id());

    let given = record
        .get("name")
        .and_then(scalar_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let name_defaulted = given.is_none();
    let name = given.unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let image_url = ["imageUrl", "image"]
        .iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string();

    let mut lists = ArrayFields::default();
    for field in ArrayField::ALL {
        *lists.get_mut(field) = string_list(record.get(field.key()));
    }

    let url = record
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let extra = record
        .iter()
        .filter(|(key, _)| !CANONICAL_KEYS.contains(&key.as_str()) && ArrayField::from_key(key).is_none())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Entity { id, name, name_defaulted, image_url, lists, url, extra }
}

fn id_from(value: Option<&Value>) -> Option<EntityId> {
    match value? {
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => EntityId::Numeric(i),
            None => EntityId::Text(n.to_string()),
        }),
        Value::String(s) if !s.trim().is_empty() => Some(EntityId::Text(s.clone())),
        _ => None,
    }
}

/// String form of a scalar; `None` for null, arrays and objects
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Arrays pass through (scalars stringified, others dropped); anything else is empty
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn norm(raw: Value) -> Entity {
        normalize(&raw, &mut PlaceholderIds::default())
    }

    #[test]
    fn test_prefers_underscore_id() {
        assert_eq!(norm(json!({"_id": 12, "id": 99})).id, EntityId::Numeric(12));
        assert_eq!(norm(json!({"id": "abc"})).id, EntityId::Text("abc".to_string()));
    }

    #[test]
    fn test_missing_id_gets_distinct_placeholders() {
        let mut ids = PlaceholderIds::default();
        let a = normalize(&json!({"name": "A"}), &mut ids);
        let b = normalize(&json!({"name": "B"}), &mut ids);
        assert!(a.id.is_placeholder());
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.as_integer(), None);
    }

    #[test]
    fn test_placeholders_skip_ids_already_on_page() {
        let records = [json!({"_id": "tmp-1", "name": "Remote"}), json!({"name": "NoId"})];
        let page = normalize_page(&records, &mut PlaceholderIds::default());
        assert_eq!(page[0].id, EntityId::Text("tmp-1".to_string()));
        assert!(page[1].id.is_placeholder());
        assert_ne!(page[1].id.to_string(), "tmp-1");
    }

    #[test]
    fn test_name_defaults_and_trims() {
        assert_eq!(norm(json!({"name": "  Goofy "})).name, "Goofy");
        assert!(!norm(json!({"name": "Goofy"})).name_defaulted);
        assert_eq!(norm(json!({"name": "   "})).name, UNKNOWN_NAME);
        assert!(norm(json!({"name": "   "})).name_defaulted);
        assert_eq!(norm(json!({})).name, UNKNOWN_NAME);
        assert_eq!(norm(json!({"name": null})).name, UNKNOWN_NAME);
    }

    #[test]
    fn test_image_falls_back_through_alternates() {
        assert_eq!(norm(json!({"imageUrl": "a.png", "image": "b.png"})).image_url, "a.png");
        assert_eq!(norm(json!({"imageUrl": "", "image": "b.png"})).image_url, "b.png");
        assert_eq!(norm(json!({"imageUrl": 5})).image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_non_array_lists_become_empty() {
        let entity = norm(json!({"films": "Fantasia", "allies": ["Donald", 3, null]}));
        assert!(entity.lists.films.is_empty());
        assert_eq!(entity.lists.allies, vec!["Donald".to_string(), "3".to_string()]);
        assert!(entity.lists.enemies.is_empty());
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let entity = norm(json!({"_id": 1, "sourceUrl": "https://x", "__v": 0, "films": []}));
        assert_eq!(entity.extra.get("sourceUrl"), Some(&json!("https://x")));
        assert_eq!(entity.extra.get("__v"), Some(&json!(0)));
        assert!(!entity.extra.contains_key("films"));
        assert!(!entity.extra.contains_key("_id"));
    }

    #[test]
    fn test_non_object_record_is_all_defaults() {
        let entity = norm(json!("garbage"));
        assert_eq!(entity.name, UNKNOWN_NAME);
        assert_eq!(entity.image_url, PLACEHOLDER_IMAGE);
        assert!(entity.url.is_none());
    }
}
