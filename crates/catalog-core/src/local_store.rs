//! Local Mutation Store
//!
//! Client-only additions and removals layered over the last fetched page.
//! Nothing here talks to the remote source.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::entity::{Entity, EntityId};
use crate::normalize::{normalize, PlaceholderIds};

#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    /// Most recently fetched page, deduplicated by id
    fetched: Vec<Entity>,
    /// Local additions, newest first
    additions: Vec<Entity>,
    /// String ids of fetched entities hidden by `remove`
    removed: HashSet<String>,
}

impl LocalStore {
    /// Replace the fetched page wholesale.
    ///
    /// Local additions and removals do not survive a new fetch.
    pub fn replace_fetched(&mut self, entities: Vec<Entity>) {
        let mut seen = HashSet::new();
        self.fetched = entities
            .into_iter()
            .filter(|entity| {
                let fresh = seen.insert(entity.id.to_string());
                if !fresh {
                    log::warn!("[STORE] Dropping duplicate id {} from fetched page", entity.id);
                }
                fresh
            })
            .collect();
        self.additions.clear();
        self.removed.clear();
    }

    /// Working set: additions first, then visible fetched entities
    pub fn entities(&self) -> Vec<&Entity> {
        self.additions
            .iter()
            .chain(self.fetched.iter().filter(|e| !self.removed.contains(&e.id.to_string())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entities().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a record built from a form draft, returning the assigned id
    pub fn add(&mut self, mut record: Map<String, Value>, now_ms: u64, ids: &mut PlaceholderIds) -> EntityId {
        let id = next_local_id(self.known_ids(), now_ms);
        record.remove("id");
        record.insert("_id".to_string(), Value::from(id));
        let entity = normalize(&Value::Object(record), ids);
        log::info!("[STORE] Added local entity {} ({})", entity.id, entity.name);
        let assigned = entity.id.clone();
        self.additions.insert(0, entity);
        assigned
    }

    /// Remove whatever entity's id stringifies to `id`. Returns whether anything changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.additions.len();
        self.additions.retain(|e| !e.id.matches(id));
        if self.additions.len() != before {
            log::info!("[STORE] Removed local entity {}", id);
            return true;
        }

        let hides_fetched = !self.removed.contains(id) && self.fetched.iter().any(|e| e.id.matches(id));
        if hides_fetched {
            self.removed.insert(id.to_string());
            log::info!("[STORE] Hid fetched entity {}", id);
        } else {
            log::debug!("[STORE] Remove of unknown id {} ignored", id);
        }
        hides_fetched
    }

    /// Every id the store knows about, hidden ones included
    fn known_ids(&self) -> impl Iterator<Item = &EntityId> {
        self.additions.iter().chain(self.fetched.iter()).map(|e| &e.id)
    }
}

/// One past the largest numeric id, or `now_ms` when there is none
pub fn next_local_id<'a>(ids: impl IntoIterator<Item = &'a EntityId>, now_ms: u64) -> i64 {
    let fallback = i64::try_from(now_ms).unwrap_or(i64::MAX);
    ids.into_iter()
        .filter_map(EntityId::as_integer)
        .max()
        .and_then(|max| max.checked_add(1))
        .unwrap_or(fallback)
}
