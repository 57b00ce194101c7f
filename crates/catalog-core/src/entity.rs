//! Catalog Entity
//!
//! Canonical character record after normalization.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/png?text=No+Image";

/// Entity identifier
///
/// Remote ids may be numbers or strings; comparisons go through the
/// string form so `7` and `"7"` name the same entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityId {
    Numeric(i64),
    Text(String),
    /// Display-only identity for records that arrived without an id
    Placeholder(String),
}

impl EntityId {
    /// Integer value usable for allocating the next local id
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            EntityId::Numeric(n) => Some(*n),
            EntityId::Text(s) => s.trim().parse().ok(),
            EntityId::Placeholder(_) => None,
        }
    }

    /// Sort key; anything non-numeric counts as 0
    pub fn sort_key(&self) -> f64 {
        match self {
            EntityId::Numeric(n) => *n as f64,
            EntityId::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0),
            EntityId::Placeholder(_) => 0.0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, EntityId::Placeholder(_))
    }

    pub fn matches(&self, key: &str) -> bool {
        self.to_string() == key
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Numeric(n) => write!(f, "{}", n),
            EntityId::Text(s) | EntityId::Placeholder(s) => f.write_str(s),
        }
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EntityId::Numeric(n) => serializer.serialize_i64(*n),
            EntityId::Text(s) | EntityId::Placeholder(s) => serializer.serialize_str(s),
        }
    }
}

/// The fixed set of list-valued character attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrayField {
    Films,
    ShortFilms,
    TvShows,
    VideoGames,
    ParkAttractions,
    Allies,
    Enemies,
}

impl ArrayField {
    pub const ALL: [ArrayField; 7] = [
        ArrayField::Films,
        ArrayField::ShortFilms,
        ArrayField::TvShows,
        ArrayField::VideoGames,
        ArrayField::ParkAttractions,
        ArrayField::Allies,
        ArrayField::Enemies,
    ];

    /// Wire key in the remote payload
    pub fn key(self) -> &'static str {
        match self {
            ArrayField::Films => "films",
            ArrayField::ShortFilms => "shortFilms",
            ArrayField::TvShows => "tvShows",
            ArrayField::VideoGames => "videoGames",
            ArrayField::ParkAttractions => "parkAttractions",
            ArrayField::Allies => "allies",
            ArrayField::Enemies => "enemies",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ArrayField::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayFields {
    pub films: Vec<String>,
    pub short_films: Vec<String>,
    pub tv_shows: Vec<String>,
    pub video_games: Vec<String>,
    pub park_attractions: Vec<String>,
    pub allies: Vec<String>,
    pub enemies: Vec<String>,
}

impl ArrayFields {
    pub fn get(&self, field: ArrayField) -> &[String] {
        match field {
            ArrayField::Films => &self.films,
            ArrayField::ShortFilms => &self.short_films,
            ArrayField::TvShows => &self.tv_shows,
            ArrayField::VideoGames => &self.video_games,
            ArrayField::ParkAttractions => &self.park_attractions,
            ArrayField::Allies => &self.allies,
            ArrayField::Enemies => &self.enemies,
        }
    }

    pub fn get_mut(&mut self, field: ArrayField) -> &mut Vec<String> {
        match field {
            ArrayField::Films => &mut self.films,
            ArrayField::ShortFilms => &mut self.short_films,
            ArrayField::TvShows => &mut self.tv_shows,
            ArrayField::VideoGames => &mut self.video_games,
            ArrayField::ParkAttractions => &mut self.park_attractions,
            ArrayField::Allies => &mut self.allies,
            ArrayField::Enemies => &mut self.enemies,
        }
    }
}

/// One catalog character
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    /// `name` is the `Unknown` fallback rather than remote or user input
    #[serde(skip)]
    pub name_defaulted: bool,
    pub image_url: String,
    #[serde(flatten)]
    pub lists: ArrayFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Remaining payload keys, kept opaque
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    pub fn films(&self) -> &[String] {
        &self.lists.films
    }

    /// Name used for ordering; a missing name orders as the empty string
    pub fn sort_name(&self) -> &str {
        if self.name_defaulted {
            ""
        } else {
            &self.name
        }
    }

    /// Every key this entity carries, in canonical-then-extra order, with its value
    pub fn fields(&self) -> Vec<(String, Value)> {
        let mut fields = vec![
            ("name".to_string(), Value::String(self.name.clone())),
            ("imageUrl".to_string(), Value::String(self.image_url.clone())),
        ];
        for field in ArrayField::ALL {
            let items = self.lists.get(field).iter().cloned().map(Value::String).collect();
            fields.push((field.key().to_string(), Value::Array(items)));
        }
        if let Some(url) = &self.url {
            fields.push(("url".to_string(), Value::String(url.clone())));
        }
        fields.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_compare_by_string_form() {
        assert!(EntityId::Numeric(7).matches("7"));
        assert!(EntityId::Text("7".to_string()).matches("7"));
        assert!(!EntityId::Numeric(7).matches("07"));
    }

    #[test]
    fn test_sort_key_treats_non_numeric_as_zero() {
        assert_eq!(EntityId::Numeric(42).sort_key(), 42.0);
        assert_eq!(EntityId::Text("12".to_string()).sort_key(), 12.0);
        assert_eq!(EntityId::Text("abc".to_string()).sort_key(), 0.0);
        assert_eq!(EntityId::Placeholder("tmp-1".to_string()).sort_key(), 0.0);
    }

    #[test]
    fn test_entity_serializes_to_wire_shape() {
        let entity = Entity {
            id: EntityId::Numeric(4),
            name: "Pluto".to_string(),
            name_defaulted: false,
            image_url: PLACEHOLDER_IMAGE.to_string(),
            lists: ArrayFields { films: vec!["Fantasia".to_string()], ..Default::default() },
            url: None,
            extra: Map::new(),
        };
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["_id"], 4);
        assert_eq!(json["imageUrl"], PLACEHOLDER_IMAGE);
        assert_eq!(json["films"][0], "Fantasia");
        assert_eq!(json["shortFilms"], serde_json::json!([]));
        assert!(json.get("url").is_none());
    }

    #[test]
    fn test_array_field_keys_round_trip() {
        for field in ArrayField::ALL {
            assert_eq!(ArrayField::from_key(field.key()), Some(field));
        }
        assert_eq!(ArrayField::from_key("name"), None);
    }
}
