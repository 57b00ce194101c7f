//! View Derivation
//!
//! Pure projection of the working set into what gets rendered.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::entity::Entity;

pub const ALL_FILMS: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    #[default]
    Id,
    Name,
}

impl SortMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMethod::Id => "id",
            SortMethod::Name => "name",
        }
    }

    /// `"name"` sorts by name; any other value falls back to id
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => SortMethod::Name,
            _ => SortMethod::Id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilmFilter {
    #[default]
    All,
    Film(String),
}

impl FilmFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_FILMS {
            FilmFilter::All
        } else {
            FilmFilter::Film(value.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilmFilter::All => ALL_FILMS,
            FilmFilter::Film(name) => name,
        }
    }

    pub fn accepts(&self, entity: &Entity) -> bool {
        match self {
            FilmFilter::All => true,
            FilmFilter::Film(name) => entity.films().iter().any(|f| f == name),
        }
    }
}

/// Filter by film, then stable-sort
pub fn derive_view<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
    film: &FilmFilter,
    sort: SortMethod,
) -> Vec<&'a Entity> {
    let mut view: Vec<&Entity> = entities.into_iter().filter(|e| film.accepts(e)).collect();
    match sort {
        SortMethod::Name => view.sort_by(|a, b| collate(a.sort_name(), b.sort_name())),
        SortMethod::Id => view.sort_by(|a, b| a.id.sort_key().total_cmp(&b.id.sort_key())),
    }
    view
}

/// `All` followed by distinct non-empty film names in first-seen order
pub fn film_vocabulary<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Vec<FilmFilter> {
    let mut seen = HashSet::new();
    let mut vocabulary = vec![FilmFilter::All];
    for film in entities.into_iter().flat_map(|e| e.films()) {
        if !film.trim().is_empty() && seen.insert(film.as_str()) {
            vocabulary.push(FilmFilter::Film(film.clone()));
        }
    }
    vocabulary
}

/// Multi-level comparison in the spirit of a locale collator:
/// base letters first (accents and case ignored), then accents, then case
/// with lowercase before uppercase.
fn collate(a: &str, b: &str) -> Ordering {
    let base = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect::<Vec<_>>()
    };
    let accents = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<Vec<_>>();
    let case = |s: &str| s.nfd().map(char::is_uppercase).collect::<Vec<_>>();

    base(a)
        .cmp(&base(b))
        .then_with(|| accents(a).cmp(&accents(b)))
        .then_with(|| case(a).cmp(&case(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, PlaceholderIds};
    use serde_json::{json, Value};

    fn entities(records: Value) -> Vec<Entity> {
        let mut ids = PlaceholderIds::default();
        records.as_array().unwrap().iter().map(|r| normalize(r, &mut ids)).collect()
    }

    fn names(view: &[&Entity]) -> Vec<String> {
        view.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_sort_by_numeric_id() {
        let list = entities(json!([
            {"_id": 10, "name": "Ten"},
            {"_id": "2", "name": "Two"},
            {"_id": "x", "name": "Zero"},
            {"_id": 1, "name": "One"},
        ]));
        let view = derive_view(&list, &FilmFilter::All, SortMethod::Id);
        assert_eq!(names(&view), vec!["Zero", "One", "Two", "Ten"]);
    }

    #[test]
    fn test_id_sort_keeps_ties_in_input_order() {
        let list = entities(json!([{"name": "B"}, {"_id": "a", "name": "A"}, {"name": "C"}]));
        let view = derive_view(&list, &FilmFilter::All, SortMethod::Id);
        assert_eq!(names(&view), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let list = entities(json!([
            {"_id": 1, "name": "mickey"},
            {"_id": 2, "name": "Donald"},
            {"_id": 3, "name": "Mickey"},
            {"_id": 4, "name": "ariel"},
        ]));
        let view = derive_view(&list, &FilmFilter::All, SortMethod::Name);
        assert_eq!(names(&view), vec!["ariel", "Donald", "mickey", "Mickey"]);
    }

    #[test]
    fn test_name_sort_is_stable_for_equal_names() {
        let list = entities(json!([
            {"_id": 9, "name": "Goofy"},
            {"_id": 1, "name": "Goofy"},
        ]));
        let view = derive_view(&list, &FilmFilter::All, SortMethod::Name);
        assert_eq!(view[0].id.to_string(), "9");
        assert_eq!(view[1].id.to_string(), "1");
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let list = entities(json!([
            {"_id": 1, "name": "Zorro"},
            {"_id": 2, "name": "Élise"},
            {"_id": 3, "name": "Eve"},
            {"_id": 4, "name": "elise"},
            {"_id": 5, "name": "Aladdin"},
        ]));
        let view = derive_view(&list, &FilmFilter::All, SortMethod::Name);
        assert_eq!(names(&view), vec!["Aladdin", "elise", "Élise", "Eve", "Zorro"]);
    }

    #[test]
    fn test_missing_name_sorts_first() {
        let list = entities(json!([
            {"_id": 1, "name": "Zorro"},
            {"_id": 2, "name": "Aladdin"},
            {"_id": 3},
            {"_id": 4, "name": "  "},
        ]));
        let view = derive_view(&list, &FilmFilter::All, SortMethod::Name);
        let ids: Vec<_> = view.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["3", "4", "2", "1"]);
        assert_eq!(view[0].name, crate::entity::UNKNOWN_NAME);
    }

    #[test]
    fn test_film_filter_exact_match() {
        let list = entities(json!([
            {"_id": 1, "films": ["Fantasia"]},
            {"_id": 2, "films": ["Fantasia 2000"]},
            {"_id": 3, "films": []},
        ]));
        let film = FilmFilter::parse("Fantasia");
        let view = derive_view(&list, &film, SortMethod::Id);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id.to_string(), "1");
        assert_eq!(derive_view(&list, &FilmFilter::All, SortMethod::Id).len(), 3);
    }

    #[test]
    fn test_vocabulary_first_seen_and_deduplicated() {
        let list = entities(json!([
            {"films": ["B", "A", ""]},
            {"films": ["A", "C"]},
        ]));
        let labels: Vec<_> = film_vocabulary(&list).iter().map(|f| f.label().to_string()).collect();
        assert_eq!(labels, vec!["all", "B", "A", "C"]);
    }

    #[test]
    fn test_sort_method_parse_falls_back_to_id() {
        assert_eq!(SortMethod::parse("name"), SortMethod::Name);
        assert_eq!(SortMethod::parse("popularity"), SortMethod::Id);
    }
}
