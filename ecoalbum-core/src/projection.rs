//! Client-driven response shaping for the species listings.
//!
//! A response row is a canonical field-name-to-value map; projection keeps
//! the intersection with a client allow-list. Unknown requested names are
//! dropped, never rejected, so clients survive API evolution. Projection
//! has no failure mode.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

/// Reduced representation of an entity; built per response, discarded
/// after serialization.
pub type ProjectedEntity = Map<String, Value>;

/// Fields of the minimal (card/thumbnail) shape.
pub const MINIMAL_FIELDS: [&str; 3] = ["id", "nombre_comun", "foto_principal"];

/// Serializer shapes for list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// Card/thumbnail shape: id, common name, primary photo.
    Minimal,
    /// Full list-row shape.
    List,
}

/// Split a comma-separated `fields` parameter into an allow-list.
/// Whitespace is trimmed and empty segments dropped.
pub fn parse_fields(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick the serializer shape from the *cardinality* of the allow-list,
/// not its contents: one to three requested fields reads as "the caller
/// wants a thumbnail". An empty allow-list carries no intent and keeps
/// the full list shape, like an absent parameter.
pub fn select_shape(requested: Option<&BTreeSet<String>>) -> ListShape {
    match requested {
        Some(fields) if !fields.is_empty() && fields.len() <= 3 => ListShape::Minimal,
        _ => ListShape::List,
    }
}

/// Intersect `entity` with the allow-list. Identity when no list is given;
/// the canonical entity is never mutated.
pub fn project(entity: &ProjectedEntity, requested: Option<&BTreeSet<String>>) -> ProjectedEntity {
    match requested {
        None => entity.clone(),
        Some(fields) => entity
            .iter()
            .filter(|(name, _)| fields.contains(name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    }
}

/// Canonical map form of a serializable entity. Non-object values have no
/// field set to project over and collapse to an empty map.
pub fn entity_map<T: Serialize>(value: &T) -> ProjectedEntity {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_entity() -> ProjectedEntity {
        let mut map = Map::new();
        map.insert("id".to_string(), json!(1));
        map.insert("name".to_string(), json!("x"));
        map.insert("url".to_string(), json!("y"));
        map.insert("extra".to_string(), json!("z"));
        map
    }

    #[test]
    fn no_allow_list_is_identity() {
        let entity = sample_entity();
        assert_eq!(project(&entity, None), entity);
    }

    #[test]
    fn projects_exact_intersection() {
        let entity = sample_entity();
        let fields: BTreeSet<String> = ["id", "name"].iter().map(|s| s.to_string()).collect();
        let projected = project(&entity, Some(&fields));
        assert_eq!(projected.len(), 2);
        assert_eq!(projected["id"], json!(1));
        assert_eq!(projected["name"], json!("x"));
    }

    #[test]
    fn unknown_fields_drop_silently() {
        let entity = sample_entity();
        let fields: BTreeSet<String> = ["nonexistent_field".to_string()].into_iter().collect();
        assert!(project(&entity, Some(&fields)).is_empty());
    }

    #[test]
    fn parse_fields_trims_and_drops_empties() {
        let fields = parse_fields(" id, nombre_comun,,foto_principal ,");
        assert_eq!(fields.len(), 3);
        assert!(fields.contains("id"));
        assert!(fields.contains("nombre_comun"));
        assert!(fields.contains("foto_principal"));
    }

    #[test]
    fn shape_follows_field_count_not_content() {
        assert_eq!(select_shape(None), ListShape::List);

        let three = parse_fields("a,b,c");
        assert_eq!(select_shape(Some(&three)), ListShape::Minimal);

        let four = parse_fields("a,b,c,d");
        assert_eq!(select_shape(Some(&four)), ListShape::List);

        // an empty allow-list carries no intent
        let empty = parse_fields("");
        assert_eq!(select_shape(Some(&empty)), ListShape::List);
    }

    #[test]
    fn entity_map_of_non_object_is_empty() {
        assert!(entity_map(&42).is_empty());
    }
}
