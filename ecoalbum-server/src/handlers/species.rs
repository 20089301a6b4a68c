use std::collections::BTreeSet;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use ecoalbum_core::projection::MINIMAL_FIELDS;
use ecoalbum_core::{
    ListShape, ProjectedEntity, SpeciesFilter, entity_map, parse_fields, project, select_shape,
};

use crate::{AppState, errors::AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct SpeciesListParams {
    /// Comma-separated sparse-fieldset allow-list.
    pub fields: Option<String>,
    pub q: Option<String>,
    pub estado: Option<String>,
    pub letra: Option<String>,
    pub categoria: Option<String>,
}

fn species_filter(params: &SpeciesListParams) -> SpeciesFilter {
    SpeciesFilter {
        q: non_empty(params.q.as_deref()),
        estado: non_empty(params.estado.as_deref()),
        // only the first letter matters, matching the original API
        letra: params
            .letra
            .as_deref()
            .and_then(|s| s.chars().next())
            .map(|c| c.to_string()),
        categoria: non_empty(params.categoria.as_deref()),
    }
}

/// A `fields` value that parses to nothing (`?fields=` or only commas)
/// behaves like an absent parameter: full rows, no projection.
fn requested_fields(params: &SpeciesListParams) -> Option<BTreeSet<String>> {
    params
        .fields
        .as_deref()
        .map(parse_fields)
        .filter(|fields| !fields.is_empty())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Apply the shape heuristic, then the client's allow-list.
fn shape_then_project(
    full: ProjectedEntity,
    shape: ListShape,
    requested: Option<&BTreeSet<String>>,
) -> ProjectedEntity {
    let shaped = match shape {
        ListShape::Minimal => {
            let minimal: BTreeSet<String> = MINIMAL_FIELDS.iter().map(|f| f.to_string()).collect();
            project(&full, Some(&minimal))
        }
        ListShape::List => full,
    };
    project(&shaped, requested)
}

/// List animals with optional filtering and sparse fieldsets.
pub async fn list_animals_handler(
    State(state): State<AppState>,
    Query(params): Query<SpeciesListParams>,
) -> AppResult<Json<Vec<ProjectedEntity>>> {
    let requested = requested_fields(&params);
    let shape = select_shape(requested.as_ref());
    let filter = species_filter(&params);

    let animals = state.repo.list_animals(&filter).await?;
    debug!(count = animals.len(), shape = ?shape, "animal listing served");

    let rows = animals
        .iter()
        .map(|animal| {
            let mut full = entity_map(animal);
            full.insert(
                "estado_display".to_string(),
                json!(animal.estado_display()),
            );
            shape_then_project(full, shape, requested.as_ref())
        })
        .collect();

    Ok(Json(rows))
}

/// List plants with optional filtering and sparse fieldsets. The
/// `categoria` parameter is ignored: flora has no category dimension.
pub async fn list_plants_handler(
    State(state): State<AppState>,
    Query(params): Query<SpeciesListParams>,
) -> AppResult<Json<Vec<ProjectedEntity>>> {
    let requested = requested_fields(&params);
    let shape = select_shape(requested.as_ref());
    let filter = species_filter(&params);

    let plants = state.repo.list_plants(&filter).await?;
    debug!(count = plants.len(), shape = ?shape, "plant listing served");

    let rows = plants
        .iter()
        .map(|plant| {
            let mut full = entity_map(plant);
            full.insert("estado_display".to_string(), json!(plant.estado_display()));
            shape_then_project(full, shape, requested.as_ref())
        })
        .collect();

    Ok(Json(rows))
}
