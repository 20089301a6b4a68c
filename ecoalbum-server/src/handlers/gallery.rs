use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use ecoalbum_core::{CatalogError, DEFAULT_GALLERY_LIMIT};
use ecoalbum_model::{ESTADOS_FAUNA, ESTADOS_FLORA, GalleryItem, GalleryStatistics, KindFilter};

use crate::{AppState, errors::AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct GalleryParams {
    pub limit: Option<String>,
    pub tipo: Option<String>,
}

/// Parse `limit`/`tipo`, rejecting malformed input before any repository
/// call. Clamping to the hard ceiling happens in the service.
fn parse_gallery_params(params: &GalleryParams) -> ecoalbum_core::Result<(usize, KindFilter)> {
    let limit = match params.limit.as_deref() {
        None => DEFAULT_GALLERY_LIMIT,
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| CatalogError::InvalidParameter(format!("invalid limit: {raw}")))?,
    };

    let filter = match params.tipo.as_deref() {
        None => KindFilter::default(),
        Some(raw) => KindFilter::parse(raw)
            .ok_or_else(|| CatalogError::InvalidParameter(format!("unrecognized tipo: {raw}")))?,
    };

    Ok((limit, filter))
}

/// Featured photos for the homepage carousel: deterministic first-N.
pub async fn destacados_handler(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> AppResult<Json<Vec<GalleryItem>>> {
    let (limit, filter) = parse_gallery_params(&params)?;
    let items = state.gallery.featured(limit, filter).await?;
    debug!(count = items.len(), "featured gallery served");
    Ok(Json(items))
}

/// Random photos for dynamic content display.
pub async fn aleatorios_handler(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> AppResult<Json<Vec<GalleryItem>>> {
    let (limit, filter) = parse_gallery_params(&params)?;
    let items = state.gallery.random(limit, filter).await?;
    debug!(count = items.len(), "random gallery served");
    Ok(Json(items))
}

/// Gallery counters for the homepage.
pub async fn estadisticas_handler(
    State(state): State<AppState>,
) -> AppResult<Json<GalleryStatistics>> {
    let stats = state.gallery.statistics().await?;
    Ok(Json(stats))
}

/// Conservation-status catalogs, split by kind (fauna carries one more
/// category than flora).
pub async fn estados_conservacion_handler() -> Json<Value> {
    Json(json!({
        "fauna": ESTADOS_FAUNA,
        "flora": ESTADOS_FLORA,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<&str>, tipo: Option<&str>) -> GalleryParams {
        GalleryParams {
            limit: limit.map(str::to_string),
            tipo: tipo.map(str::to_string),
        }
    }

    #[test]
    fn defaults_apply_when_params_absent() {
        let (limit, filter) = parse_gallery_params(&params(None, None)).unwrap();
        assert_eq!(limit, DEFAULT_GALLERY_LIMIT);
        assert_eq!(filter, KindFilter::Todos);
    }

    #[test]
    fn rejects_malformed_limit() {
        assert!(parse_gallery_params(&params(Some("diez"), None)).is_err());
        assert!(parse_gallery_params(&params(Some("-1"), None)).is_err());
        assert!(parse_gallery_params(&params(Some("3.5"), None)).is_err());
    }

    #[test]
    fn rejects_unrecognized_tipo() {
        let err = parse_gallery_params(&params(None, Some("hongos"))).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidParameter(_)));

        let app_err = crate::errors::AppError::from(err);
        assert_eq!(app_err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn parses_valid_combinations() {
        let (limit, filter) = parse_gallery_params(&params(Some("15"), Some("flora"))).unwrap();
        assert_eq!(limit, 15);
        assert_eq!(filter, KindFilter::Flora);
    }
}
