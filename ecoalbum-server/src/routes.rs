use axum::{Router, http::Method, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState,
    handlers::{
        gallery::{
            aleatorios_handler, destacados_handler, estadisticas_handler,
            estados_conservacion_handler,
        },
        health::health_handler,
        species::{list_animals_handler, list_plants_handler},
    },
};

/// Build the application router with the public read API.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        .merge(galeria_routes())
        .merge(species_routes())
}

/// Carousel and statistics endpoints.
fn galeria_routes() -> Router<AppState> {
    Router::new()
        .route("/galeria/destacados", get(destacados_handler))
        .route("/galeria/aleatorios", get(aleatorios_handler))
        .route("/galeria/estadisticas", get(estadisticas_handler))
        .route(
            "/galeria/estados-conservacion",
            get(estados_conservacion_handler),
        )
}

/// Species listing endpoints with sparse-fieldset support.
fn species_routes() -> Router<AppState> {
    Router::new()
        .route("/fauna/animales", get(list_animals_handler))
        .route("/flora/plantas", get(list_plants_handler))
}

/// Public read API: any origin may GET.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
