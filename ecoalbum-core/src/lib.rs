//! Core library for the EcoAlbum catalog API.
//!
//! Owns the repository port and its Postgres adapter, the gallery
//! aggregation/sampling service and the field-projection layer. The HTTP
//! surface lives in `ecoalbum-server`; shared wire types in
//! `ecoalbum-model`.

pub mod database;
pub mod error;
pub mod gallery;
pub mod projection;

pub use database::ports::{SpeciesFilter, SpeciesRepository};
pub use database::postgres::PostgresSpeciesRepository;
pub use database::records::{FaunaPhotoRecord, FloraPhotoRecord};
pub use error::{CatalogError, Result};
pub use gallery::service::{DEFAULT_GALLERY_LIMIT, GalleryService, MAX_GALLERY_LIMIT};
pub use projection::{ListShape, ProjectedEntity, entity_map, parse_fields, project, select_shape};
