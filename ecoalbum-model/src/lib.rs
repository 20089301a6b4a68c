//! Shared domain types for the EcoAlbum catalog API.

pub mod estado;
pub mod gallery;
pub mod kind;
pub mod species;

pub use estado::{ESTADOS_FAUNA, ESTADOS_FLORA};
pub use gallery::{GalleryItem, GalleryStatistics};
pub use kind::{Kind, KindFilter};
pub use species::{AnimalSummary, PlantSummary};
