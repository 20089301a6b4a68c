use async_trait::async_trait;
use ecoalbum_model::{AnimalSummary, Kind, PlantSummary};

use crate::Result;
use crate::database::records::{FaunaPhotoRecord, FloraPhotoRecord};

/// Optional predicates for the species listing endpoints.
///
/// All present predicates are combined with AND; the repository orders
/// results by common name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesFilter {
    /// Substring match over common and scientific name.
    pub q: Option<String>,
    /// Exact conservation-status match.
    pub estado: Option<String>,
    /// First letter of the common name.
    pub letra: Option<String>,
    /// Category name, fauna only; ignored for flora.
    pub categoria: Option<String>,
}

/// Repository port for species and photo retrieval.
///
/// Batch fetches (`fetch_*_photos_by_ids`) must resolve the parent species
/// in the same query; callers rely on this to avoid per-photo lookups. Page
/// fetches return rows in the table's natural (insertion) order.
#[async_trait]
pub trait SpeciesRepository: Send + Sync {
    async fn count_species(&self, kind: Kind) -> Result<i64>;
    async fn count_photos(&self, kind: Kind) -> Result<i64>;

    /// Narrow id-column scan over all photos of one kind, used by the
    /// sampling engine instead of a full-row random sort.
    async fn list_photo_ids(&self, kind: Kind) -> Result<Vec<i32>>;

    async fn fetch_fauna_photos_by_ids(&self, ids: &[i32]) -> Result<Vec<FaunaPhotoRecord>>;
    async fn fetch_flora_photos_by_ids(&self, ids: &[i32]) -> Result<Vec<FloraPhotoRecord>>;

    async fn fetch_fauna_photo_page(&self, limit: i64) -> Result<Vec<FaunaPhotoRecord>>;
    async fn fetch_flora_photo_page(&self, limit: i64) -> Result<Vec<FloraPhotoRecord>>;

    async fn list_animals(&self, filter: &SpeciesFilter) -> Result<Vec<AnimalSummary>>;
    async fn list_plants(&self, filter: &SpeciesFilter) -> Result<Vec<PlantSummary>>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<()>;
}
