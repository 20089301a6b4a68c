use std::sync::Arc;

use ecoalbum_model::{GalleryItem, GalleryStatistics, Kind, KindFilter};
use tracing::debug;

use crate::Result;
use crate::database::ports::SpeciesRepository;
use crate::gallery::mapper::{map_fauna_photo, map_flora_photo};
use crate::gallery::sampling::{kind_share, sample_kind, shuffle};

/// Hard ceiling applied to `limit` before any repository call.
pub const MAX_GALLERY_LIMIT: usize = 20;

/// Returned when the client does not pass a `limit`.
pub const DEFAULT_GALLERY_LIMIT: usize = 10;

/// Orchestrates the featured, random and statistics gallery queries over
/// the repository port. Holds no per-request state; independent repository
/// calls within one operation run concurrently.
#[derive(Clone)]
pub struct GalleryService {
    repo: Arc<dyn SpeciesRepository>,
}

impl std::fmt::Debug for GalleryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryService").finish_non_exhaustive()
    }
}

impl GalleryService {
    pub fn new(repo: Arc<dyn SpeciesRepository>) -> Self {
        Self { repo }
    }

    /// First `limit` photos per kind in the repository's natural order.
    ///
    /// Deterministic: no shuffle, fauna before flora when both kinds are
    /// selected, truncated to `limit` total.
    pub async fn featured(&self, limit: usize, filter: KindFilter) -> Result<Vec<GalleryItem>> {
        let limit = limit.min(MAX_GALLERY_LIMIT);
        debug!(limit, filter = ?filter, "featured gallery query");

        let mut items = match filter {
            KindFilter::Fauna => self.featured_kind(Kind::Fauna, limit).await?,
            KindFilter::Flora => self.featured_kind(Kind::Flora, limit).await?,
            KindFilter::Todos => {
                let (mut fauna, flora) = tokio::try_join!(
                    self.featured_kind(Kind::Fauna, limit),
                    self.featured_kind(Kind::Flora, limit),
                )?;
                fauna.extend(flora);
                fauna
            }
        };

        items.truncate(limit);
        Ok(items)
    }

    /// Up to `limit` photos drawn uniformly across the whole table.
    ///
    /// With both kinds selected each gets a floor(limit/2) share and the
    /// combined list is shuffled before truncation. No caching; repeated
    /// calls draw independently.
    pub async fn random(&self, limit: usize, filter: KindFilter) -> Result<Vec<GalleryItem>> {
        let limit = limit.min(MAX_GALLERY_LIMIT);
        debug!(limit, filter = ?filter, "random gallery query");

        let share = kind_share(limit, filter.is_both());
        let mut items = match filter {
            KindFilter::Fauna => sample_kind(self.repo.as_ref(), Kind::Fauna, share).await?,
            KindFilter::Flora => sample_kind(self.repo.as_ref(), Kind::Flora, share).await?,
            KindFilter::Todos => {
                let (mut fauna, flora) = tokio::try_join!(
                    sample_kind(self.repo.as_ref(), Kind::Fauna, share),
                    sample_kind(self.repo.as_ref(), Kind::Flora, share),
                )?;
                fauna.extend(flora);
                shuffle(&mut fauna);
                fauna
            }
        };

        items.truncate(limit);
        Ok(items)
    }

    /// Four independent counts, issued concurrently.
    ///
    /// No snapshot transaction: each count is correct at its own read time
    /// and the derived totals are computed from whatever was observed.
    pub async fn statistics(&self) -> Result<GalleryStatistics> {
        let (total_animales, total_plantas, total_fotos_fauna, total_fotos_flora) = tokio::try_join!(
            self.repo.count_species(Kind::Fauna),
            self.repo.count_species(Kind::Flora),
            self.repo.count_photos(Kind::Fauna),
            self.repo.count_photos(Kind::Flora),
        )?;

        Ok(GalleryStatistics {
            total_animales,
            total_plantas,
            total_fotos_fauna,
            total_fotos_flora,
        })
    }

    async fn featured_kind(&self, kind: Kind, limit: usize) -> Result<Vec<GalleryItem>> {
        let items = match kind {
            Kind::Fauna => self
                .repo
                .fetch_fauna_photo_page(limit as i64)
                .await?
                .into_iter()
                .map(map_fauna_photo)
                .collect(),
            Kind::Flora => self
                .repo
                .fetch_flora_photo_page(limit as i64)
                .await?
                .into_iter()
                .map(map_flora_photo)
                .collect(),
        };
        Ok(items)
    }
}
