//! Bounded random sampling over the photo tables.
//!
//! Draws ids from a narrow column scan and fetches full rows only for the
//! drawn ids, keeping the work O(limit) in fetched rows and avoiding a
//! vendor-specific `ORDER BY random()` full-row sort.

use ecoalbum_model::{GalleryItem, Kind};
use rand::seq::SliceRandom;

use crate::Result;
use crate::database::ports::SpeciesRepository;
use crate::gallery::mapper::{map_fauna_photo, map_flora_photo};

/// Slots granted to one kind out of `limit` total.
///
/// With both kinds selected each gets `floor(limit / 2)`; an odd limit
/// under-fills by one slot rather than favoring either kind.
pub(crate) fn kind_share(limit: usize, both_kinds: bool) -> usize {
    if both_kinds { limit / 2 } else { limit }
}

/// Draw up to `want` random photos of `kind`, without replacement.
///
/// A kind with zero photos contributes zero items; the caller does not
/// compensate by over-sampling the other kind.
pub(crate) async fn sample_kind(
    repo: &dyn SpeciesRepository,
    kind: Kind,
    want: usize,
) -> Result<Vec<GalleryItem>> {
    if want == 0 {
        return Ok(Vec::new());
    }

    let ids = repo.list_photo_ids(kind).await?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let take = want.min(ids.len());
    let drawn: Vec<i32> = rand::seq::index::sample(&mut rand::rng(), ids.len(), take)
        .iter()
        .map(|i| ids[i])
        .collect();

    let items = match kind {
        Kind::Fauna => repo
            .fetch_fauna_photos_by_ids(&drawn)
            .await?
            .into_iter()
            .map(map_fauna_photo)
            .collect(),
        Kind::Flora => repo
            .fetch_flora_photos_by_ids(&drawn)
            .await?
            .into_iter()
            .map(map_flora_photo)
            .collect(),
    };

    Ok(items)
}

/// Shuffle the concatenated result so the final ordering does not
/// systematically favor the kind fetched first.
pub(crate) fn shuffle(items: &mut [GalleryItem]) {
    items.shuffle(&mut rand::rng());
}
