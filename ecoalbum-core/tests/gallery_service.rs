//! Gallery service behaviour against a mocked repository port.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use ecoalbum_core::{
    CatalogError, FaunaPhotoRecord, FloraPhotoRecord, GalleryService, Result, SpeciesFilter,
    SpeciesRepository,
};
use ecoalbum_model::{AnimalSummary, Kind, KindFilter, PlantSummary};
use mockall::predicate::eq;

mockall::mock! {
    Repo {}

    #[async_trait]
    impl SpeciesRepository for Repo {
        async fn count_species(&self, kind: Kind) -> Result<i64>;
        async fn count_photos(&self, kind: Kind) -> Result<i64>;
        async fn list_photo_ids(&self, kind: Kind) -> Result<Vec<i32>>;
        async fn fetch_fauna_photos_by_ids(&self, ids: &[i32]) -> Result<Vec<FaunaPhotoRecord>>;
        async fn fetch_flora_photos_by_ids(&self, ids: &[i32]) -> Result<Vec<FloraPhotoRecord>>;
        async fn fetch_fauna_photo_page(&self, limit: i64) -> Result<Vec<FaunaPhotoRecord>>;
        async fn fetch_flora_photo_page(&self, limit: i64) -> Result<Vec<FloraPhotoRecord>>;
        async fn list_animals(&self, filter: &SpeciesFilter) -> Result<Vec<AnimalSummary>>;
        async fn list_plants(&self, filter: &SpeciesFilter) -> Result<Vec<PlantSummary>>;
        async fn ping(&self) -> Result<()>;
    }
}

fn fauna_record(id: i32) -> FaunaPhotoRecord {
    FaunaPhotoRecord {
        id_foto: id,
        url_foto: format!("https://example.org/fauna/{id}.jpg"),
        descripcion: None,
        id_animal: id + 100,
        nombre_comun: format!("Animal {id}"),
        nombre_cientifico: format!("Animalis {id}"),
        estado: Some("Vulnerable (VU)".to_string()),
    }
}

fn flora_record(id: i32) -> FloraPhotoRecord {
    FloraPhotoRecord {
        id_foto: id,
        url_foto: format!("https://example.org/flora/{id}.jpg"),
        descripcion: None,
        id_planta: id + 200,
        nombre_comun: format!("Planta {id}"),
        nombre_cientifico: format!("Plantae {id}"),
        estado: None,
    }
}

fn service(repo: MockRepo) -> GalleryService {
    GalleryService::new(Arc::new(repo))
}

#[tokio::test]
async fn featured_is_deterministic_and_takes_first_page() {
    let mut repo = MockRepo::new();
    // 8 flora photos available, limit 5: the first 5 in natural order
    repo.expect_fetch_flora_photo_page()
        .with(eq(5i64))
        .returning(|limit| Ok((1..=8).take(limit as usize).map(flora_record).collect()));

    let service = service(repo);
    let first = service.featured(5, KindFilter::Flora).await.unwrap();
    let second = service.featured(5, KindFilter::Flora).await.unwrap();

    assert_eq!(first.len(), 5);
    assert_eq!(first.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn featured_todos_concatenates_fauna_first_and_truncates() {
    let mut repo = MockRepo::new();
    repo.expect_fetch_fauna_photo_page()
        .with(eq(4i64))
        .returning(|_| Ok((1..=3).map(fauna_record).collect()));
    repo.expect_fetch_flora_photo_page()
        .with(eq(4i64))
        .returning(|_| Ok((1..=4).map(flora_record).collect()));

    let items = service(repo).featured(4, KindFilter::Todos).await.unwrap();

    assert_eq!(items.len(), 4);
    assert!(items[..3].iter().all(|i| i.kind == Kind::Fauna));
    assert_eq!(items[3].kind, Kind::Flora);
    assert_eq!(items[3].id, 1);
}

#[tokio::test]
async fn featured_clamps_limit_to_hard_ceiling() {
    let mut repo = MockRepo::new();
    repo.expect_fetch_fauna_photo_page()
        .with(eq(20i64))
        .returning(|_| Ok((1..=30).take(20).map(fauna_record).collect()));

    let items = service(repo).featured(50, KindFilter::Fauna).await.unwrap();
    assert_eq!(items.len(), 20);
}

#[tokio::test]
async fn random_single_kind_never_exceeds_available() {
    let mut repo = MockRepo::new();
    repo.expect_list_photo_ids()
        .with(eq(Kind::Fauna))
        .returning(|_| Ok(vec![1, 2, 3]));
    repo.expect_fetch_fauna_photos_by_ids()
        .returning(|ids| Ok(ids.iter().map(|&id| fauna_record(id)).collect()));

    let items = service(repo).random(10, KindFilter::Fauna).await.unwrap();

    assert_eq!(items.len(), 3);
    let mut ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn random_todos_requests_half_share_per_kind() {
    let mut repo = MockRepo::new();
    repo.expect_list_photo_ids()
        .returning(|_| Ok((1..=50).collect()));
    repo.expect_fetch_fauna_photos_by_ids()
        .withf(|ids: &[i32]| ids.len() == 5)
        .returning(|ids| Ok(ids.iter().map(|&id| fauna_record(id)).collect()));
    repo.expect_fetch_flora_photos_by_ids()
        .withf(|ids: &[i32]| ids.len() == 5)
        .returning(|ids| Ok(ids.iter().map(|&id| flora_record(id)).collect()));

    let items = service(repo).random(10, KindFilter::Todos).await.unwrap();

    assert_eq!(items.len(), 10);
    assert_eq!(items.iter().filter(|i| i.kind == Kind::Fauna).count(), 5);
    assert_eq!(items.iter().filter(|i| i.kind == Kind::Flora).count(), 5);
}

#[tokio::test]
async fn random_todos_with_exhausted_flora_is_not_compensated() {
    // 3 fauna photos, 0 flora: floor(10/2)=5 requested from fauna but
    // clamped to 3 available; flora contributes nothing.
    let mut repo = MockRepo::new();
    repo.expect_list_photo_ids()
        .with(eq(Kind::Fauna))
        .returning(|_| Ok(vec![1, 2, 3]));
    repo.expect_list_photo_ids()
        .with(eq(Kind::Flora))
        .returning(|_| Ok(Vec::new()));
    repo.expect_fetch_fauna_photos_by_ids()
        .withf(|ids: &[i32]| ids.len() == 3)
        .returning(|ids| Ok(ids.iter().map(|&id| fauna_record(id)).collect()));
    repo.expect_fetch_flora_photos_by_ids().never();

    let items = service(repo).random(10, KindFilter::Todos).await.unwrap();

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.kind == Kind::Fauna));
}

#[tokio::test]
async fn random_odd_limit_underfills_by_one_slot() {
    let mut repo = MockRepo::new();
    repo.expect_list_photo_ids()
        .returning(|_| Ok((1..=50).collect()));
    repo.expect_fetch_fauna_photos_by_ids()
        .withf(|ids: &[i32]| ids.len() == 4)
        .returning(|ids| Ok(ids.iter().map(|&id| fauna_record(id)).collect()));
    repo.expect_fetch_flora_photos_by_ids()
        .withf(|ids: &[i32]| ids.len() == 4)
        .returning(|ids| Ok(ids.iter().map(|&id| flora_record(id)).collect()));

    let items = service(repo).random(9, KindFilter::Todos).await.unwrap();
    assert_eq!(items.len(), 8);
}

#[tokio::test]
async fn random_draws_vary_across_calls() {
    // Statistical check: over 10 independent draws of 10 from 30 ids,
    // at least two distinct id sets must show up.
    let mut repo = MockRepo::new();
    repo.expect_list_photo_ids()
        .returning(|_| Ok((1..=30).collect()));
    repo.expect_fetch_fauna_photos_by_ids()
        .returning(|ids| Ok(ids.iter().map(|&id| fauna_record(id)).collect()));

    let service = service(repo);
    let mut seen: Vec<BTreeSet<i32>> = Vec::new();
    for _ in 0..10 {
        let items = service.random(10, KindFilter::Fauna).await.unwrap();
        assert_eq!(items.len(), 10);
        seen.push(items.iter().map(|i| i.id).collect());
    }

    let first = &seen[0];
    assert!(
        seen.iter().any(|set| set != first),
        "10 draws of 10 from 30 ids all returned the same set"
    );
}

#[tokio::test]
async fn statistics_totals_equal_component_sums() {
    let mut repo = MockRepo::new();
    repo.expect_count_species()
        .with(eq(Kind::Fauna))
        .returning(|_| Ok(12));
    repo.expect_count_species()
        .with(eq(Kind::Flora))
        .returning(|_| Ok(7));
    repo.expect_count_photos()
        .with(eq(Kind::Fauna))
        .returning(|_| Ok(40));
    repo.expect_count_photos()
        .with(eq(Kind::Flora))
        .returning(|_| Ok(9));

    let stats = service(repo).statistics().await.unwrap();

    assert_eq!(stats.total_animales, 12);
    assert_eq!(stats.total_plantas, 7);
    assert_eq!(stats.total_especies(), 19);
    assert_eq!(stats.total_fotos(), 49);
}

#[tokio::test]
async fn one_failing_kind_fails_the_whole_operation() {
    // No partial galleries: a flora failure discards the fauna half too.
    let mut repo = MockRepo::new();
    repo.expect_fetch_fauna_photo_page()
        .returning(|_| Ok((1..=5).map(fauna_record).collect()));
    repo.expect_fetch_flora_photo_page()
        .returning(|_| Err(CatalogError::Unavailable("connection reset".to_string())));

    let err = service(repo)
        .featured(10, KindFilter::Todos)
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Unavailable(_)));
}

#[tokio::test]
async fn random_of_empty_tables_is_empty_not_an_error() {
    let mut repo = MockRepo::new();
    repo.expect_list_photo_ids().returning(|_| Ok(Vec::new()));

    let items = service(repo).random(10, KindFilter::Todos).await.unwrap();
    assert!(items.is_empty());
}
