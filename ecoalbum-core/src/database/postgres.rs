use ecoalbum_model::{AnimalSummary, Kind, PlantSummary};
use sqlx::{FromRow, PgPool};

use async_trait::async_trait;

use crate::database::ports::{SpeciesFilter, SpeciesRepository};
use crate::database::records::{FaunaPhotoRecord, FloraPhotoRecord};
use crate::{CatalogError, Result};

const FAUNA_PHOTO_COLUMNS: &str = r#"
    f.id_foto,
    f.url_foto,
    f.descripcion,
    a.id_animal,
    a.nombre_comun,
    a.nombre_cientifico,
    a.estado
"#;

const FLORA_PHOTO_COLUMNS: &str = r#"
    f.id_foto,
    f.url_foto,
    f.descripcion,
    p.id_planta,
    p.nombre_comun,
    p.nombre_cientifico,
    p.estado
"#;

#[derive(Debug, FromRow)]
struct AnimalRow {
    id_animal: i32,
    nombre_comun: String,
    nombre_cientifico: String,
    estado: Option<String>,
    id_categoria: i32,
    categoria_nombre: String,
    foto_principal: Option<String>,
}

#[derive(Debug, FromRow)]
struct PlantRow {
    id_planta: i32,
    nombre_comun: String,
    nombre_cientifico: String,
    estado: Option<String>,
    foto_principal: Option<String>,
}

/// Postgres adapter for [`SpeciesRepository`].
///
/// Queries are runtime-checked so the crate builds without a live
/// database; the schema lives in `migrations/`.
#[derive(Clone, Debug)]
pub struct PostgresSpeciesRepository {
    pool: PgPool,
}

impl PostgresSpeciesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SpeciesRepository for PostgresSpeciesRepository {
    async fn count_species(&self, kind: Kind) -> Result<i64> {
        let sql = match kind {
            Kind::Fauna => r#"SELECT COUNT(*) FROM "Animal""#,
            Kind::Flora => r#"SELECT COUNT(*) FROM "Flora""#,
        };

        sqlx::query_scalar(sql)
            .fetch_one(self.pool())
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{kind} species count failed: {e}")))
    }

    async fn count_photos(&self, kind: Kind) -> Result<i64> {
        let sql = match kind {
            Kind::Fauna => r#"SELECT COUNT(*) FROM "FotoAnimal""#,
            Kind::Flora => r#"SELECT COUNT(*) FROM "FotoFlora""#,
        };

        sqlx::query_scalar(sql)
            .fetch_one(self.pool())
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{kind} photo count failed: {e}")))
    }

    async fn list_photo_ids(&self, kind: Kind) -> Result<Vec<i32>> {
        let sql = match kind {
            Kind::Fauna => r#"SELECT id_foto FROM "FotoAnimal""#,
            Kind::Flora => r#"SELECT id_foto FROM "FotoFlora""#,
        };

        sqlx::query_scalar(sql)
            .fetch_all(self.pool())
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{kind} photo id scan failed: {e}")))
    }

    async fn fetch_fauna_photos_by_ids(&self, ids: &[i32]) -> Result<Vec<FaunaPhotoRecord>> {
        let sql = format!(
            r#"
            SELECT {FAUNA_PHOTO_COLUMNS}
            FROM "FotoAnimal" f
            JOIN "Animal" a ON a.id_animal = f.id_animal
            WHERE f.id_foto = ANY($1)
            "#
        );

        sqlx::query_as(&sql)
            .bind(ids)
            .fetch_all(self.pool())
            .await
            .map_err(|e| CatalogError::Unavailable(format!("fauna photo batch fetch failed: {e}")))
    }

    async fn fetch_flora_photos_by_ids(&self, ids: &[i32]) -> Result<Vec<FloraPhotoRecord>> {
        let sql = format!(
            r#"
            SELECT {FLORA_PHOTO_COLUMNS}
            FROM "FotoFlora" f
            JOIN "Flora" p ON p.id_planta = f.id_planta
            WHERE f.id_foto = ANY($1)
            "#
        );

        sqlx::query_as(&sql)
            .bind(ids)
            .fetch_all(self.pool())
            .await
            .map_err(|e| CatalogError::Unavailable(format!("flora photo batch fetch failed: {e}")))
    }

    async fn fetch_fauna_photo_page(&self, limit: i64) -> Result<Vec<FaunaPhotoRecord>> {
        let sql = format!(
            r#"
            SELECT {FAUNA_PHOTO_COLUMNS}
            FROM "FotoAnimal" f
            JOIN "Animal" a ON a.id_animal = f.id_animal
            ORDER BY f.id_foto
            LIMIT $1
            "#
        );

        sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(self.pool())
            .await
            .map_err(|e| CatalogError::Unavailable(format!("fauna photo page failed: {e}")))
    }

    async fn fetch_flora_photo_page(&self, limit: i64) -> Result<Vec<FloraPhotoRecord>> {
        let sql = format!(
            r#"
            SELECT {FLORA_PHOTO_COLUMNS}
            FROM "FotoFlora" f
            JOIN "Flora" p ON p.id_planta = f.id_planta
            ORDER BY f.id_foto
            LIMIT $1
            "#
        );

        sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(self.pool())
            .await
            .map_err(|e| CatalogError::Unavailable(format!("flora photo page failed: {e}")))
    }

    async fn list_animals(&self, filter: &SpeciesFilter) -> Result<Vec<AnimalSummary>> {
        let rows: Vec<AnimalRow> = sqlx::query_as(
            r#"
            SELECT
                a.id_animal,
                a.nombre_comun,
                a.nombre_cientifico,
                a.estado,
                a.id_categoria,
                c.nombre AS categoria_nombre,
                (SELECT f.url_foto
                 FROM "FotoAnimal" f
                 WHERE f.id_animal = a.id_animal
                 ORDER BY f.id_foto
                 LIMIT 1) AS foto_principal
            FROM "Animal" a
            JOIN "Categoria" c ON c.id_categoria = a.id_categoria
            WHERE ($1::text IS NULL
                   OR a.nombre_comun ILIKE '%' || $1 || '%'
                   OR a.nombre_cientifico ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR a.estado = $2)
              AND ($3::text IS NULL OR a.nombre_comun ILIKE $3 || '%')
              AND ($4::text IS NULL OR c.nombre ILIKE $4)
            ORDER BY a.nombre_comun
            "#,
        )
        .bind(filter.q.as_deref())
        .bind(filter.estado.as_deref())
        .bind(filter.letra.as_deref())
        .bind(filter.categoria.as_deref())
        .fetch_all(self.pool())
        .await
        .map_err(|e| CatalogError::Unavailable(format!("animal listing failed: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| AnimalSummary {
                id: r.id_animal,
                nombre_comun: r.nombre_comun,
                nombre_cientifico: r.nombre_cientifico,
                estado: r.estado,
                categoria: r.id_categoria,
                categoria_nombre: r.categoria_nombre,
                foto_principal: r.foto_principal,
            })
            .collect())
    }

    async fn list_plants(&self, filter: &SpeciesFilter) -> Result<Vec<PlantSummary>> {
        let rows: Vec<PlantRow> = sqlx::query_as(
            r#"
            SELECT
                p.id_planta,
                p.nombre_comun,
                p.nombre_cientifico,
                p.estado,
                (SELECT f.url_foto
                 FROM "FotoFlora" f
                 WHERE f.id_planta = p.id_planta
                 ORDER BY f.id_foto
                 LIMIT 1) AS foto_principal
            FROM "Flora" p
            WHERE ($1::text IS NULL
                   OR p.nombre_comun ILIKE '%' || $1 || '%'
                   OR p.nombre_cientifico ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR p.estado = $2)
              AND ($3::text IS NULL OR p.nombre_comun ILIKE $3 || '%')
            ORDER BY p.nombre_comun
            "#,
        )
        .bind(filter.q.as_deref())
        .bind(filter.estado.as_deref())
        .bind(filter.letra.as_deref())
        .fetch_all(self.pool())
        .await
        .map_err(|e| CatalogError::Unavailable(format!("plant listing failed: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| PlantSummary {
                id: r.id_planta,
                nombre_comun: r.nombre_comun,
                nombre_cientifico: r.nombre_cientifico,
                estado: r.estado,
                foto_principal: r.foto_principal,
            })
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(self.pool())
            .await
            .map_err(|e| CatalogError::Unavailable(format!("ping failed: {e}")))?;
        Ok(())
    }
}
