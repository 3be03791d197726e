//! Data accessor: the only component that talks to the `pets` table.

use crate::error::StoreError;
use crate::models::{NewPet, Pet, PetFilter, PetPatch};
use async_trait::async_trait;
use sqlx::PgPool;

/// Row-level access to stored pets. Each call is a single statement against the store.
#[async_trait]
pub trait PetStore: Send + Sync {
    /// Insert a pet; the store assigns its id.
    async fn create(&self, pet: &NewPet) -> Result<Pet, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Pet, StoreError>;

    /// Pets matching `filter`, ordered by id. An empty result is not an error.
    async fn list(&self, filter: &PetFilter) -> Result<Vec<Pet>, StoreError>;

    /// Replace every mutable field of pet `id`.
    async fn update(&self, id: i64, pet: &NewPet) -> Result<Pet, StoreError>;

    /// Change only the fields present in `patch`.
    async fn patch(&self, id: i64, patch: &PetPatch) -> Result<Pet, StoreError>;

    /// Remove pet `id`. Deleting an absent pet is `NotFound`, also on a repeated delete.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Round trip to the store, used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(sqlx::FromRow)]
struct PetRow {
    id: i64,
    name: String,
    tag: Option<String>,
    status: Option<String>,
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        Pet {
            id: row.id,
            name: row.name,
            tag: row.tag,
            // The column CHECK only admits known statuses.
            status: row.status.and_then(|s| s.parse().ok()),
        }
    }
}

const COLUMNS: &str = "id, name, tag, status";

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgPetStore {
    pool: PgPool,
}

impl PgPetStore {
    pub fn new(pool: PgPool) -> Self {
        PgPetStore { pool }
    }
}

#[async_trait]
impl PetStore for PgPetStore {
    async fn create(&self, pet: &NewPet) -> Result<Pet, StoreError> {
        let sql = format!(
            "INSERT INTO pets (name, tag, status) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, name = %pet.name, tag = ?pet.tag, status = ?pet.status, "query");
        let row = sqlx::query_as::<_, PetRow>(&sql)
            .bind(&pet.name)
            .bind(&pet.tag)
            .bind(pet.status.map(|s| s.as_str()))
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn get_by_id(&self, id: i64) -> Result<Pet, StoreError> {
        let sql = format!("SELECT {} FROM pets WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, PetRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Pet::from)
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, filter: &PetFilter) -> Result<Vec<Pet>, StoreError> {
        let sql = format!(
            "SELECT {} FROM pets \
             WHERE ($1::text[] IS NULL OR tag = ANY($1)) AND ($2::text IS NULL OR status = $2) \
             ORDER BY id LIMIT $3 OFFSET $4",
            COLUMNS
        );
        tracing::debug!(sql = %sql, filter = ?filter, "query");
        let rows = sqlx::query_as::<_, PetRow>(&sql)
            .bind(&filter.tags)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(i64::from(filter.limit))
            .bind(i64::from(filter.offset))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Pet::from).collect())
    }

    async fn update(&self, id: i64, pet: &NewPet) -> Result<Pet, StoreError> {
        let sql = format!(
            "UPDATE pets SET name = $2, tag = $3, status = $4 WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, name = %pet.name, tag = ?pet.tag, status = ?pet.status, "query");
        sqlx::query_as::<_, PetRow>(&sql)
            .bind(id)
            .bind(&pet.name)
            .bind(&pet.tag)
            .bind(pet.status.map(|s| s.as_str()))
            .fetch_optional(&self.pool)
            .await?
            .map(Pet::from)
            .ok_or(StoreError::NotFound(id))
    }

    async fn patch(&self, id: i64, patch: &PetPatch) -> Result<Pet, StoreError> {
        let sql = format!(
            "UPDATE pets SET \
             name = COALESCE($2, name), \
             tag = CASE WHEN $3 THEN $4 ELSE tag END, \
             status = CASE WHEN $5 THEN $6 ELSE status END \
             WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, patch = ?patch, "query");
        sqlx::query_as::<_, PetRow>(&sql)
            .bind(id)
            .bind(&patch.name)
            .bind(patch.tag.is_some())
            .bind(patch.tag.clone().flatten())
            .bind(patch.status.is_some())
            .bind(patch.status.flatten().map(|s| s.as_str()))
            .fetch_optional(&self.pool)
            .await?
            .map(Pet::from)
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let sql = "DELETE FROM pets WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
