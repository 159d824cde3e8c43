//! Repository for the `actor` table.

use cinedex_core::concurrency::UpdateOutcome;
use cinedex_core::types::{DbId, RowVersion};
use sqlx::PgPool;

use crate::models::actor::{Actor, ActorInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, age, born_date, row_version";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &ActorInput) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actor (first_name, last_name, age, born_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.age)
            .bind(input.born_date)
            .fetch_one(pool)
            .await
    }

    /// Find an actor by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actor WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all actors ordered by last name, first name, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actor ORDER BY last_name, first_name, id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// Version-guarded update. See [`crate::repositories::MovieRepo::update`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        expected_version: RowVersion,
        input: &ActorInput,
    ) -> Result<UpdateOutcome<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actor SET \
                first_name = $3, \
                last_name = $4, \
                age = $5, \
                born_date = $6, \
                row_version = row_version + 1 \
             WHERE id = $1 AND row_version = $2 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(expected_version)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.age)
            .bind(input.born_date)
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(actor) => Ok(UpdateOutcome::Updated(actor)),
            None if Self::exists(pool, id).await? => {
                tracing::debug!(actor_id = id, expected_version, "Actor row version mismatch");
                Ok(UpdateOutcome::ConflictStillPresent)
            }
            None => Ok(UpdateOutcome::ConflictGone),
        }
    }

    /// Whether an actor with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM actor WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete an actor by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actor WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
