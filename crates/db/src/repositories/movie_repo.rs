//! Repository for the `movie` table.

use cinedex_core::concurrency::UpdateOutcome;
use cinedex_core::filter::MovieFilter;
use cinedex_core::types::{DbId, RowVersion};
use sqlx::PgPool;

use crate::models::movie::{Movie, MovieInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, price, release_date, rating, row_version";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &MovieInput) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, genre, price, release_date, rating) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.price)
            .bind(input.release_date)
            .bind(&input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies matching `filter`, ordered by title then id.
    ///
    /// The title filter is a case-insensitive substring match, the genre
    /// filter an exact match. Both are applied in SQL before any row is
    /// fetched.
    pub async fn list(pool: &PgPool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        if filter.matches_nothing() {
            return Ok(Vec::new());
        }

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        let title_pattern = filter.title_pattern();
        if title_pattern.is_some() {
            conditions.push(format!("title ILIKE ${bind_idx} ESCAPE '\\'"));
            bind_idx += 1;
        }
        if filter.genre().is_some() {
            conditions.push(format!("genre = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM movie {where_clause} ORDER BY title, id");

        let mut q = sqlx::query_as::<_, Movie>(&query);

        // Bind dynamic parameters in order.
        if let Some(pattern) = title_pattern {
            q = q.bind(pattern);
        }
        if let Some(genre) = filter.genre() {
            q = q.bind(genre.to_string());
        }

        q.fetch_all(pool).await
    }

    /// Distinct genre values across all movies, ascending in byte order.
    pub async fn list_genres(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT genre FROM movie ORDER BY genre COLLATE \"C\"",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a movie if its stored `row_version` still equals
    /// `expected_version`. A successful update bumps the version.
    ///
    /// When the guard rejects the write, an existence check distinguishes a
    /// deleted row from a concurrent modification.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        expected_version: RowVersion,
        input: &MovieInput,
    ) -> Result<UpdateOutcome<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET \
                title = $3, \
                genre = $4, \
                price = $5, \
                release_date = $6, \
                rating = $7, \
                row_version = row_version + 1 \
             WHERE id = $1 AND row_version = $2 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(expected_version)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.price)
            .bind(input.release_date)
            .bind(&input.rating)
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(movie) => Ok(UpdateOutcome::Updated(movie)),
            None if Self::exists(pool, id).await? => {
                tracing::debug!(movie_id = id, expected_version, "Movie row version mismatch");
                Ok(UpdateOutcome::ConflictStillPresent)
            }
            None => Ok(UpdateOutcome::ConflictGone),
        }
    }

    /// Whether a movie with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movie WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of movies in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movie")
            .fetch_one(pool)
            .await
    }
}
