//! Repository for the `movies` table.

use sqlx::SqlitePool;
use reelbase_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, year, description";

/// Provides CRUD and natural-key operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// No duplicate check is made; callers that care use
    /// [`find_by_title_year`](Self::find_by_title_year) first. A clash on the
    /// `(title, year)` index surfaces as a unique-violation `sqlx::Error`.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, year, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.year)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies in insertion order with offset pagination.
    pub async fn list(
        pool: &SqlitePool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a movie. Only fields present in `input` are applied.
    ///
    /// `year` and `description` use `Option<Option<String>>` so a present
    /// `null` clears the column. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let year_provided = input.year.is_some();
        let year_value = input.year.as_ref().and_then(|v| v.as_deref());
        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE movies SET
                title       = COALESCE($2, title),
                year        = CASE WHEN $3 THEN $4 ELSE year END,
                description = CASE WHEN $5 THEN $6 ELSE description END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(year_provided)
            .bind(year_value)
            .bind(description_provided)
            .bind(description_value)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a movie by its natural key.
    ///
    /// With a non-empty `year` both columns must match. Without one, the
    /// lookup matches on title alone and returns the oldest row, which may
    /// be a different year than the caller had in mind.
    pub async fn find_by_title_year(
        pool: &SqlitePool,
        title: &str,
        year: Option<&str>,
    ) -> Result<Option<Movie>, sqlx::Error> {
        match year.filter(|y| !y.is_empty()) {
            Some(year) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movies \
                     WHERE title = $1 AND year = $2 \
                     ORDER BY id LIMIT 1"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(title)
                    .bind(year)
                    .fetch_optional(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM movies WHERE title = $1 ORDER BY id LIMIT 1");
                sqlx::query_as::<_, Movie>(&query)
                    .bind(title)
                    .fetch_optional(pool)
                    .await
            }
        }
    }

    /// Total number of movies.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }

    /// Return the movie with this natural key, inserting it if missing.
    ///
    /// An existing row is returned as-is, even when the new data is more
    /// complete; nothing is merged.
    pub async fn ensure(
        pool: &SqlitePool,
        title: &str,
        year: Option<&str>,
        description: Option<&str>,
    ) -> Result<Movie, sqlx::Error> {
        if let Some(existing) = Self::find_by_title_year(pool, title, year).await? {
            tracing::debug!(movie_id = existing.id, title, "Movie already present");
            return Ok(existing);
        }

        let input = CreateMovie {
            title: title.to_string(),
            year: year.map(str::to_string),
            description: description.map(str::to_string),
        };
        Self::create(pool, &input.normalized()).await
    }
}
