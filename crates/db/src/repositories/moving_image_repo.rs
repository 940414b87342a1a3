//! Repository for the `moving_image_works` extension table and its genres.

use collections_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::moving_image::{MovingImageDetails, MovingImageFields};
use crate::models::term::Term;

const COLUMNS: &str = "work_id, rating_id, rating_annotation, duration_minutes, trailer, \
    imdb_link, media_type_id";

/// Provides access to moving-image extension rows.
pub struct MovingImageRepo;

impl MovingImageRepo {
    /// Insert the extension row for `work_id`. Related IDs are already
    /// resolved by the caller.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        work_id: DbId,
        fields: &MovingImageFields,
        rating_id: Option<DbId>,
        media_type_id: Option<DbId>,
    ) -> Result<MovingImageDetails, sqlx::Error> {
        let query = format!(
            "INSERT INTO moving_image_works (work_id, rating_id, rating_annotation, \
                duration_minutes, trailer, imdb_link, media_type_id)
             VALUES ($1, $2, COALESCE($3, ''), $4, COALESCE($5, ''), COALESCE($6, ''), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovingImageDetails>(&query)
            .bind(work_id)
            .bind(rating_id)
            .bind(&fields.rating_annotation)
            .bind(fields.duration_minutes)
            .bind(&fields.trailer)
            .bind(&fields.imdb_link)
            .bind(media_type_id)
            .fetch_one(executor)
            .await
    }

    pub async fn find<'e>(
        executor: impl PgExecutor<'e>,
        work_id: DbId,
    ) -> Result<Option<MovingImageDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM moving_image_works WHERE work_id = $1");
        sqlx::query_as::<_, MovingImageDetails>(&query)
            .bind(work_id)
            .fetch_optional(executor)
            .await
    }

    /// Apply non-`None` fields. `rating_id` / `media_type_id` replace the
    /// current reference only when `Some`.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        work_id: DbId,
        fields: &MovingImageFields,
        rating_id: Option<DbId>,
        media_type_id: Option<DbId>,
    ) -> Result<Option<MovingImageDetails>, sqlx::Error> {
        let query = format!(
            "UPDATE moving_image_works SET
                rating_id = COALESCE($2, rating_id),
                rating_annotation = COALESCE($3, rating_annotation),
                duration_minutes = COALESCE($4, duration_minutes),
                trailer = COALESCE($5, trailer),
                imdb_link = COALESCE($6, imdb_link),
                media_type_id = COALESCE($7, media_type_id)
             WHERE work_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovingImageDetails>(&query)
            .bind(work_id)
            .bind(rating_id)
            .bind(&fields.rating_annotation)
            .bind(fields.duration_minutes)
            .bind(&fields.trailer)
            .bind(&fields.imdb_link)
            .bind(media_type_id)
            .fetch_optional(executor)
            .await
    }

    /// Genres of a moving-image work, ordered by title.
    pub async fn list_genres<'e>(
        executor: impl PgExecutor<'e>,
        work_id: DbId,
    ) -> Result<Vec<Term>, sqlx::Error> {
        sqlx::query_as::<_, Term>(
            "SELECT g.id, g.title, g.slug
             FROM genres g
             JOIN moving_image_work_genres mg ON mg.genre_id = g.id
             WHERE mg.work_id = $1
             ORDER BY g.title ASC, g.id ASC",
        )
        .bind(work_id)
        .fetch_all(executor)
        .await
    }
}
