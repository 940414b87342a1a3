//! Repository for the `images` table.

use collections_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::image::{Image, ImageInput};

const COLUMNS: &str = "id, image, width, height, title, alt_text, caption, credit";

/// Provides lookup and write-through operations for images.
pub struct ImageRepo;

impl ImageRepo {
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Fetch several images at once. Missing IDs are skipped.
    pub async fn list_by_ids<'e>(
        executor: impl PgExecutor<'e>,
        ids: &[DbId],
    ) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = ANY($1)");
        sqlx::query_as::<_, Image>(&query)
            .bind(ids)
            .fetch_all(executor)
            .await
    }

    /// Insert an image. `image` is the required file path.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        image: &str,
        input: &ImageInput,
    ) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (image, width, height, title, alt_text, caption, credit)
             VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''), \
                COALESCE($7, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(image)
            .bind(input.width)
            .bind(input.height)
            .bind(&input.title)
            .bind(&input.alt_text)
            .bind(&input.caption)
            .bind(&input.credit)
            .fetch_one(executor)
            .await
    }

    /// Apply non-`None` fields of `input` to an existing image.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &ImageInput,
    ) -> Result<Option<Image>, sqlx::Error> {
        let query = format!(
            "UPDATE images SET
                image = COALESCE($2, image),
                width = COALESCE($3, width),
                height = COALESCE($4, height),
                title = COALESCE($5, title),
                alt_text = COALESCE($6, alt_text),
                caption = COALESCE($7, caption),
                credit = COALESCE($8, credit)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .bind(&input.image)
            .bind(input.width)
            .bind(input.height)
            .bind(&input.title)
            .bind(&input.alt_text)
            .bind(&input.caption)
            .bind(&input.credit)
            .fetch_optional(executor)
            .await
    }
}
