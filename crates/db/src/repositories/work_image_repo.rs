//! Repository for the `work_images` table.

use collections_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::work_image::{CreateWorkImage, UpdateWorkImage, WorkImage};

const COLUMNS: &str = r#"id, work_id, image_id, type_id, show_title, show_caption, title_override, caption_override, "order""#;

/// Provides CRUD operations for images attached to works.
pub struct WorkImageRepo;

impl WorkImageRepo {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        work_id: DbId,
        image_id: DbId,
        type_id: Option<DbId>,
        input: &CreateWorkImage,
    ) -> Result<WorkImage, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO work_images (work_id, image_id, type_id, show_title, show_caption,
                   title_override, caption_override, "order")
               VALUES ($1, $2, $3, COALESCE($4, FALSE), COALESCE($5, TRUE), COALESCE($6, ''),
                   COALESCE($7, ''), COALESCE($8, 0))
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, WorkImage>(&query)
            .bind(work_id)
            .bind(image_id)
            .bind(type_id)
            .bind(input.show_title)
            .bind(input.show_caption)
            .bind(&input.title_override)
            .bind(&input.caption_override)
            .bind(input.order)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<WorkImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_images WHERE id = $1");
        sqlx::query_as::<_, WorkImage>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Images of one work, ordered by `order`.
    pub async fn list_by_work<'e>(
        executor: impl PgExecutor<'e>,
        work_id: DbId,
    ) -> Result<Vec<WorkImage>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM work_images
               WHERE work_id = $1
               ORDER BY "order" ASC, id ASC"#
        );
        sqlx::query_as::<_, WorkImage>(&query)
            .bind(work_id)
            .fetch_all(executor)
            .await
    }

    /// Apply non-`None` fields; `image_id` / `type_id` replace the current
    /// reference only when `Some`.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        image_id: Option<DbId>,
        type_id: Option<DbId>,
        input: &UpdateWorkImage,
    ) -> Result<Option<WorkImage>, sqlx::Error> {
        let query = format!(
            r#"UPDATE work_images SET
                image_id = COALESCE($2, image_id),
                type_id = COALESCE($3, type_id),
                show_title = COALESCE($4, show_title),
                show_caption = COALESCE($5, show_caption),
                title_override = COALESCE($6, title_override),
                caption_override = COALESCE($7, caption_override),
                "order" = COALESCE($8, "order")
               WHERE id = $1
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, WorkImage>(&query)
            .bind(id)
            .bind(image_id)
            .bind(type_id)
            .bind(input.show_title)
            .bind(input.show_caption)
            .bind(&input.title_override)
            .bind(&input.caption_override)
            .bind(input.order)
            .fetch_optional(executor)
            .await
    }

    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_images WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
