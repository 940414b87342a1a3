//! Repository for the `work_creators` table.

use collections_core::pagination::Page;
use collections_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::work_creator::{WorkCreator, WorkCreatorColumns, WorkCreatorFilter};

const COLUMNS: &str = r#"id, work_id, creator_id, role_id, is_primary, "order""#;

/// Provides CRUD operations for work-creator relationships.
pub struct WorkCreatorRepo;

impl WorkCreatorRepo {
    /// Insert a relationship. `work_id` and `creator_id` must be set.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        work_id: DbId,
        creator_id: DbId,
        columns: &WorkCreatorColumns,
    ) -> Result<WorkCreator, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO work_creators (work_id, creator_id, role_id, is_primary, "order")
               VALUES ($1, $2, $3, COALESCE($4, TRUE), COALESCE($5, 0))
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, WorkCreator>(&query)
            .bind(work_id)
            .bind(creator_id)
            .bind(columns.role_id)
            .bind(columns.is_primary)
            .bind(columns.order)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<WorkCreator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_creators WHERE id = $1");
        sqlx::query_as::<_, WorkCreator>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List relationships, optionally narrowed to one work and/or creator.
    pub async fn list<'e>(
        executor: impl PgExecutor<'e>,
        filter: &WorkCreatorFilter,
        page: Page,
    ) -> Result<Vec<WorkCreator>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM work_creators
               WHERE ($1::BIGINT IS NULL OR work_id = $1)
                 AND ($2::BIGINT IS NULL OR creator_id = $2)
               ORDER BY work_id ASC, "order" ASC, id ASC
               LIMIT $3 OFFSET $4"#
        );
        sqlx::query_as::<_, WorkCreator>(&query)
            .bind(filter.work)
            .bind(filter.creator)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(executor)
            .await
    }

    /// Creators of one work, in credit order.
    pub async fn list_by_work<'e>(
        executor: impl PgExecutor<'e>,
        work_id: DbId,
    ) -> Result<Vec<WorkCreator>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM work_creators
               WHERE work_id = $1
               ORDER BY "order" ASC, id ASC"#
        );
        sqlx::query_as::<_, WorkCreator>(&query)
            .bind(work_id)
            .fetch_all(executor)
            .await
    }

    /// Works of one creator, in credit order.
    pub async fn list_by_creator<'e>(
        executor: impl PgExecutor<'e>,
        creator_id: DbId,
    ) -> Result<Vec<WorkCreator>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM work_creators
               WHERE creator_id = $1
               ORDER BY "order" ASC, id ASC"#
        );
        sqlx::query_as::<_, WorkCreator>(&query)
            .bind(creator_id)
            .fetch_all(executor)
            .await
    }

    /// Apply the non-`None` columns, and `role_id` as given when
    /// `set_role` is true. Returns `None` if the row is missing.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        columns: &WorkCreatorColumns,
    ) -> Result<Option<WorkCreator>, sqlx::Error> {
        let query = format!(
            r#"UPDATE work_creators SET
                work_id = COALESCE($2, work_id),
                creator_id = COALESCE($3, creator_id),
                role_id = CASE WHEN $7 THEN $4 ELSE role_id END,
                is_primary = COALESCE($5, is_primary),
                "order" = COALESCE($6, "order")
               WHERE id = $1
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, WorkCreator>(&query)
            .bind(id)
            .bind(columns.work_id)
            .bind(columns.creator_id)
            .bind(columns.role_id)
            .bind(columns.is_primary)
            .bind(columns.order)
            .bind(columns.set_role)
            .fetch_optional(executor)
            .await
    }

    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_creators WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
