//! Repository for the `roles` table.

use collections_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::role::{Role, RoleInput};

const COLUMNS: &str = "id, slug, title, title_plural, past_tense";

/// Provides lookup and write-through operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    pub async fn find_by_slug<'e>(
        executor: impl PgExecutor<'e>,
        slug: &str,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE slug = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(slug)
            .fetch_optional(executor)
            .await
    }

    /// Fetch several roles at once. Missing IDs are skipped.
    pub async fn list_by_ids<'e>(
        executor: impl PgExecutor<'e>,
        ids: &[DbId],
    ) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = ANY($1)");
        sqlx::query_as::<_, Role>(&query)
            .bind(ids)
            .fetch_all(executor)
            .await
    }

    /// Insert a role. `slug` is required by the caller.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        slug: &str,
        input: &RoleInput,
    ) -> Result<Role, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (slug, title, title_plural, past_tense)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.title_plural)
            .bind(&input.past_tense)
            .fetch_one(executor)
            .await
    }

    /// Apply non-`None` descriptive fields. The slug is the lookup key and
    /// is never changed here.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &RoleInput,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET
                title = COALESCE($2, title),
                title_plural = COALESCE($3, title_plural),
                past_tense = COALESCE($4, past_tense)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_plural)
            .bind(&input.past_tense)
            .fetch_optional(executor)
            .await
    }
}
