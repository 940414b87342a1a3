//! Repository for the `creators` table.

use collections_core::kinds::CreatorKind;
use collections_core::pagination::Page;
use collections_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::creator::{CreateCreator, Creator, DerivedNames, UpdateCreator};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, kind, publishing_is_draft, slug, alt_slug, name_full, name_display, \
    name_sort, website, wikipedia_link, start_date_display, start_date_edtf, end_date_display, \
    end_date_edtf, portrait_id, external_ref, admin_notes, dt_created, dt_modified";

fn kind_tags(kinds: &[CreatorKind]) -> Vec<String> {
    kinds.iter().map(|k| k.as_str().to_string()).collect()
}

/// Provides CRUD operations for creators of every kind.
pub struct CreatorRepo;

impl CreatorRepo {
    /// Insert a new creator of `kind`.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        kind: CreatorKind,
        names: &DerivedNames,
        portrait_id: Option<DbId>,
        input: &CreateCreator,
    ) -> Result<Creator, sqlx::Error> {
        let query = format!(
            "INSERT INTO creators (kind, slug, name_full, name_display, name_sort, portrait_id, \
                publishing_is_draft, alt_slug, website, wikipedia_link, start_date_display, \
                start_date_edtf, end_date_display, end_date_edtf, external_ref, admin_notes)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE), COALESCE($8, ''), \
                COALESCE($9, ''), COALESCE($10, ''), COALESCE($11, ''), COALESCE($12, ''), \
                COALESCE($13, ''), COALESCE($14, ''), COALESCE($15, ''), COALESCE($16, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Creator>(&query)
            .bind(kind.as_str())
            .bind(&names.slug)
            .bind(input.name_full.trim())
            .bind(&names.name_display)
            .bind(&names.name_sort)
            .bind(portrait_id)
            .bind(input.publishing_is_draft)
            .bind(&input.alt_slug)
            .bind(&input.website)
            .bind(&input.wikipedia_link)
            .bind(&input.start_date_display)
            .bind(&input.start_date_edtf)
            .bind(&input.end_date_display)
            .bind(&input.end_date_edtf)
            .bind(&input.external_ref)
            .bind(&input.admin_notes)
            .fetch_one(executor)
            .await
    }

    /// Find a creator by its internal ID, whatever its kind.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Creator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM creators WHERE id = $1");
        sqlx::query_as::<_, Creator>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a creator by ID, only if it is one of `kinds`.
    pub async fn find_by_id_of_kinds<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        kinds: &[CreatorKind],
    ) -> Result<Option<Creator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM creators WHERE id = $1 AND kind = ANY($2)");
        sqlx::query_as::<_, Creator>(&query)
            .bind(id)
            .bind(kind_tags(kinds))
            .fetch_optional(executor)
            .await
    }

    /// List creators of the given kinds, ordered by sort name then ID.
    pub async fn list<'e>(
        executor: impl PgExecutor<'e>,
        kinds: &[CreatorKind],
        page: Page,
    ) -> Result<Vec<Creator>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM creators
             WHERE kind = ANY($1)
             ORDER BY name_sort ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Creator>(&query)
            .bind(kind_tags(kinds))
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(executor)
            .await
    }

    /// Fetch several creators at once. Missing IDs are skipped.
    pub async fn list_by_ids<'e>(
        executor: impl PgExecutor<'e>,
        ids: &[DbId],
    ) -> Result<Vec<Creator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM creators WHERE id = ANY($1)");
        sqlx::query_as::<_, Creator>(&query)
            .bind(ids)
            .fetch_all(executor)
            .await
    }

    /// Update a creator. Only non-`None` fields are applied; `portrait_id`
    /// replaces the portrait only when `Some`.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        portrait_id: Option<DbId>,
        input: &UpdateCreator,
    ) -> Result<Option<Creator>, sqlx::Error> {
        let query = format!(
            "UPDATE creators SET
                name_full = COALESCE($2, name_full),
                slug = COALESCE($3, slug),
                alt_slug = COALESCE($4, alt_slug),
                name_display = COALESCE($5, name_display),
                name_sort = COALESCE($6, name_sort),
                publishing_is_draft = COALESCE($7, publishing_is_draft),
                website = COALESCE($8, website),
                wikipedia_link = COALESCE($9, wikipedia_link),
                start_date_display = COALESCE($10, start_date_display),
                start_date_edtf = COALESCE($11, start_date_edtf),
                end_date_display = COALESCE($12, end_date_display),
                end_date_edtf = COALESCE($13, end_date_edtf),
                external_ref = COALESCE($14, external_ref),
                admin_notes = COALESCE($15, admin_notes),
                portrait_id = COALESCE($16, portrait_id),
                dt_modified = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Creator>(&query)
            .bind(id)
            .bind(&input.name_full)
            .bind(&input.slug)
            .bind(&input.alt_slug)
            .bind(&input.name_display)
            .bind(&input.name_sort)
            .bind(input.publishing_is_draft)
            .bind(&input.website)
            .bind(&input.wikipedia_link)
            .bind(&input.start_date_display)
            .bind(&input.start_date_edtf)
            .bind(&input.end_date_display)
            .bind(&input.end_date_edtf)
            .bind(&input.external_ref)
            .bind(&input.admin_notes)
            .bind(portrait_id)
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete a creator by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM creators WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
