//! Repository for the `works` table.

use collections_core::kinds::WorkKind;
use collections_core::pagination::Page;
use collections_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::work::{CreateWork, UpdateWork, Work};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, kind, publishing_is_draft, slug, title, subtitle, oneliner, \
    department, credit_line, accession_number, creation_date_display, creation_date_edtf, \
    external_ref, admin_notes, dt_created, dt_modified";

fn kind_tags(kinds: &[WorkKind]) -> Vec<String> {
    kinds.iter().map(|k| k.as_str().to_string()).collect()
}

/// Provides CRUD operations for works of every kind.
pub struct WorkRepo;

impl WorkRepo {
    /// Insert a new work of `kind`. `slug` is the already-derived slug.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        kind: WorkKind,
        slug: &str,
        input: &CreateWork,
    ) -> Result<Work, sqlx::Error> {
        let query = format!(
            "INSERT INTO works (kind, slug, title, publishing_is_draft, subtitle, oneliner, \
                department, credit_line, accession_number, creation_date_display, \
                creation_date_edtf, external_ref, admin_notes)
             VALUES ($1, $2, $3, COALESCE($4, TRUE), COALESCE($5, ''), COALESCE($6, ''), \
                COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, ''), COALESCE($10, ''), \
                COALESCE($11, ''), COALESCE($12, ''), COALESCE($13, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(kind.as_str())
            .bind(slug)
            .bind(&input.title)
            .bind(input.publishing_is_draft)
            .bind(&input.subtitle)
            .bind(&input.oneliner)
            .bind(&input.department)
            .bind(&input.credit_line)
            .bind(&input.accession_number)
            .bind(&input.creation_date_display)
            .bind(&input.creation_date_edtf)
            .bind(&input.external_ref)
            .bind(&input.admin_notes)
            .fetch_one(executor)
            .await
    }

    /// Find a work by its internal ID, whatever its kind.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE id = $1");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a work by ID, only if it is one of `kinds`.
    pub async fn find_by_id_of_kinds<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        kinds: &[WorkKind],
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE id = $1 AND kind = ANY($2)");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(kind_tags(kinds))
            .fetch_optional(executor)
            .await
    }

    /// List works of the given kinds, ordered by title then ID.
    pub async fn list<'e>(
        executor: impl PgExecutor<'e>,
        kinds: &[WorkKind],
        page: Page,
    ) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM works
             WHERE kind = ANY($1)
             ORDER BY title ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(kind_tags(kinds))
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(executor)
            .await
    }

    /// Fetch several works at once. Missing IDs are skipped.
    pub async fn list_by_ids<'e>(
        executor: impl PgExecutor<'e>,
        ids: &[DbId],
    ) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE id = ANY($1)");
        sqlx::query_as::<_, Work>(&query)
            .bind(ids)
            .fetch_all(executor)
            .await
    }

    /// Update a work. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateWork,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!(
            "UPDATE works SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                publishing_is_draft = COALESCE($4, publishing_is_draft),
                subtitle = COALESCE($5, subtitle),
                oneliner = COALESCE($6, oneliner),
                department = COALESCE($7, department),
                credit_line = COALESCE($8, credit_line),
                accession_number = COALESCE($9, accession_number),
                creation_date_display = COALESCE($10, creation_date_display),
                creation_date_edtf = COALESCE($11, creation_date_edtf),
                external_ref = COALESCE($12, external_ref),
                admin_notes = COALESCE($13, admin_notes),
                dt_modified = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(input.publishing_is_draft)
            .bind(&input.subtitle)
            .bind(&input.oneliner)
            .bind(&input.department)
            .bind(&input.credit_line)
            .bind(&input.accession_number)
            .bind(&input.creation_date_display)
            .bind(&input.creation_date_edtf)
            .bind(&input.external_ref)
            .bind(&input.admin_notes)
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete a work by ID. Returns `true` if a row was removed.
    ///
    /// Work-creator, image and origin rows cascade.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
