//! Repositories for the `{title, slug}` vocabularies and ratings.

use collections_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::term::{Rating, RatingInput, Term, TermInput};

/// Vocabulary tables sharing the `id, title, slug` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermTable {
    Genres,
    MediaTypes,
    WorkImageTypes,
}

impl TermTable {
    pub fn table_name(self) -> &'static str {
        match self {
            TermTable::Genres => "genres",
            TermTable::MediaTypes => "media_types",
            TermTable::WorkImageTypes => "work_image_types",
        }
    }
}

/// Lookup and write-through operations for a [`TermTable`].
pub struct TermRepo;

impl TermRepo {
    pub async fn find_by_slug<'e>(
        executor: impl PgExecutor<'e>,
        table: TermTable,
        slug: &str,
    ) -> Result<Option<Term>, sqlx::Error> {
        let query = format!(
            "SELECT id, title, slug FROM {} WHERE slug = $1",
            table.table_name()
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(slug)
            .fetch_optional(executor)
            .await
    }

    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        table: TermTable,
        id: DbId,
    ) -> Result<Option<Term>, sqlx::Error> {
        let query = format!(
            "SELECT id, title, slug FROM {} WHERE id = $1",
            table.table_name()
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Fetch several terms at once. Missing IDs are skipped.
    pub async fn list_by_ids<'e>(
        executor: impl PgExecutor<'e>,
        table: TermTable,
        ids: &[DbId],
    ) -> Result<Vec<Term>, sqlx::Error> {
        let query = format!(
            "SELECT id, title, slug FROM {} WHERE id = ANY($1)",
            table.table_name()
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(ids)
            .fetch_all(executor)
            .await
    }

    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        table: TermTable,
        slug: &str,
        input: &TermInput,
    ) -> Result<Term, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (slug, title) VALUES ($1, COALESCE($2, '')) RETURNING id, title, slug",
            table.table_name()
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(slug)
            .bind(&input.title)
            .fetch_one(executor)
            .await
    }

    /// Apply a new title when given. The slug is the lookup key.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        table: TermTable,
        id: DbId,
        input: &TermInput,
    ) -> Result<Option<Term>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET title = COALESCE($2, title) WHERE id = $1 RETURNING id, title, slug",
            table.table_name()
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(executor)
            .await
    }
}

/// Lookup and create operations for ratings.
///
/// Ratings are never updated through a nested payload, so there is no
/// `update`.
pub struct RatingRepo;

impl RatingRepo {
    pub async fn find_by_slug<'e>(
        executor: impl PgExecutor<'e>,
        slug: &str,
    ) -> Result<Option<Rating>, sqlx::Error> {
        sqlx::query_as::<_, Rating>("SELECT id, title, slug, image FROM ratings WHERE slug = $1")
            .bind(slug)
            .fetch_optional(executor)
            .await
    }

    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Rating>, sqlx::Error> {
        sqlx::query_as::<_, Rating>("SELECT id, title, slug, image FROM ratings WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        slug: &str,
        input: &RatingInput,
    ) -> Result<Rating, sqlx::Error> {
        sqlx::query_as::<_, Rating>(
            "INSERT INTO ratings (slug, title, image)
             VALUES ($1, COALESCE($2, ''), $3)
             RETURNING id, title, slug, image",
        )
        .bind(slug)
        .bind(&input.title)
        .bind(&input.image)
        .fetch_one(executor)
        .await
    }
}
