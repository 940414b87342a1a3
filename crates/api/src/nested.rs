//! Writing through nested related objects.
//!
//! Each function looks up the existing row named by the nested payload,
//! asks [`plan_nested_write`] what to do with it, and carries that out on
//! the request's connection (normally inside its transaction).

use collections_core::error::CoreError;
use collections_core::naming;
use collections_core::nested::{plan_nested_write, NestedAction, WritableRelatedField};
use collections_core::types::DbId;
use collections_db::models::creator::{Creator, CreatorRef};
use collections_db::models::image::{Image, ImageInput};
use collections_db::models::role::{Role, RoleInput};
use collections_db::models::term::{Rating, RatingInput, Term, TermInput};
use collections_db::models::work::{UpdateWork, Work, WorkRef};
use collections_db::repositories::{
    CreatorRepo, ImageRepo, RatingRepo, RoleRepo, TermRepo, TermTable, WorkRepo,
};
use sqlx::PgConnection;

use crate::error::AppResult;
use crate::state::AppState;

/// `work` on a work-creator.
pub const WORK_FIELD: WritableRelatedField = WritableRelatedField::DEFAULT;
/// `creator` on a work-creator.
pub const CREATOR_FIELD: WritableRelatedField = WritableRelatedField::DEFAULT;
/// `role` on a work-creator.
pub const ROLE_FIELD: WritableRelatedField = WritableRelatedField::DEFAULT.lookup("slug").creatable();
/// `portrait` on a creator.
pub const PORTRAIT_FIELD: WritableRelatedField = WritableRelatedField::DEFAULT.creatable();
/// `image` on a work image.
pub const WORK_IMAGE_FIELD: WritableRelatedField = WritableRelatedField::DEFAULT;
/// `image_type` on a work image.
pub const IMAGE_TYPE_FIELD: WritableRelatedField = WritableRelatedField::DEFAULT.lookup("slug");
/// `rating` on a moving-image work.
pub const RATING_FIELD: WritableRelatedField = WritableRelatedField::slug_vocabulary();
/// `media_type` on a moving-image work.
pub const MEDIA_TYPE_FIELD: WritableRelatedField = WritableRelatedField::slug_vocabulary();

fn matched<T>(existing: Option<T>, entity: &'static str, id: DbId) -> AppResult<T> {
    existing.ok_or_else(|| CoreError::NotFound { entity, id }.into())
}

fn not_creatable(field: &str) -> CoreError {
    CoreError::Validation(format!("{field}: cannot be created here"))
}

/// Non-blank, trimmed slug from a nested payload.
fn lookup_slug(slug: Option<&str>) -> Option<&str> {
    slug.map(str::trim).filter(|s| !s.is_empty())
}

/// Resolve a nested work reference by `url` or `id`, writing through the
/// creation date fields when given.
pub async fn write_work_ref(
    state: &AppState,
    conn: &mut PgConnection,
    field: &str,
    input: &WorkRef,
) -> AppResult<Work> {
    let (settings, lookup, existing) = match (&input.url, input.id) {
        (Some(url), _) => (
            WORK_FIELD.lookup("url"),
            Some(url.clone()),
            state
                .works
                .find_any(&state.pool, state.links.routes(), url)
                .await?,
        ),
        (None, Some(id)) => (
            WORK_FIELD,
            Some(id.to_string()),
            WorkRepo::find_by_id(&mut *conn, id).await?,
        ),
        (None, None) => (WORK_FIELD, None, None),
    };

    let action = plan_nested_write(
        field,
        &settings,
        lookup.as_deref(),
        existing.as_ref().map(|w| w.id),
    )?;

    match action {
        NestedAction::UpdateExisting(id) if input.has_writable_fields() => {
            let patch = UpdateWork {
                creation_date_display: input.creation_date_display.clone(),
                creation_date_edtf: input.creation_date_edtf.clone(),
                ..Default::default()
            };
            let updated = WorkRepo::update(&mut *conn, id, &patch).await?;
            matched(updated, "Work", id)
        }
        NestedAction::UpdateExisting(id) | NestedAction::UseExisting(id) => {
            matched(existing, "Work", id)
        }
        NestedAction::Create => Err(not_creatable(field).into()),
    }
}

/// Resolve a nested creator reference by `url` or `id`. Creators are
/// never modified through a reference.
pub async fn write_creator_ref(
    state: &AppState,
    conn: &mut PgConnection,
    field: &str,
    input: &CreatorRef,
) -> AppResult<Creator> {
    let (settings, lookup, existing) = match (&input.url, input.id) {
        (Some(url), _) => (
            CREATOR_FIELD.lookup("url"),
            Some(url.clone()),
            state
                .creators
                .find_any(&state.pool, state.links.routes(), url)
                .await?,
        ),
        (None, Some(id)) => (
            CREATOR_FIELD,
            Some(id.to_string()),
            CreatorRepo::find_by_id(&mut *conn, id).await?,
        ),
        (None, None) => (CREATOR_FIELD, None, None),
    };

    let action = plan_nested_write(
        field,
        &settings,
        lookup.as_deref(),
        existing.as_ref().map(|c| c.id),
    )?;

    match action {
        NestedAction::UpdateExisting(id) | NestedAction::UseExisting(id) => {
            matched(existing, "Creator", id)
        }
        NestedAction::Create => Err(not_creatable(field).into()),
    }
}

/// Match a role by slug, updating its titles, or create it.
pub async fn write_role(conn: &mut PgConnection, field: &str, input: &RoleInput) -> AppResult<Role> {
    let slug = lookup_slug(input.slug.as_deref());
    let existing = match slug {
        Some(slug) => RoleRepo::find_by_slug(&mut *conn, slug).await?,
        None => None,
    };

    match plan_nested_write(field, &ROLE_FIELD, slug, existing.as_ref().map(|r| r.id))? {
        NestedAction::UpdateExisting(id) => {
            let updated = RoleRepo::update(&mut *conn, id, input).await?;
            matched(updated, "Role", id)
        }
        NestedAction::UseExisting(id) => matched(existing, "Role", id),
        NestedAction::Create => {
            let slug = derived_slug(field, slug, input.title.as_deref())?;
            Ok(RoleRepo::create(&mut *conn, &slug, input).await?)
        }
    }
}

/// Match an image by id, updating it, or create it when `settings` allow.
pub async fn write_image(
    conn: &mut PgConnection,
    field: &str,
    settings: &WritableRelatedField,
    input: &ImageInput,
) -> AppResult<Image> {
    let existing = match input.id {
        Some(id) => ImageRepo::find_by_id(&mut *conn, id).await?,
        None => None,
    };
    let lookup = input.id.map(|id| id.to_string());

    match plan_nested_write(field, settings, lookup.as_deref(), existing.as_ref().map(|i| i.id))? {
        NestedAction::UpdateExisting(id) => {
            let updated = ImageRepo::update(&mut *conn, id, input).await?;
            matched(updated, "Image", id)
        }
        NestedAction::UseExisting(id) => matched(existing, "Image", id),
        NestedAction::Create => {
            let path = input
                .image
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .ok_or_else(|| CoreError::Validation(format!("{field}: image is required")))?;
            Ok(ImageRepo::create(&mut *conn, path, input).await?)
        }
    }
}

/// Match a vocabulary term in `table` by slug, or create it when
/// `settings` allow.
pub async fn write_term(
    conn: &mut PgConnection,
    table: TermTable,
    field: &str,
    settings: &WritableRelatedField,
    input: &TermInput,
) -> AppResult<Term> {
    let slug = lookup_slug(input.slug.as_deref());
    let existing = match slug {
        Some(slug) => TermRepo::find_by_slug(&mut *conn, table, slug).await?,
        None => None,
    };

    match plan_nested_write(field, settings, slug, existing.as_ref().map(|t| t.id))? {
        NestedAction::UpdateExisting(id) => {
            let updated = TermRepo::update(&mut *conn, table, id, input).await?;
            matched(updated, "Term", id)
        }
        NestedAction::UseExisting(id) => matched(existing, "Term", id),
        NestedAction::Create => {
            let slug = derived_slug(field, slug, input.title.as_deref())?;
            Ok(TermRepo::create(&mut *conn, table, &slug, input).await?)
        }
    }
}

/// Match a rating by slug, or create it.
pub async fn write_rating(
    conn: &mut PgConnection,
    field: &str,
    input: &RatingInput,
) -> AppResult<Rating> {
    let slug = lookup_slug(input.slug.as_deref());
    let existing = match slug {
        Some(slug) => RatingRepo::find_by_slug(&mut *conn, slug).await?,
        None => None,
    };

    match plan_nested_write(field, &RATING_FIELD, slug, existing.as_ref().map(|r| r.id))? {
        // Ratings have no update path.
        NestedAction::UpdateExisting(id) | NestedAction::UseExisting(id) => {
            matched(existing, "Rating", id)
        }
        NestedAction::Create => {
            let slug = derived_slug(field, slug, input.title.as_deref())?;
            Ok(RatingRepo::create(&mut *conn, &slug, input).await?)
        }
    }
}

/// The given slug, else one derived from `title`.
fn derived_slug(field: &str, slug: Option<&str>, title: Option<&str>) -> AppResult<String> {
    naming::slug_or_derive(slug, title.unwrap_or_default()).ok_or_else(|| {
        CoreError::Validation(format!("{field}: slug or title is required")).into()
    })
}
