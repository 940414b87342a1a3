//! Integration tests for the work families: `/works`, `/films`, `/games`,
//! `/moving-image-works`, `/artworks`, and work images.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, BASE_URL};
use serde_json::json;
use sqlx::PgPool;

async fn create(pool: &PgPool, path: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(common::build_test_app(pool.clone()), path, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_film_derives_slug_and_writes_moving_image_fields(pool: PgPool) {
    let film = create(
        &pool,
        "/api/v1/films",
        json!({
            "title": "The Third Man",
            "creation_date_display": "1949",
            "rating": {"slug": "pg", "title": "PG"},
            "media_type": {"slug": "35mm"},
            "duration_minutes": 104,
            "imdb_link": "https://www.imdb.com/title/tt0041959/"
        }),
    )
    .await;

    let id = film["id"].as_i64().unwrap();
    assert_eq!(film["slug"], "the-third-man");
    assert_eq!(film["url"], format!("{BASE_URL}/api/v1/films/{id}"));
    assert_eq!(film["rating"]["slug"], "pg");
    assert_eq!(film["rating"]["title"], "PG");
    assert_eq!(film["media_type"]["slug"], "35mm");
    assert_eq!(film["duration_minutes"], 104);
    assert_eq!(film["genres"], json!([]));
    assert_eq!(film["creators"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rating_slug_reuses_existing_row_without_updating_it(pool: PgPool) {
    create(
        &pool,
        "/api/v1/films",
        json!({"title": "First", "rating": {"slug": "pg", "title": "PG"}}),
    )
    .await;
    let second = create(
        &pool,
        "/api/v1/games",
        json!({"title": "Second", "rating": {"slug": "pg", "title": "Renamed"}}),
    )
    .await;

    assert_eq!(second["rating"]["title"], "PG");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn subtype_route_only_serves_its_kind(pool: PgPool) {
    let game = create(&pool, "/api/v1/games", json!({"title": "Tetris"})).await;
    let id = game["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/films/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/moving-image-works/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/works/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["url"], format!("{BASE_URL}/api/v1/works/{id}"));
    assert!(json["data"].get("rating").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_family_and_applies_field_selection(pool: PgPool) {
    create(&pool, "/api/v1/films", json!({"title": "Alpha"})).await;
    create(&pool, "/api/v1/artworks", json!({"title": "Beta"})).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/artworks?fields=title,slug").await).await;
    assert_eq!(json["data"], json!([{"title": "Beta", "slug": "beta"}]));

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/works").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn field_exclusion_drops_named_keys(pool: PgPool) {
    let artwork = create(&pool, "/api/v1/artworks", json!({"title": "Gamma"})).await;
    let id = artwork["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/artworks/{id}?fields!=creators,images,origin")).await).await;

    assert!(json["data"].get("creators").is_none());
    assert!(json["data"].get("images").is_none());
    assert_eq!(json["data"]["title"], "Gamma");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_slug_is_a_conflict(pool: PgPool) {
    create(&pool, "/api/v1/artworks", json!({"title": "Same"})).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/artworks", json!({"title": "Same"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_title_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/artworks", json!({"title": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn works_collection_does_not_accept_posts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/works", json!({"title": "Nope"})).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_moving_image_work_updates_both_tables(pool: PgPool) {
    let film = create(&pool, "/api/v1/films", json!({"title": "Rope"})).await;
    let id = film["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/films/{id}"),
        json!({"subtitle": "A thriller", "duration_minutes": 80, "rating": {"slug": "m"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Rope");
    assert_eq!(json["data"]["subtitle"], "A thriller");
    assert_eq!(json["data"]["duration_minutes"], 80);
    assert_eq!(json["data"]["rating"]["slug"], "m");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_the_work(pool: PgPool) {
    let artwork = create(&pool, "/api/v1/artworks", json!({"title": "Gone"})).await;
    let id = artwork["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/artworks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/works/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn work_images_attach_existing_image_and_type(pool: PgPool) {
    let artwork = create(&pool, "/api/v1/artworks", json!({"title": "Framed"})).await;
    let work_id = artwork["id"].as_i64().unwrap();
    let image_id: i64 = sqlx::query_scalar("INSERT INTO images (image) VALUES ('a.jpg') RETURNING id")
        .fetch_one(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO work_image_types (slug, title) VALUES ('hero', 'Hero')")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/works/{work_id}/images"),
        json!({"image": {"id": image_id, "caption": "Front"}, "image_type": {"slug": "hero"}, "order": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["image"]["caption"], "Front");
    assert_eq!(created["image_type"], json!({"title": "Hero", "slug": "hero"}));

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/artworks/{work_id}")).await).await;
    assert_eq!(json["data"]["images"].as_array().unwrap().len(), 1);

    let work_image_id = created["id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/workimages/{work_image_id}"),
        json!({"show_title": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["show_title"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn work_image_with_unknown_image_id_is_rejected(pool: PgPool) {
    let artwork = create(&pool, "/api/v1/artworks", json!({"title": "Empty"})).await;
    let work_id = artwork["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/works/{work_id}/images"),
        json!({"image": {"id": 999}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "image: no match for id=999");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn film_title_with_accents_folds_into_the_slug(pool: PgPool) {
    let film = create(&pool, "/api/v1/films", json!({"title": "Amélie"})).await;
    assert_eq!(film["slug"], "amelie");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn artwork_title_without_slug_characters_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/artworks",
        json!({"title": "★★★"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM works")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
