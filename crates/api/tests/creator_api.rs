//! Integration tests for the creator families: `/creators`, `/persons`,
//! `/organizations`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, BASE_URL};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_person_derives_names_from_name_full(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/persons", json!({"name_full": "Orson Welles"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    let id = data["id"].as_i64().unwrap();
    assert_eq!(data["slug"], "orson-welles");
    assert_eq!(data["name_display"], "Orson Welles");
    assert_eq!(data["name_sort"], "Orson Welles");
    assert_eq!(data["url"], format!("{BASE_URL}/api/v1/persons/{id}"));
    assert_eq!(data["works"], json!([]));
    assert!(data["portrait"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn explicit_names_are_kept(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/persons",
        json!({"name_full": "Alfred Hitchcock", "name_sort": "Hitchcock, Alfred", "slug": "hitch"}),
    )
    .await;

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["slug"], "hitch");
    assert_eq!(data["name_sort"], "Hitchcock, Alfred");
    assert_eq!(data["name_display"], "Alfred Hitchcock");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn portrait_without_id_creates_an_image(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/organizations",
        json!({
            "name_full": "Ealing Studios",
            "portrait": {"image": "portraits/ealing.jpg", "alt_text": "Logo"}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["portrait"]["image"], "portraits/ealing.jpg");
    assert_eq!(data["portrait"]["alt_text"], "Logo");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM images")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn portrait_without_image_path_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/persons",
        json!({"name_full": "No Picture", "portrait": {"title": "Missing"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "portrait: image is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_website_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/persons",
        json!({"name_full": "Bad Link", "website": "not a url"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn person_route_does_not_serve_organizations(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/organizations", json!({"name_full": "Rank"})).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/persons/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Person with id {id} not found")
    );

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/creators/{id}?fields=id,url")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"],
        json!({"id": id, "url": format!("{BASE_URL}/api/v1/creators/{id}")})
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_and_delete_creator(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/persons", json!({"name_full": "Carol Reed"})).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/persons/{id}"),
        json!({"name_display": "Sir Carol Reed", "start_date_display": "1906"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["name_display"], "Sir Carol Reed");
    assert_eq!(data["name_full"], "Carol Reed");
    assert_eq!(data["start_date_display"], "1906");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/creators/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/creators/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn creators_collection_lists_every_kind(pool: PgPool) {
    for (path, name) in [("/api/v1/persons", "Zed"), ("/api/v1/organizations", "Acme")] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, path, json!({"name_full": name})).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/creators?fields=name_sort").await).await;

    assert_eq!(
        json["data"],
        json!([{"name_sort": "Acme"}, {"name_sort": "Zed"}])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn accented_names_fold_into_the_slug(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/persons", json!({"name_full": "Agnès Varda"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["slug"], "agnes-varda");
    assert_eq!(data["name_display"], "Agnès Varda");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn name_without_slug_characters_needs_an_explicit_slug(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/persons",
        json!({"name_full": "李安"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().starts_with("slug:"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM creators")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/persons",
        json!({"name_full": "李安", "slug": "ang-lee"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["slug"], "ang-lee");
}
