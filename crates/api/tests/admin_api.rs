//! Integration tests for the admin surface: session gate, section saves,
//! works buckets, reorder, and relink. Runs against a real database through
//! the full middleware stack.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{authed_json_request, authed_request, build_test_app, login, send};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn work_json(id: &str, title_ja: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": { "ja": title_ja, "en": "" },
        "description": { "ja": "", "en": "" },
        "imageUrl": format!("https://example.com/{id}.png"),
    })
}

fn services_section_json(slugs: &[&str]) -> serde_json::Value {
    json!({
        "section": "services",
        "intro": { "ja": "紹介", "en": "Intro" },
        "items": slugs.iter().map(|slug| json!({
            "id": slug,
            "slug": slug,
            "title": { "ja": format!("サービス {slug}"), "en": "" },
            "description": { "ja": "", "en": "" },
            "backgroundColor": "#000000",
            "gallery": [],
        })).collect::<Vec<_>>(),
    })
}

async fn seed_services(app: &axum::Router, cookie: &str, slugs: &[&str]) {
    let (status, _) = send(
        app,
        authed_json_request(
            "PUT",
            "/api/v1/admin/sections",
            cookie,
            &services_section_json(slugs),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

async fn save_bucket(
    app: &axum::Router,
    cookie: &str,
    bucket: &str,
    items: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(
        app,
        authed_json_request(
            "PUT",
            &format!("/api/v1/admin/portfolio/buckets/{bucket}"),
            cookie,
            &items,
        ),
    )
    .await
}

async fn get_bucket_ids(app: &axum::Router, cookie: &str, bucket: &str) -> Vec<String> {
    let (status, body) = send(
        app,
        authed_request(
            "GET",
            &format!("/api/v1/admin/portfolio/buckets/{bucket}"),
            cookie,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Test: session gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn admin_routes_require_a_session(pool: PgPool) {
    let app = build_test_app(pool);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/admin/landing")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../migrations")]
async fn login_rejects_the_wrong_password(pool: PgPool) {
    let app = build_test_app(pool);

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/admin/auth")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "password": "wrong" }).to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../migrations")]
async fn login_grants_access_and_status_reflects_it(pool: PgPool) {
    let app = build_test_app(pool);

    // Unauthenticated status probe.
    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/admin/auth")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["authenticated"], false);

    let cookie = login(&app).await;

    let (status, body) = send(&app, authed_request("GET", "/api/v1/admin/auth", &cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);

    // The bilingual aggregate is served once authenticated.
    let (status, body) =
        send(&app, authed_request("GET", "/api/v1/admin/landing", &cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["hero"]["heading"]["ja"].is_string());
}

// ---------------------------------------------------------------------------
// Test: section save dispatch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn hero_section_save_round_trips(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;

    let (status, body) = send(
        &app,
        authed_json_request(
            "PUT",
            "/api/v1/admin/sections",
            &cookie,
            &json!({
                "section": "hero",
                "heading": { "ja": "新しい見出し", "en": "" },
                "subheading": { "ja": "", "en": "" },
                "ctaLabel": { "ja": "お問い合わせ", "en": "Contact" },
                "ctaLink": "#contact",
                "imageUrl": "https://example.com/hero.png"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["section"], "hero");

    let (_, body) = send(&app, authed_request("GET", "/api/v1/admin/landing", &cookie)).await;
    assert_eq!(body["data"]["hero"]["heading"]["ja"], "新しい見出し");
    // Empty English heading was backfilled from Japanese at save time.
    assert_eq!(body["data"]["hero"]["heading"]["en"], "新しい見出し");
}

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_section_tag_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;

    let (status, _) = send(
        &app,
        authed_json_request(
            "PUT",
            "/api/v1/admin/sections",
            &cookie,
            &json!({ "section": "footer" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../migrations")]
async fn services_section_with_invalid_slug_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;

    // "!!!" normalizes to the empty string, which fails the slug rule.
    let (status, body) = send(
        &app,
        authed_json_request(
            "PUT",
            "/api/v1/admin/sections",
            &cookie,
            &services_section_json(&["!!!"]),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: works buckets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn bucket_save_replaces_only_its_own_bucket(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;
    seed_services(&app, &cookie, &["svc-a", "svc-b"]).await;

    save_bucket(
        &app,
        &cookie,
        "svc-a",
        json!([work_json("a1", "A1"), work_json("a2", "A2")]),
    )
    .await;
    save_bucket(&app, &cookie, "svc-b", json!([work_json("b1", "B1")])).await;
    save_bucket(&app, &cookie, "unassigned", json!([work_json("u1", "U1")])).await;

    // Rewrite bucket a entirely.
    let (status, body) =
        save_bucket(&app, &cookie, "svc-a", json!([work_json("a3", "A3")])).await;
    assert_eq!(status, StatusCode::OK);
    let saved = body["data"].as_array().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["serviceId"], "svc-a");

    assert_eq!(get_bucket_ids(&app, &cookie, "svc-a").await, ["a3"]);
    assert_eq!(get_bucket_ids(&app, &cookie, "svc-b").await, ["b1"]);
    assert_eq!(get_bucket_ids(&app, &cookie, "unassigned").await, ["u1"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn bucket_save_rejects_an_item_without_an_image(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;
    seed_services(&app, &cookie, &["svc-a"]).await;

    let mut invalid = work_json("a1", "A1");
    invalid["imageUrl"] = json!("   ");

    let (status, body) = save_bucket(&app, &cookie, "svc-a", json!([invalid])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "image required");

    // The rejected save committed nothing.
    assert!(get_bucket_ids(&app, &cookie, "svc-a").await.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn bucket_reorder_swaps_neighbors_and_ignores_boundary_moves(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;
    seed_services(&app, &cookie, &["svc-a"]).await;
    save_bucket(
        &app,
        &cookie,
        "svc-a",
        json!([work_json("a1", "A1"), work_json("a2", "A2"), work_json("a3", "A3")]),
    )
    .await;

    let (status, _) = send(
        &app,
        authed_json_request(
            "POST",
            "/api/v1/admin/portfolio/buckets/svc-a/reorder",
            &cookie,
            &json!({ "index": 0, "direction": "down" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(get_bucket_ids(&app, &cookie, "svc-a").await, ["a2", "a1", "a3"]);

    // First item moving up is a no-op.
    let (status, _) = send(
        &app,
        authed_json_request(
            "POST",
            "/api/v1/admin/portfolio/buckets/svc-a/reorder",
            &cookie,
            &json!({ "index": 0, "direction": "up" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(get_bucket_ids(&app, &cookie, "svc-a").await, ["a2", "a1", "a3"]);
}

// ---------------------------------------------------------------------------
// Test: relink
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn relink_moves_an_item_and_appends_it(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;
    seed_services(&app, &cookie, &["svc-a"]).await;
    save_bucket(
        &app,
        &cookie,
        "svc-a",
        json!([work_json("a1", "A1"), work_json("a2", "A2")]),
    )
    .await;
    save_bucket(&app, &cookie, "unassigned", json!([work_json("u1", "U1")])).await;

    let (status, body) = send(
        &app,
        authed_json_request(
            "POST",
            "/api/v1/admin/portfolio/items/u1/relink",
            &cookie,
            &json!({ "targetServiceId": "svc-a" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["serviceId"], "svc-a");
    assert_eq!(body["data"]["sortOrder"], 2);

    assert!(get_bucket_ids(&app, &cookie, "unassigned").await.is_empty());
    assert_eq!(get_bucket_ids(&app, &cookie, "svc-a").await, ["a1", "a2", "u1"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn relink_to_a_missing_service_is_a_404_no_op(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;
    save_bucket(&app, &cookie, "unassigned", json!([work_json("u1", "U1")])).await;

    let (status, body) = send(
        &app,
        authed_json_request(
            "POST",
            "/api/v1/admin/portfolio/items/u1/relink",
            &cookie,
            &json!({ "targetServiceId": "svc-missing" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(get_bucket_ids(&app, &cookie, "unassigned").await, ["u1"]);
}

// ---------------------------------------------------------------------------
// Test: service ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn services_reorder_swaps_display_order(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;
    seed_services(&app, &cookie, &["svc-a", "svc-b"]).await;

    let (status, body) = send(
        &app,
        authed_json_request(
            "POST",
            "/api/v1/admin/services/reorder",
            &cookie,
            &json!({ "index": 0, "direction": "down" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["svc-b", "svc-a"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn removing_a_service_moves_its_works_to_unassigned(pool: PgPool) {
    let app = build_test_app(pool);
    let cookie = login(&app).await;
    seed_services(&app, &cookie, &["svc-a", "svc-b"]).await;
    save_bucket(&app, &cookie, "svc-a", json!([work_json("a1", "A1")])).await;

    // Re-save the services section without svc-a.
    seed_services(&app, &cookie, &["svc-b"]).await;

    assert_eq!(get_bucket_ids(&app, &cookie, "unassigned").await, ["a1"]);
}
