//! End-to-end tests for the HTTP surface, driven through the router
//! with an in-memory database.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use datashelf_core::{RecordCategory, RecordValue};
use datashelf_server::db::{self, RecordRepo};
use datashelf_server::{build_router, AppState};

async fn test_state() -> AppState {
    let pool = db::create_pool_in_memory().await.expect("pool");
    db::migrations::run(&pool).await.expect("migrations");
    AppState::new(pool)
}

async fn test_app() -> (Router, AppState) {
    let state = test_state().await;
    (build_router(state.clone()), state)
}

fn value(s: &str) -> RecordValue {
    RecordValue::new(s).expect("valid value")
}

fn category(s: &str) -> RecordCategory {
    RecordCategory::new(s).expect("valid category")
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

#[tokio::test]
async fn empty_listing_renders() {
    let (app, _) = test_app().await;

    let response = app.oneshot(get("/")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("No records yet."));
}

#[tokio::test]
async fn add_then_list_shows_record() {
    let (app, _) = test_app().await;

    let response = app
        .clone()
        .oneshot(form_post("/add_data", "data=x&data_type=y"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let response = app.oneshot(get("/")).await.expect("response");
    let body = body_string(response).await;
    assert!(body.contains("<td>x</td>"));
    assert!(body.contains("<td>y</td>"));
}

#[tokio::test]
async fn add_missing_field_is_rejected() {
    let (app, state) = test_app().await;

    let response = app
        .oneshot(form_post("/add_data", "data=x"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written
    let records = RecordRepo::new(state.pool()).list().await.expect("list");
    assert!(records.is_empty());
}

#[tokio::test]
async fn add_overlong_value_is_rejected() {
    let (app, _) = test_app().await;

    let long = "a".repeat(201);
    let response = app
        .oneshot(form_post("/add_data", &format!("data={long}&data_type=t")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_record_and_redirects() {
    let (app, state) = test_app().await;
    let repo = RecordRepo::new(state.pool());

    let keep = repo
        .insert(value("keep"), category("t"))
        .await
        .expect("insert");
    let gone = repo
        .insert(value("gone"), category("t"))
        .await
        .expect("insert");

    let response = app
        .clone()
        .oneshot(form_post(&format!("/delete_data/{}", gone.id), ""))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let records = repo.list().await.expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, keep.id);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(form_post("/delete_data/999", ""))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_changes_value_only() {
    let (app, state) = test_app().await;
    let repo = RecordRepo::new(state.pool());

    let created = repo
        .insert(value("before"), category("notes"))
        .await
        .expect("insert");

    let response = app
        .oneshot(form_post(&format!("/update_data/{}", created.id), "data=after"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let record = repo.get(created.id).await.expect("get");
    assert_eq!(record.value, "after");
    assert_eq!(record.category, "notes");
    assert_eq!(record.id, created.id);
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(form_post("/update_data/999", "data=x"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(form_post("/update_data/abc", "data=x"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_table_is_a_no_op_redirect() {
    let (app, state) = test_app().await;

    let response = app
        .oneshot(form_post("/create_table", "table_name=whatever"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let records = RecordRepo::new(state.pool()).list().await.expect("list");
    assert!(records.is_empty());
}

#[tokio::test]
async fn healthz_is_ok() {
    let (app, _) = test_app().await;

    let response = app.oneshot(get("/healthz")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"ok\""));
}
