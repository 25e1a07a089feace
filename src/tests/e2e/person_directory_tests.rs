use crate::shared::infrastructure::person_store::in_memory::InMemoryPersonStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_person(first_name: &str, last_name: &str) -> Request<Body> {
    let body = serde_json::json!({"firstName": first_name, "lastName": last_name});
    Request::post("/person")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn registers_and_looks_up_people() {
    let store = Arc::new(InMemoryPersonStore::seeded());
    let app = router(AppState::new(store.clone()));

    let (status, _) = send(&app, get("/person/Staunton")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, created) = send(&app, post_person("Thomas", "Staunton")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["firstName"], "Thomas");
    assert_eq!(created["lastName"], "Staunton");

    let (status, listed) = send(&app, get("/person/staunton")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, serde_json::json!([created.clone()]));

    let (status, found) = send(&app, get("/person/STAUNTON/thomas")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);

    let conflict = app
        .clone()
        .oneshot(post_person("THOMAS", "staunton"))
        .await
        .unwrap();
    assert_eq!(conflict.status(), StatusCode::CONFLICT);
    let content_type = conflict.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");
    let bytes = conflict.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Person already exists");
    assert_eq!(store.len().await, 4);
}

#[tokio::test]
async fn assigns_increasing_ids_after_the_seed_records() {
    let app = router(AppState::new(Arc::new(InMemoryPersonStore::seeded())));

    let (_, first) = send(&app, post_person("John", "Smith")).await;
    let (_, second) = send(&app, post_person("Anna", "Smith")).await;
    assert_eq!(first["id"], 4);
    assert_eq!(second["id"], 5);

    let (status, smiths) = send(&app, get("/person/Smith")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = smiths
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 4, 5]);
}

#[tokio::test]
async fn repeated_lookups_leave_the_store_untouched() {
    let store = Arc::new(InMemoryPersonStore::seeded());
    let app = router(AppState::new(store.clone()));
    let before = store.snapshot().await;

    for uri in ["/person/Brown", "/person/Archer/Brian", "/person/Nobody", "/person/Brown"] {
        send(&app, get(uri)).await;
    }

    assert_eq!(store.snapshot().await, before);
    let (_, browns) = send(&app, get("/person/brown")).await;
    assert_eq!(
        browns,
        serde_json::json!([{"id": 3, "firstName": "Collin", "lastName": "Brown"}])
    );
}
