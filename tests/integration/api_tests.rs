//! API integration tests
//!
//! Drive the full router against the in-memory book store.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use liberia_server::{
    api::create_router, config::AppConfig, repository::Repository, services::Services, AppState,
};

fn build_test_app() -> Router {
    let config = AppConfig::default();
    let services = Services::new(Repository::in_memory(), config.catalog.clone())
        .expect("Failed to create services");
    create_router(AppState {
        services: Arc::new(services),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri))
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, json)
}

fn dune(status: &str, rating: Value) -> Value {
    json!({
        "title": "Dune",
        "author": "Herbert",
        "genre": "SciFi",
        "status": status,
        "rating": rating
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = build_test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_create_and_get_book() {
    let app = build_test_app();

    let (status, created) = send(&app, Method::POST, "/books", Some(dune("want-to-read", json!(4)))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["rating"], 0);
    assert_eq!(created["status"], "want-to-read");
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());
    assert_eq!(created["coverUrl"], Value::Null);

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_validation_errors() {
    let app = build_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "Dune", "status": "reading" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "missing_fields");
    assert_eq!(body["error"], "Title, author, and genre are required");

    let (status, body) = send(&app, Method::POST, "/books", Some(dune("finished", Value::Null))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_status");

    let (status, body) = send(&app, Method::POST, "/books", Some(dune("completed", json!(6)))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_rating");
    assert_eq!(body["error"], "Rating between 1-5 is required for completed books");

    let (_, books) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(books, json!([]));
}

#[tokio::test]
async fn test_wrong_typed_status_and_rating() {
    let app = build_test_app();

    // a non-numeric rating is ignored unless the book is completed
    let (status, created) = send(&app, Method::POST, "/books", Some(dune("reading", json!("4")))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "reading");
    assert_eq!(created["rating"], 0);

    let mut body = dune("reading", Value::Null);
    body["status"] = json!(3);
    let (status, body) = send(&app, Method::POST, "/books", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_status");
    assert_eq!(body["error"], "Invalid status");

    let (status, body) = send(&app, Method::POST, "/books", Some(dune("completed", json!("five")))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_rating");

    let path = format!("/books/{}", created["id"].as_str().unwrap());
    let (status, body) = send(&app, Method::PUT, &path, Some(dune("completed", json!("5")))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_rating");

    let (_, books) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(books.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = build_test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/books")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_book_is_not_found() {
    let app = build_test_app();
    let missing = "/books/5f0c7a43-52a1-4d6e-9a8c-1b8f0c3f2d11";

    let (status, body) = send(&app, Method::GET, missing, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book not found");

    let (status, _) = send(&app, Method::GET, "/books/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // existence is checked before the payload
    let (status, _) = send(&app, Method::PUT, missing, Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, missing, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, books) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(books, json!([]));
}

#[tokio::test]
async fn test_update_and_delete_book() {
    let app = build_test_app();

    let (_, created) = send(&app, Method::POST, "/books", Some(dune("completed", json!(5)))).await;
    assert_eq!(created["rating"], 5);
    let path = format!("/books/{}", created["id"].as_str().unwrap());

    let (status, updated) = send(&app, Method::PUT, &path, Some(dune("reading", json!(5)))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["rating"], 0);
    assert_eq!(updated["status"], "reading");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (status, body) = send(&app, Method::PUT, &path, Some(dune("completed", Value::Null))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_rating");

    let (status, body) = send(&app, Method::DELETE, &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book deleted successfully");

    let (status, _) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_newest_first_and_stats() {
    let app = build_test_app();

    for (title, status, rating) in [
        ("Kindred", "completed", 5),
        ("Parable of the Sower", "reading", 0),
        ("Dawn", "want-to-read", 0),
    ] {
        let (code, _) = send(
            &app,
            Method::POST,
            "/books",
            Some(json!({
                "title": title, "author": "Octavia E. Butler", "genre": "SciFi",
                "status": status, "rating": rating
            })),
        )
        .await;
        assert_eq!(code, StatusCode::CREATED);
    }

    let (status, books) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Dawn", "Parable of the Sower", "Kindred"]);

    let (status, summary) = send(&app, Method::GET, "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["completed"], 1);
    assert_eq!(summary["wantToRead"], 1);
    assert_eq!(summary["averageRating"], 5.0);
}

#[tokio::test]
async fn test_import_catalog_document() {
    let app = build_test_app();

    let (status, book) = send(
        &app,
        Method::POST,
        "/explore/import",
        Some(json!({
            "key": "/works/OL102749W",
            "title": "Neuromancer",
            "author_name": ["William Gibson"],
            "cover_i": 284192,
            "subject": ["Cyberpunk", "Fiction"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book["title"], "Neuromancer");
    assert_eq!(book["author"], "William Gibson");
    assert_eq!(book["genre"], "Cyberpunk");
    assert_eq!(book["status"], "want-to-read");
    assert_eq!(book["rating"], 0);
    assert_eq!(book["coverUrl"], "https://covers.openlibrary.org/b/id/284192-M.jpg");
}

#[tokio::test]
async fn test_invalid_search_parameters_are_bad_request() {
    let app = build_test_app();

    for uri in ["/explore/search?limit=abc", "/explore/search?q=dune&limit=-1"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], "bad_request");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = build_test_app();

    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/books/{id}"].is_object());
}
