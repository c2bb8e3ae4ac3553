mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use trivia_bundles::{router, AppState};

fn offline_app() -> axum::Router {
    router(AppState {
        db: common::unreachable_db(),
    })
}

async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

fn json_request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request build should succeed")
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed")
}

#[tokio::test]
async fn non_numeric_ids_are_bad_requests() {
    let app = offline_app();

    let cases = [
        empty_request(Method::GET, "/trivia/abc"),
        empty_request(Method::DELETE, "/trivia/1.5"),
        json_request(
            Method::PUT,
            "/trivia/ten",
            r#"{"question":"q","category":"c"}"#,
        ),
    ];

    for req in cases {
        let uri = req.uri().to_string();
        let resp = app.clone().oneshot(req).await.expect("router should respond");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "expected 400 for {uri}");
        assert!(body_text(resp).await.contains("invalid bundle id"));
    }
}

#[tokio::test]
async fn malformed_create_bodies_are_bad_requests() {
    let app = offline_app();

    let cases = [
        json_request(Method::POST, "/create", "{not json"),
        json_request(
            Method::POST,
            "/create",
            r#"{"question":"q","category":"c","show_answer":"yes"}"#,
        ),
        json_request(Method::POST, "/create", r#"{"question":1,"category":"c"}"#),
        empty_request(Method::POST, "/create"),
    ];

    for req in cases {
        let resp = app.clone().oneshot(req).await.expect("router should respond");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(!body_text(resp).await.is_empty());
    }
}

#[tokio::test]
async fn sparse_create_bodies_pass_decoding() {
    let app = offline_app();

    let cases = [
        r#"{"category":"c"}"#,
        r#"{"question":"q","category":"c","answers":[{"answer_text":"a"}]}"#,
        r#"{"question":"q","category":"c","answers":null}"#,
    ];

    for body in cases {
        let resp = app
            .clone()
            .oneshot(json_request(Method::POST, "/create", body))
            .await
            .expect("router should respond");
        // Decoding succeeds, so the failure comes from the unreachable database.
        assert_eq!(
            resp.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "unexpected status for {body}"
        );
    }
}

#[tokio::test]
async fn storage_failures_are_server_errors_with_text() {
    let app = offline_app();

    let resp = app
        .oneshot(empty_request(Method::GET, "/trivia/1"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(resp).await.is_empty());
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    let app = offline_app();

    let resp = app
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert!(body["message"].as_str().unwrap().starts_with("db down: "));
}

#[tokio::test]
async fn unknown_routes_and_methods_are_rejected() {
    let app = offline_app();

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/nope"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(empty_request(Method::GET, "/create"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn bundle_lifecycle_over_http() {
    let db = common::create_test_db().await;
    let app = router(AppState { db });
    let category = common::unique("http");

    let payload = json!({
        "question": "2+2?",
        "category": category,
        "show_answer": true,
        "answers": [
            { "answer_text": "4", "is_correct": true },
            { "answer_text": "5", "is_correct": false }
        ]
    });
    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/create", payload.to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id: i32 = body_text(resp).await.parse().expect("id body");

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/trivia/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bundle: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(bundle["id"], id);
    assert_eq!(bundle["question"], "2+2?");
    assert_eq!(bundle["answers"][0]["answer_text"], "4");
    assert_eq!(bundle["answers"][1]["is_correct"], false);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/trivia?category={category}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["answers"], json!([]));

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/?category={category}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(&format!("/trivia/{id}")));

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/trivia/{id}"),
            json!({ "question": "3+3?", "category": category }).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &format!("/trivia/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(empty_request(Method::GET, &format!("/trivia/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, format!("trivia bundle {id} not found"));
}
