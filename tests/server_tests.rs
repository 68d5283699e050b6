use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use quizgen::{config::ConfigHandle, server};
use serde_json::{Value, json};
use tower::ServiceExt;

// Answer checking must take the deterministic similarity path, so make sure
// no generative backend is configured before the config is first built.
fn test_config() -> ConfigHandle {
    unsafe { std::env::remove_var("GEMINI_API_KEY") };
    quizgen::config::ensure_initialized().expect("configuration should initialize")
}

fn app() -> Router {
    server::router(test_config())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn check_answer_rejects_missing_fields() {
    let response = app()
        .oneshot(post_json("/api/check-answer", json!({})))
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Both an answer and a correct answer are required"
    );
}

#[tokio::test]
async fn check_answer_rejects_whitespace_only_answer() {
    let request = json!({ "userAnswer": "   ", "correctAnswer": "hello" });
    let response = app()
        .oneshot(post_json("/api/check-answer", request))
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Both an answer and a correct answer are required"
    );
}

#[tokio::test]
async fn check_answer_rejects_missing_correct_answer() {
    let request = json!({ "userAnswer": "hello" });
    let response = app()
        .oneshot(post_json("/api/check-answer", request))
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Both an answer and a correct answer are required"
    );
}

#[tokio::test]
async fn check_answer_returns_success_envelope() {
    let request = json!({ "userAnswer": "Hello!", "correctAnswer": "hello" });
    let response = app()
        .oneshot(post_json("/api/check-answer", request))
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["isCorrect"], true);
    assert_eq!(body["result"]["score"], 100);
    assert_eq!(body["result"]["feedback"], "Correct! Well done.");
}

#[tokio::test]
async fn check_answer_grades_wrong_answers_as_incorrect() {
    let request = json!({ "userAnswer": "dog", "correctAnswer": "elephant" });
    let response = app()
        .oneshot(post_json("/api/check-answer", request))
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["isCorrect"], false);
    assert!(
        body["result"]["feedback"]
            .as_str()
            .expect("feedback should be a string")
            .contains("elephant")
    );
}

#[tokio::test]
async fn healthz_responds_ok() {
    let request = Request::builder()
        .method("GET")
        .uri("/healthz")
        .body(Body::empty())
        .expect("request should build");
    let response = app().oneshot(request).await.expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);
}
