use askpage::api::routes;
use askpage::db::Database;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

fn test_app() -> Router {
    let database = Database::in_memory().expect("in-memory database");
    routes::app(database)
}

async fn send_json(app: &mut Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = app.call(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &mut Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.call(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn submit_creates_a_pending_task() {
    let mut app = test_app();

    let payload = json!({
        "websiteUrl": "https://example.com",
        "userQuestion": "What is this site about?"
    });
    let (status, body) = send_json(&mut app, "POST", "/api/submit", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let task_id = body["taskId"].as_i64().expect("taskId present");
    assert!(task_id >= 1);

    let (status, task) = get(&mut app, &format!("/api/task/{}", task_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["id"].as_i64(), Some(task_id));
    assert_eq!(task["website_url"], json!("https://example.com"));
    assert_eq!(task["user_question"], json!("What is this site about?"));
    assert_eq!(task["status"], json!("pending"));
    assert_eq!(task["scraped_content"], Value::Null);
    assert_eq!(task["ai_answer"], Value::Null);
    assert!(!task["created_at"].as_str().unwrap().is_empty());
    assert!(!task["updated_at"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn submitted_tasks_get_distinct_ids() {
    let mut app = test_app();

    let mut ids = Vec::new();
    for n in 0..3 {
        let payload = json!({
            "websiteUrl": format!("https://example.com/{n}"),
            "userQuestion": "q"
        });
        let (status, body) = send_json(&mut app, "POST", "/api/submit", payload).await;
        assert_eq!(status, StatusCode::OK);
        ids.push(body["taskId"].as_i64().unwrap());
    }

    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn submit_rejects_missing_fields() {
    let mut app = test_app();

    let cases = [
        json!({ "userQuestion": "only a question" }),
        json!({ "websiteUrl": "https://example.com" }),
        json!({ "websiteUrl": "", "userQuestion": "blank url" }),
        json!({}),
    ];
    for payload in cases {
        let (status, body) = send_json(&mut app, "POST", "/api/submit", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Missing"));
    }

    // none of the rejected submissions created a task
    let (status, _) = get(&mut app, "/api/task/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_task_id_returns_404() {
    let mut app = test_app();

    let (status, body) = get(&mut app, "/api/task/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Task not found"));
}

#[tokio::test]
async fn health_route_answers() {
    let mut app = test_app();

    let (status, body) = get(&mut app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("running"));
}
