use crate::modules::time_tracking::application::document_gateway::DocumentGateway;
use crate::shared::infrastructure::document_store::json_file::JsonFileDocumentStore;
use crate::shell::config::FrontendConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::documents::{post_json, read_json};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn app_over(dir: &TempDir) -> Router {
    let store = Arc::new(JsonFileDocumentStore::new(dir.path().join("data.json")));
    let state = AppState::new(Arc::new(DocumentGateway::new(store)));
    let frontend = FrontendConfig {
        time_app_dir: dir.path().join("time"),
        admin_app_dir: dir.path().join("admin"),
    };
    router(state, &frontend)
}

async fn get(app: &Router, path: &str) -> Value {
    let response = app
        .clone()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "{path}");
    read_json(response).await
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app.clone().oneshot(post_json(path, &body)).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn submits_approves_reviews_and_deletes_an_entry() {
    let dir = TempDir::new().unwrap();
    let app = app_over(&dir);

    post(&app, "/api/add-employee", json!({"id": "e1", "name": "Ada Lovelace"})).await;
    let (status, submitted) = post(
        &app,
        "/api/submit-time",
        json!({
            "employee_id": "e1", "project_id": "p1", "task_id": "t1", "minutes_spent": 30,
            "materials_used": {"material_id": "m1", "notes": "two sheets"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = submitted["entry"]["id"].as_u64().unwrap();
    assert_eq!(id, 1);

    // unapproved entries stay out of every material view
    assert_eq!(get(&app, "/api/material-logs").await, json!({"pending": [], "completed": []}));

    let (status, edited) = post(
        &app,
        "/api/edit-time",
        json!({
            "id": id,
            "updated": {"employee_id": "e1", "project_id": "p1", "task_id": "t1", "minutes_spent": 40}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["entry"]["approved"], json!(true));

    let logs = get(&app, "/api/material-logs").await;
    assert_eq!(logs["pending"][0]["id"], json!(id));
    assert_eq!(logs["completed"], json!([]));

    let unreviewed = get(&app, "/api/materials-unreviewed").await;
    assert_eq!(unreviewed[0]["employee_name"], json!("Ada Lovelace"));
    assert_eq!(unreviewed[0]["material_name"], json!(""));

    let (status, _) = post(&app, "/api/mark-material-reviewed", json!({"id": id})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(get(&app, "/api/materials-unreviewed").await, json!([]));
    assert_eq!(get(&app, "/api/materials-reviewed").await[0]["id"], json!(id));
    assert_eq!(get(&app, "/api/reported-materials").await[0]["reviewed"], json!(true));

    let (status, _) = post(&app, "/api/delete-time", json!({"id": id})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(get(&app, "/api/time-entries").await, json!([]));

    let (status, second) = post(
        &app,
        "/api/submit-time",
        json!({"employee_id": "e1", "project_id": "p1", "task_id": "t1", "minutes_spent": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["entry"]["id"], json!(2));
}

#[tokio::test]
async fn survives_a_restart_over_the_same_file() {
    let dir = TempDir::new().unwrap();

    let first = app_over(&dir);
    post(&first, "/api/add-project", json!({"id": "p1", "name": "Harbor House", "task_budgets": {"t1": 120}})).await;
    post(
        &first,
        "/api/submit-time",
        json!({"employee_id": "e1", "project_id": "p1", "task_id": "t1", "minutes_spent": 30}),
    )
    .await;

    let second = app_over(&dir);
    assert_eq!(get(&second, "/api/projects").await[0]["task_budgets"], json!({"t1": 120}));
    let (_, submitted) = post(
        &second,
        "/api/submit-time",
        json!({"employee_id": "e1", "project_id": "p1", "task_id": "t1", "minutes_spent": 30}),
    )
    .await;
    assert_eq!(submitted["entry"]["id"], json!(2));
}
