// Shared documents, gateways and app states for tests.
//
// The seeded document holds:
// - entry 1: unapproved, no material
// - entry 2: approved, material m1 unreviewed, not entered
// - entry 3: approved, material m2 reviewed and entered
// - entry 4: unapproved, with material
// - entry 5: approved, material with unknown employee and material ids

use crate::modules::time_tracking::application::document_gateway::DocumentGateway;
use crate::modules::time_tracking::core::document::Document;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn seeded_document_value() -> Value {
    json!({
        "next_entry_id": 6,
        "employees": [
            {"id": "e1", "name": "Ada Lovelace"},
            {"id": "e2", "name": "Grace Hopper"}
        ],
        "projects": [
            {"id": "p1", "name": "Harbor House", "task_budgets": {"t1": 120}},
            {"id": "p2", "name": "Mill Loft", "task_budgets": {}}
        ],
        "tasks": [
            {"id": "t1", "name": "Framing"},
            {"id": "t2", "name": "Finishing"}
        ],
        "time_entries": [
            {
                "id": 1, "employee_id": "e1", "project_id": "p1", "task_id": "t1",
                "minutes_spent": 30, "timestamp": "2025-03-01T09:00:00.000000",
                "approved": false, "materials_used": null
            },
            {
                "id": 2, "employee_id": "e1", "project_id": "p1", "task_id": "t1",
                "minutes_spent": 60, "timestamp": "2025-03-01T10:00:00.000000",
                "approved": true,
                "materials_used": {"material_id": "m1", "notes": "two sheets", "reviewed": false},
                "materials_entered": false
            },
            {
                "id": 3, "employee_id": "e2", "project_id": "p1", "task_id": "t2",
                "minutes_spent": 45, "timestamp": "2025-03-02T08:15:00.000000",
                "approved": true,
                "materials_used": {"material_id": "m2", "notes": "", "reviewed": true},
                "materials_entered": true
            },
            {
                "id": 4, "employee_id": "e2", "project_id": "p2", "task_id": "t1",
                "minutes_spent": 15, "timestamp": "2025-03-02T11:00:00.000000",
                "approved": false,
                "materials_used": {"material_id": "m1", "notes": "offcut", "reviewed": false},
                "materials_entered": false
            },
            {
                "id": 5, "employee_id": "e7", "project_id": "p2", "task_id": "t2",
                "minutes_spent": 20, "timestamp": "2025-03-03T07:45:00.000000",
                "approved": true,
                "materials_used": {"material_id": "m9", "notes": "", "reviewed": false}
            }
        ],
        "materials": [
            {"id": "m1", "name": "Plywood"},
            {"id": "m2", "name": "Oak beam"}
        ]
    })
}

pub fn seeded_document() -> Document {
    serde_json::from_value(seeded_document_value()).unwrap()
}

/// Counter at 3 while entry 3 exists, and two entries without an id around it.
pub fn legacy_document_value() -> Value {
    json!({
        "next_entry_id": 3,
        "employees": [{"id": "e1", "name": "Ada Lovelace"}],
        "projects": [],
        "tasks": [],
        "time_entries": [
            {
                "employee_id": "e1", "project_id": "p1", "task_id": "t1",
                "minutes_spent": 10, "timestamp": "2024-11-01T09:00:00", "approved": true,
                "materials_used": null
            },
            {
                "id": 3, "employee_id": "e1", "project_id": "p1", "task_id": "t1",
                "minutes_spent": 20, "timestamp": "2024-11-02T09:00:00", "approved": false,
                "materials_used": null
            },
            {
                "employee_id": "e1", "project_id": "p1", "task_id": "t1",
                "minutes_spent": 30, "timestamp": "2024-11-03T09:00:00", "approved": false,
                "materials_used": null
            }
        ]
    })
}

pub fn seeded_gateway() -> Arc<DocumentGateway> {
    let store = Arc::new(InMemoryDocumentStore::with_document(seeded_document_value()));
    Arc::new(DocumentGateway::new(store))
}

pub fn empty_state() -> AppState {
    AppState::new(Arc::new(DocumentGateway::new(Arc::new(
        InMemoryDocumentStore::new(),
    ))))
}

pub fn seeded_state() -> AppState {
    AppState::new(seeded_gateway())
}

pub fn offline_state() -> AppState {
    let mut store = InMemoryDocumentStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(DocumentGateway::new(Arc::new(store))))
}

pub fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
