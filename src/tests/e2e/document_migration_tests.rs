use crate::modules::time_tracking::application::document_gateway::{DocumentGateway, Outcome};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::shared::infrastructure::document_store::json_file::JsonFileDocumentStore;
use crate::tests::fixtures::documents::legacy_document_value;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn gateway_over(path: &Path) -> DocumentGateway {
    DocumentGateway::new(Arc::new(JsonFileDocumentStore::new(path)))
}

fn read_file(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn initializes_an_absent_file_with_an_empty_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    let document = gateway_over(&path).load().await.unwrap();

    assert_eq!(document.next_entry_id, 1);
    assert_eq!(
        read_file(&path),
        json!({
            "next_entry_id": 1,
            "employees": [],
            "projects": [],
            "tasks": [],
            "time_entries": []
        })
    );
}

#[tokio::test]
async fn migrates_a_legacy_file_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, legacy_document_value().to_string()).unwrap();

    gateway_over(&path).load().await.unwrap();
    let migrated = read_file(&path);
    let ids: Vec<_> = migrated["time_entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 3, 5]);
    assert_eq!(migrated["next_entry_id"], json!(6));

    let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
    let reloaded = gateway_over(&path).load().await.unwrap();
    assert_eq!(reloaded.next_entry_id, 6);
    assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), modified);
    assert_eq!(read_file(&path), migrated);
}

#[tokio::test]
async fn keeps_unknown_task_and_material_fields_across_a_mutation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    let seeded = json!({
        "next_entry_id": 1,
        "employees": [],
        "projects": [],
        "tasks": [{"id": "t1", "name": "Framing", "phase": 2}],
        "time_entries": [],
        "materials": [{"id": "m1", "name": "Plywood", "unit": "sheet"}]
    });
    std::fs::write(&path, seeded.to_string()).unwrap();

    let gateway = gateway_over(&path);
    gateway
        .transact(|document| {
            document.allocate_entry_id();
            Ok::<_, ApplicationError>(Outcome::Changed(()))
        })
        .await
        .unwrap();

    let written = read_file(&path);
    assert_eq!(written["next_entry_id"], json!(2));
    assert_eq!(written["tasks"], seeded["tasks"]);
    assert_eq!(written["materials"], seeded["materials"]);
}
