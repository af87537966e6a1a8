use crate::modules::time_tracking::application::document_gateway::DocumentGateway;
use crate::modules::time_tracking::core::document::{
    Employee, Material, Project, Task, TimeEntry,
};
use crate::shared::infrastructure::document_store::DocumentStoreError;
use std::sync::Arc;

/// Whole-collection reads, returned in stored order.
pub struct CollectionQueries {
    gateway: Arc<DocumentGateway>,
}

impl CollectionQueries {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn employees(&self) -> Result<Vec<Employee>, DocumentStoreError> {
        self.gateway.read(|d| d.employees.clone()).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, DocumentStoreError> {
        self.gateway.read(|d| d.projects.clone()).await
    }

    pub async fn tasks(&self) -> Result<Vec<Task>, DocumentStoreError> {
        self.gateway.read(|d| d.tasks.clone()).await
    }

    pub async fn materials(&self) -> Result<Vec<Material>, DocumentStoreError> {
        self.gateway.read(|d| d.materials().to_vec()).await
    }

    pub async fn time_entries(&self) -> Result<Vec<TimeEntry>, DocumentStoreError> {
        self.gateway.read(|d| d.time_entries.clone()).await
    }
}
