use crate::modules::time_tracking::application::document_gateway::{DocumentGateway, Outcome};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::Project;
use crate::modules::time_tracking::use_cases::add_project::decide::{AddProject, decide_add_project};
use std::sync::Arc;

pub struct AddProjectHandler {
    gateway: Arc<DocumentGateway>,
}

impl AddProjectHandler {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: AddProject) -> Result<Project, ApplicationError> {
        let project = self
            .gateway
            .transact(|document| decide_add_project(document, command).map(Outcome::Changed))
            .await?;
        tracing::info!(project_id = %project.id, "project added");
        Ok(project)
    }
}
