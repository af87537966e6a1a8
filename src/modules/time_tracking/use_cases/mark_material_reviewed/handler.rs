use crate::modules::time_tracking::application::document_gateway::DocumentGateway;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::use_cases::mark_material_reviewed::decide::{
    MarkMaterialReviewed, decide_mark_reviewed,
};
use std::sync::Arc;

pub struct MarkMaterialReviewedHandler {
    gateway: Arc<DocumentGateway>,
}

impl MarkMaterialReviewedHandler {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: MarkMaterialReviewed) -> Result<(), ApplicationError> {
        let id = self
            .gateway
            .transact(|document| decide_mark_reviewed(document, command))
            .await?;
        tracing::info!(entry_id = id, "material marked reviewed");
        Ok(())
    }
}
