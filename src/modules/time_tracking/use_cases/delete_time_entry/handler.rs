use crate::modules::time_tracking::application::document_gateway::{DocumentGateway, Outcome};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::use_cases::delete_time_entry::decide::{
    DeleteTimeEntry, decide_delete,
};
use std::sync::Arc;

pub struct DeleteTimeEntryHandler {
    gateway: Arc<DocumentGateway>,
}

impl DeleteTimeEntryHandler {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: DeleteTimeEntry) -> Result<(), ApplicationError> {
        let removed = self
            .gateway
            .transact(|document| decide_delete(document, command).map(Outcome::Changed))
            .await?;
        tracing::info!(entry_id = removed.id, "time entry deleted");
        Ok(())
    }
}
