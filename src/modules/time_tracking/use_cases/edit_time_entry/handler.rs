use crate::modules::time_tracking::application::document_gateway::{DocumentGateway, Outcome};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::TimeEntry;
use crate::modules::time_tracking::use_cases::edit_time_entry::command::EditTimeEntry;
use crate::modules::time_tracking::use_cases::edit_time_entry::decide::decide_edit;
use std::sync::Arc;

pub struct EditTimeEntryHandler {
    gateway: Arc<DocumentGateway>,
}

impl EditTimeEntryHandler {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: EditTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let entry = self
            .gateway
            .transact(|document| decide_edit(document, command).map(Outcome::Changed))
            .await?;
        tracing::info!(entry_id = entry.id, "time entry edited and approved");
        Ok(entry)
    }
}
