// Submission command handler.
//
// Responsibilities
// - Stamp the server time for entries that arrive without one.
// - Run the decider inside the gateway so the counter and the new entry are persisted together.

use crate::modules::time_tracking::application::document_gateway::{DocumentGateway, Outcome};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::TimeEntry;
use crate::modules::time_tracking::use_cases::submit_time_entry::command::SubmitTimeEntry;
use crate::modules::time_tracking::use_cases::submit_time_entry::decide::decide_submit;
use crate::shared::core::primitives::now_iso8601;
use std::sync::Arc;

pub struct SubmitTimeEntryHandler {
    gateway: Arc<DocumentGateway>,
}

impl SubmitTimeEntryHandler {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: SubmitTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let now = now_iso8601();
        let entry = self
            .gateway
            .transact(|document| decide_submit(document, command, &now).map(Outcome::Changed))
            .await?;
        tracing::info!(entry_id = entry.id, employee_id = %entry.employee_id, "time entry submitted");
        Ok(entry)
    }
}
