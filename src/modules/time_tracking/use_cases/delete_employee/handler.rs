use crate::modules::time_tracking::application::document_gateway::{DocumentGateway, Outcome};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::use_cases::delete_employee::decide::{
    DeleteEmployee, decide_delete_employee,
};
use std::sync::Arc;

pub struct DeleteEmployeeHandler {
    gateway: Arc<DocumentGateway>,
}

impl DeleteEmployeeHandler {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: DeleteEmployee) -> Result<(), ApplicationError> {
        let removed = self
            .gateway
            .transact(|document| decide_delete_employee(document, command).map(Outcome::Changed))
            .await?;
        tracing::info!(employee_id = %removed.id, "employee deleted");
        Ok(())
    }
}
