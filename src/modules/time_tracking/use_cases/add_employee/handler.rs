use crate::modules::time_tracking::application::document_gateway::{DocumentGateway, Outcome};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::Employee;
use crate::modules::time_tracking::use_cases::add_employee::decide::{
    AddEmployee, decide_add_employee,
};
use std::sync::Arc;

pub struct AddEmployeeHandler {
    gateway: Arc<DocumentGateway>,
}

impl AddEmployeeHandler {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: AddEmployee) -> Result<Employee, ApplicationError> {
        let employee = self
            .gateway
            .transact(|document| decide_add_employee(document, command).map(Outcome::Changed))
            .await?;
        tracing::info!(employee_id = %employee.id, "employee added");
        Ok(employee)
    }
}
