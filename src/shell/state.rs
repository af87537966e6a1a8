use crate::modules::time_tracking::application::document_gateway::DocumentGateway;
use crate::modules::time_tracking::use_cases::add_employee::handler::AddEmployeeHandler;
use crate::modules::time_tracking::use_cases::add_project::handler::AddProjectHandler;
use crate::modules::time_tracking::use_cases::delete_employee::handler::DeleteEmployeeHandler;
use crate::modules::time_tracking::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_tracking::use_cases::edit_time_entry::handler::EditTimeEntryHandler;
use crate::modules::time_tracking::use_cases::list_collections::handler::CollectionQueries;
use crate::modules::time_tracking::use_cases::mark_material_reviewed::handler::MarkMaterialReviewedHandler;
use crate::modules::time_tracking::use_cases::material_reports::handler::MaterialReportQueries;
use crate::modules::time_tracking::use_cases::submit_time_entry::handler::SubmitTimeEntryHandler;
use std::sync::Arc;

/// Every handler shares the same gateway, so all of them go through one gate.
#[derive(Clone)]
pub struct AppState {
    pub collections: Arc<CollectionQueries>,
    pub material_reports: Arc<MaterialReportQueries>,
    pub submit_time_entry: Arc<SubmitTimeEntryHandler>,
    pub edit_time_entry: Arc<EditTimeEntryHandler>,
    pub delete_time_entry: Arc<DeleteTimeEntryHandler>,
    pub add_employee: Arc<AddEmployeeHandler>,
    pub delete_employee: Arc<DeleteEmployeeHandler>,
    pub add_project: Arc<AddProjectHandler>,
    pub mark_material_reviewed: Arc<MarkMaterialReviewedHandler>,
}

impl AppState {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self {
            collections: Arc::new(CollectionQueries::new(gateway.clone())),
            material_reports: Arc::new(MaterialReportQueries::new(gateway.clone())),
            submit_time_entry: Arc::new(SubmitTimeEntryHandler::new(gateway.clone())),
            edit_time_entry: Arc::new(EditTimeEntryHandler::new(gateway.clone())),
            delete_time_entry: Arc::new(DeleteTimeEntryHandler::new(gateway.clone())),
            add_employee: Arc::new(AddEmployeeHandler::new(gateway.clone())),
            delete_employee: Arc::new(DeleteEmployeeHandler::new(gateway.clone())),
            add_project: Arc::new(AddProjectHandler::new(gateway.clone())),
            mark_material_reviewed: Arc::new(MarkMaterialReviewedHandler::new(gateway)),
        }
    }
}
