use crate::modules::time_tracking::application::document_gateway::DocumentGateway;
use crate::modules::time_tracking::use_cases::material_reports::projection::{
    MaterialLogs, MaterialReportRow, material_logs, reported_materials, reviewed_materials,
    unreviewed_materials,
};
use crate::shared::infrastructure::document_store::DocumentStoreError;
use std::sync::Arc;

pub struct MaterialReportQueries {
    gateway: Arc<DocumentGateway>,
}

impl MaterialReportQueries {
    pub fn new(gateway: Arc<DocumentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn logs(&self) -> Result<MaterialLogs, DocumentStoreError> {
        self.gateway.read(material_logs).await
    }

    pub async fn reported(&self) -> Result<Vec<MaterialReportRow>, DocumentStoreError> {
        self.gateway.read(reported_materials).await
    }

    pub async fn reviewed(&self) -> Result<Vec<MaterialReportRow>, DocumentStoreError> {
        self.gateway.read(reviewed_materials).await
    }

    pub async fn unreviewed(&self) -> Result<Vec<MaterialReportRow>, DocumentStoreError> {
        self.gateway.read(unreviewed_materials).await
    }
}
