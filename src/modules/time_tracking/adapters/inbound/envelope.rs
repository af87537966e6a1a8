// Response envelope shared by every HTTP inbound adapter.
//
// Every body carries `success`. Failures add an `error` message; successes add the
// payload of the use case, or nothing for plain acknowledgements.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::time_tracking::application::errors::ApplicationError;

#[derive(Debug, Serialize)]
pub struct Acknowledged {
    pub success: bool,
}

impl Acknowledged {
    pub fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
}

impl From<JsonRejection> for ApplicationError {
    fn from(rejection: JsonRejection) -> Self {
        ApplicationError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Validation(_) | ApplicationError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Store(error) => {
                tracing::error!(error = %error, "document store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Failure {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
