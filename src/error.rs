use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Errors surfaced by the recommendation layer
///
/// An empty result set is never an error; recommenders return an empty
/// vector for "no match".
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("{0}")]
    Validation(String),

    #[error("Listing data unavailable: {0}")]
    DataUnavailable(#[from] StoreError),
}

impl RecommendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<validator::ValidationErrors> for RecommendError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl error::ResponseError for RecommendError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DataUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Validation(message) => message.clone(),
            // Store failures stay in the logs, clients get a generic message
            Self::DataUnavailable(e) => {
                tracing::error!("Listing store failure: {}", e);
                "Listing data is currently unavailable".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(message))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    RecommendError::validation(format!("Invalid JSON: {}", err)).into()
}
