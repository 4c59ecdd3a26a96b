/// Error types for instagram-gateway
///
/// Every error path renders the same `{"success": false, "error": ...}`
/// envelope the API promises. Errors are terminal for the request; nothing
/// is retried.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

use crate::clients::graph::UpstreamError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("access_token query parameter is required")]
    MissingCredential,

    #[error("No Facebook pages found for this access token")]
    NoLinkedPages,

    #[error("No Instagram business account is linked to the Facebook page")]
    NoBusinessAccount,

    #[error("Business account '{0}' not found for this access token")]
    UsernameMismatch(String),

    #[error("Graph API request failed: {0}")]
    Upstream(#[from] UpstreamError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MissingCredential => StatusCode::BAD_REQUEST,
            AppError::UsernameMismatch(_) => StatusCode::NOT_FOUND,
            // Page/account linkage is outside the caller's visibility at
            // request time; linkage failures are server errors.
            AppError::NoLinkedPages
            | AppError::NoBusinessAccount
            | AppError::Upstream(_)
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}
