use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::ledger::LedgerError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Fields 'amount' and 'message' are required")]
    MissingFields,

    #[error("Invalid 'amount'")]
    InvalidAmount,

    #[error("Empty 'message' not allowed")]
    EmptyMessage,

    #[error("Internal error")]
    InternalError(#[from] LedgerError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidJson
            | AppError::MissingFields
            | AppError::InvalidAmount
            | AppError::EmptyMessage => StatusCode::BAD_REQUEST,
            AppError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidJson.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidAmount.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::EmptyMessage.status(), StatusCode::BAD_REQUEST);

        let overflow = AppError::from(LedgerError::Overflow {
            label: "Sarah".to_string(),
        });
        assert_eq!(overflow.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(overflow.to_string(), "Internal error");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::MissingFields.to_string(),
            "Fields 'amount' and 'message' are required"
        );
        assert_eq!(AppError::InvalidAmount.to_string(), "Invalid 'amount'");
        assert_eq!(AppError::EmptyMessage.to_string(), "Empty 'message' not allowed");
    }
}
