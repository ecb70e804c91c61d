use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;

use crate::vat::CountryCode;

/// Error types for VAT pricing operations
#[derive(Debug, thiserror::Error)]
pub enum VatError {
    #[error("Invalid advertisement")]
    InvalidAd,

    #[error("Unknown VAT for country code {0}")]
    UnknownVat(CountryCode),

    #[error("Price {price} with multiplier {multiplier} is out of range")]
    PriceOverflow { price: i32, multiplier: Decimal },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl VatError {
    /// HTTP status and machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            VatError::InvalidAd => (StatusCode::BAD_REQUEST, "INVALID_ADVERTISEMENT"),
            VatError::UnknownVat(_) => (StatusCode::NOT_FOUND, "UNKNOWN_VAT"),
            VatError::PriceOverflow { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "PRICE_OVERFLOW"),
            VatError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            VatError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
        }
    }
}

impl From<sqlx::Error> for VatError {
    fn from(err: sqlx::Error) -> Self {
        VatError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for VatError {
    fn from(errors: validator::ValidationErrors) -> Self {
        VatError::ValidationError(errors.to_string())
    }
}

impl From<JsonRejection> for VatError {
    fn from(rejection: JsonRejection) -> Self {
        VatError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for VatError {
    fn from(rejection: PathRejection) -> Self {
        VatError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for VatError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        let message = match &self {
            VatError::DatabaseError(msg) => {
                // Never leak driver details to clients
                tracing::error!("Database error: {}", msg);
                "A database error occurred".to_string()
            }
            other => {
                tracing::warn!("VAT request rejected: {}", other);
                other.to_string()
            }
        };

        let body = Json(json!({
            "error_code": error_code,
            "message": message,
            "timestamp": Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}
