use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Access service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccessServiceError {
    #[error("missing key or email")]
    MissingInput,
    #[error("key does not exist or was deleted")]
    InvalidKey,
    #[error("key belongs to another user")]
    OwnershipMismatch,
    #[error("key expired and deleted")]
    KeyExpired,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccessServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingInput => "MISSING_INPUT",
            Self::InvalidKey => "INVALID_KEY",
            Self::OwnershipMismatch => "OWNERSHIP_MISMATCH",
            Self::KeyExpired => "KEY_EXPIRED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AccessServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingInput => StatusCode::BAD_REQUEST,
            // A deleted key, a foreign key and an expired key all deny access
            // the same way; an expired or unknown code must not be
            // distinguishable from one that never existed.
            Self::InvalidKey | Self::OwnershipMismatch | Self::KeyExpired => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for every request, and 4xx are expected client errors. Internal errors
        // need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
