// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of an outbound call to Duffel or Stripe. Handlers decide what
/// each variant means for the HTTP response, the clients only classify.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("upstream transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("MongoDB error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Request timeout")]
    UpstreamTimeout,

    #[error("{detail}")]
    Upstream { status: u16, detail: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payment error: {0}")]
    Payment(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string()),
            AppError::UpstreamTimeout => (StatusCode::REQUEST_TIMEOUT, "Request timeout".to_string()),
            AppError::Upstream { status, .. } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Upstream error".to_string(),
            ),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation failed".to_string()),
            AppError::Payment(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Payment error".to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
            "success": false,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    pub fn payment(msg: impl Into<String>) -> Self {
        AppError::Payment(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn timeout_renders_as_408() {
        let response = AppError::UpstreamTimeout.into_response();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Request timeout");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn upstream_error_keeps_provider_status_and_body() {
        let err = AppError::Upstream {
            status: 422,
            detail: "Flight search failed: invalid cabin class".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("invalid cabin class"));
    }

    #[tokio::test]
    async fn validation_renders_as_400() {
        let response = AppError::Validation("origin is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn reqwest_errors_classify_timeouts() {
        // A status-less builder error is transport, never a timeout.
        let err = reqwest::Client::new()
            .get("http://[invalid")
            .build()
            .unwrap_err();
        assert!(matches!(
            UpstreamError::from(err),
            UpstreamError::Transport(_)
        ));
    }
}
