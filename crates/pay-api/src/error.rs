//! # Error Responses
//!
//! The centralized failure path: anything a handler does not answer itself
//! ends up here as `500 {success:false, status:500, message}`.
//! Panics count as unhandled errors; `handle_panic` plugs into
//! `CatchPanicLayer` so one bad request never takes the process down.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;
use thiserror::Error;
use tracing::error;

/// Unhandled handler failure
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of the centralized 500 response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!("Unhandled error: {}", message);

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = ErrorBody {
            success: false,
            status: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Responder for `tower_http::catch_panic::CatchPanicLayer::custom`
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::new(panic_message(err.as_ref())).into_response()
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_response_shape() {
        let response = ApiError::new("database on fire").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "status": 500, "message": "database on fire" })
        );
    }

    #[tokio::test]
    async fn test_panic_payloads() {
        let response = handle_panic(Box::new("static message"));
        assert_eq!(body_json(response).await["message"], "static message");

        let response = handle_panic(Box::new(format!("formatted {}", 42)));
        assert_eq!(body_json(response).await["message"], "formatted 42");

        let response = handle_panic(Box::new(7_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "Unknown panic message");
    }
}
