//! # Request Handlers
//!
//! Axum request handlers for the relay.
//! Payment handlers ignore the inbound body: the outbound payload is fixed.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pay_core::{InvoiceRequest, PaymentRequest, WebhookPayload};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Response Types
// =============================================================================

/// Envelope for payment and webhook responses
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

type Reply = (StatusCode, Json<ApiResponse>);

// =============================================================================
// Handlers
// =============================================================================

/// Liveness check
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "API is Live!" }))
}

/// Call a public endpoint to show outbound connectivity
#[instrument(skip(state))]
pub async fn demo_api(State(state): State<AppState>) -> impl IntoResponse {
    let result = state
        .http_client
        .get(&state.config.demo_api_url)
        .send()
        .await
        .and_then(|response| response.error_for_status());

    match result {
        Ok(response) => (
            StatusCode::OK,
            Json(json!({
                "message": "Demo API called (httpbin.org)",
                "data": response.status().as_u16(),
            })),
        ),
        Err(e) => {
            error!("Error calling external API: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to call external API" })),
            )
        }
    }
}

/// Create a hosted payment link
#[instrument(skip(state))]
pub async fn create_payment_link(State(state): State<AppState>) -> Reply {
    let request = InvoiceRequest::demo_order(&state.config.webhook_url);

    match state.processor.create_invoice(&request).await {
        Ok(invoice) => {
            info!("Payment link created for order {}", request.order_id);
            (
                StatusCode::OK,
                Json(ApiResponse::ok("Payment link created").with_data(invoice)),
            )
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::failure("Failed to create payment link")),
        ),
    }
}

/// Create a payment completed on the caller's own site
#[instrument(skip(state))]
pub async fn create_payment(State(state): State<AppState>) -> Reply {
    let request = PaymentRequest::demo_order(&state.config.webhook_url);

    match state.processor.create_payment(&request).await {
        Ok(payment) => {
            info!("Payment created for order {}", request.order_id);
            (
                StatusCode::OK,
                Json(ApiResponse::ok("Payment created successfully").with_data(payment)),
            )
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::failure("Failed to create payment")),
        ),
    }
}

/// Payment status callback. Always acknowledged.
///
/// A body that cannot be buffered (over the body limit, aborted upload) is
/// logged and acknowledged like any other.
#[instrument(skip(body))]
pub async fn webhook(body: Result<Bytes, BytesRejection>) -> Reply {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Unreadable webhook body: {}", rejection.body_text());
            return acknowledge();
        }
    };

    match WebhookPayload::parse(&body) {
        WebhookPayload::Typed(event) => info!(
            "Received webhook event: payment={}, status={}, order={:?}, paid={} {}, updated_at={:?}",
            event.payment_id,
            event.payment_status,
            event.order_id,
            event.actually_paid,
            event.pay_currency,
            event.updated_at()
        ),
        WebhookPayload::Untyped(value) => info!("Received webhook event: {}", value),
        WebhookPayload::Raw(text) => warn!("Received non-JSON webhook body: {}", text),
        WebhookPayload::Empty => warn!("Received empty webhook body"),
    }

    acknowledge()
}

fn acknowledge() -> Reply {
    (StatusCode::OK, Json(ApiResponse::ok("Webhook received")))
}

/// Fallback for unmatched routes
pub async fn not_found() -> Reply {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("API route does not exist")),
    )
}
