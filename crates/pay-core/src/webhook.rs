//! # Webhook Event Types
//!
//! Shape of the IPN callback the processor posts when a payment changes
//! status. The relay never rejects a callback: `WebhookPayload::parse`
//! classifies whatever arrived so it can be logged, and that is all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status reported by the processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Waiting,
    Finished,
    Expired,
    Canceled,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Waiting => write!(f, "waiting"),
            PaymentStatus::Finished => write!(f, "finished"),
            PaymentStatus::Expired => write!(f, "expired"),
            PaymentStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// Fee breakdown attached to a callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub currency: String,
    #[serde(default)]
    pub deposit_fee: f64,
    #[serde(default)]
    pub service_fee: f64,
    #[serde(default)]
    pub withdrawal_fee: f64,
}

impl FeeBreakdown {
    pub fn total(&self) -> f64 {
        self.deposit_fee + self.service_fee + self.withdrawal_fee
    }
}

/// IPN callback body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub payment_id: u64,
    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub invoice_id: Option<u64>,
    #[serde(default)]
    pub parent_payment_id: Option<u64>,

    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub order_description: Option<String>,

    #[serde(default)]
    pub price_amount: f64,
    #[serde(default)]
    pub price_currency: String,

    #[serde(default)]
    pub pay_address: String,
    #[serde(default)]
    pub pay_amount: f64,
    #[serde(default)]
    pub pay_currency: String,
    #[serde(default)]
    pub payin_extra_id: Option<String>,
    #[serde(default)]
    pub payment_extra_ids: Option<String>,

    #[serde(default)]
    pub actually_paid: f64,
    #[serde(default)]
    pub actually_paid_at_fiat: f64,

    #[serde(default)]
    pub outcome_amount: f64,
    #[serde(default)]
    pub outcome_currency: String,

    #[serde(default)]
    pub purchase_id: String,

    #[serde(default)]
    pub fee: Option<FeeBreakdown>,

    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub updated_at: i64,
}

impl WebhookEvent {
    /// When the processor last touched this payment
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.updated_at)
    }
}

/// Whatever arrived on the webhook endpoint, classified for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookPayload {
    /// Body matched the IPN shape
    Typed(WebhookEvent),
    /// Valid JSON of some other shape
    Untyped(serde_json::Value),
    /// Not JSON at all
    Raw(String),
    /// No body
    Empty,
}

impl WebhookPayload {
    /// Classify a raw body. Never fails.
    pub fn parse(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return WebhookPayload::Empty;
        }

        if let Ok(event) = serde_json::from_slice::<WebhookEvent>(body) {
            return WebhookPayload::Typed(event);
        }

        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) => WebhookPayload::Untyped(value),
            Err(_) => WebhookPayload::Raw(String::from_utf8_lossy(body).into_owned()),
        }
    }

    pub fn event(&self) -> Option<&WebhookEvent> {
        match self {
            WebhookPayload::Typed(event) => Some(event),
            _ => None,
        }
    }
}
