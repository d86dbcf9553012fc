//! # Outbound Request Payloads
//!
//! Fixed-shape bodies sent to the processor. Nothing in here is derived from
//! the inbound HTTP request: the only input is the callback URL, which is
//! fixed for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// Hosted payment link (`POST /invoice`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// Price in `price_currency` units
    pub price_amount: f64,
    /// Fiat currency the price is quoted in
    pub price_currency: String,
    /// Crypto currency the customer pays with
    pub pay_currency: String,
    pub order_id: String,
    pub order_description: String,
    /// Redirect after a completed payment
    pub success_url: String,
    /// Redirect after the customer backs out
    pub cancel_url: String,
}

impl InvoiceRequest {
    /// The demo order every `/payment-link` call submits.
    pub fn demo_order(callback_url: &str) -> Self {
        Self {
            price_amount: 10.0,
            price_currency: "usd".to_string(),
            pay_currency: "usdt".to_string(),
            order_id: "order_123".to_string(),
            order_description: "Test Order".to_string(),
            success_url: callback_url.to_string(),
            cancel_url: callback_url.to_string(),
        }
    }
}

/// Embedded payment (`POST /payment`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub price_amount: f64,
    pub price_currency: String,
    pub pay_currency: String,
    /// Where the processor sends IPN status updates
    pub ipn_callback_url: String,
    pub order_id: String,
    pub order_description: String,
    /// Lock the exchange rate for the payment window
    pub is_fixed_rate: bool,
    /// Network and service fees are added to the customer's amount
    pub is_fee_paid_by_user: bool,
}

impl PaymentRequest {
    /// The demo payment every `/payment` call submits.
    pub fn demo_order(callback_url: &str) -> Self {
        Self {
            price_amount: 100.0,
            price_currency: "usd".to_string(),
            pay_currency: "btc".to_string(),
            ipn_callback_url: callback_url.to_string(),
            order_id: "demo-order-123".to_string(),
            order_description: "Demo payment for testing".to_string(),
            is_fixed_rate: false,
            is_fee_paid_by_user: true,
        }
    }
}
