//! # Created Payment
//!
//! Typed view over the processor's answer to `POST /payment`. The relay
//! returns the upstream JSON untouched; this view only pulls out the fields
//! worth logging.

use serde::{Deserialize, Serialize};

/// Created payment as reported by the processor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    #[serde(deserialize_with = "string_or_number")]
    pub payment_id: String,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub pay_address: Option<String>,
    #[serde(default)]
    pub pay_amount: Option<f64>,
    #[serde(default)]
    pub pay_currency: Option<String>,
    #[serde(default)]
    pub price_amount: Option<f64>,
    #[serde(default)]
    pub price_currency: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub is_fixed_rate: Option<bool>,
    #[serde(default)]
    pub is_fee_paid_by_user: Option<bool>,
    #[serde(default)]
    pub expiration_estimate_date: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PaymentDetails {
    /// Read the view out of an upstream body, if it has the shape.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

// The processor has sent payment ids both as strings and as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
