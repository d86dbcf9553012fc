//! # NOWPayments API Client
//!
//! Thin authenticated wrapper around `reqwest` for the NOWPayments REST API.
//! Every call is a single attempt. Failures are logged with their cause and
//! then collapsed into `Absent`, so callers only ever see "a result" or
//! "no result".

use crate::config::NowPaymentsConfig;
use async_trait::async_trait;
use pay_core::{
    InvoiceRequest, PaymentDetails, PaymentError, PaymentProcessor, PaymentRequest,
    PaymentResult, UpstreamResult,
};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

/// NOWPayments client
#[derive(Debug, Clone)]
pub struct NowPaymentsClient {
    config: NowPaymentsConfig,
    client: Client,
}

impl NowPaymentsClient {
    /// Create a new client.
    ///
    /// Fails only when the configured API key cannot be sent as a header.
    pub fn new(config: NowPaymentsConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .default_headers(config.default_headers()?)
            .build()
            .map_err(|e| PaymentError::Configuration(format!("HTTP client: {}", e)))?;

        if config.is_placeholder_key() {
            warn!("NOW_PAYMENTS_API_KEY not set, upstream calls will be rejected");
        }

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(NowPaymentsConfig::from_env())
    }

    /// Issue a request against `path` (relative to the base URL).
    #[instrument(skip(self, body), fields(provider = "nowpayments"))]
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> UpstreamResult<Value>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.send(method, path, body).await.map_err(|e| {
            match &e {
                PaymentError::ProviderError { .. } => warn!("NOWPayments rejected {}: {}", path, e),
                _ => error!("NOWPayments call to {} failed: {}", path, e),
            }
            e.into_absent()
        })
    }

    /// POST a JSON body
    pub async fn post<B>(&self, path: &str, body: &B) -> UpstreamResult<Value>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// GET without a body
    pub async fn get(&self, path: &str) -> UpstreamResult<Value> {
        self.request::<Value>(Method::GET, path, None).await
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> PaymentResult<Value>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.config.endpoint(path);
        debug!("NOWPayments request: {} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            return Err(PaymentError::ProviderError {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        if text.trim().is_empty() {
            return Err(PaymentError::EmptyResponse);
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Null) => Err(PaymentError::EmptyResponse),
            Ok(value) => Ok(value),
            Err(e) => Err(PaymentError::Serialization(format!(
                "Failed to parse NOWPayments response: {}",
                e
            ))),
        }
    }
}

#[async_trait]
impl PaymentProcessor for NowPaymentsClient {
    async fn create_invoice(&self, request: &InvoiceRequest) -> UpstreamResult<Value> {
        let invoice = self.post("/invoice", request).await?;

        let (id, url) = invoice_summary(&invoice);
        info!(
            "Created NOWPayments invoice: id={}, url={}, order={}",
            id, url, request.order_id
        );
        Ok(invoice)
    }

    async fn create_payment(&self, request: &PaymentRequest) -> UpstreamResult<Value> {
        let payment = self.post("/payment", request).await?;

        match PaymentDetails::from_value(&payment) {
            Some(details) => info!(
                "Created NOWPayments payment: id={}, status={:?}, pay {:?} {:?} to {:?}",
                details.payment_id,
                details.payment_status,
                details.pay_amount,
                details.pay_currency,
                details.pay_address
            ),
            None => info!("Created NOWPayments payment for order {}", request.order_id),
        }
        Ok(payment)
    }

    fn provider_name(&self) -> &'static str {
        "nowpayments"
    }
}

// Id and hosted URL of a created invoice, for logging.
fn invoice_summary(invoice: &Value) -> (String, &str) {
    let id = match invoice.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    };
    let url = invoice
        .get("invoice_url")
        .and_then(Value::as_str)
        .unwrap_or("-");
    (id, url)
}

// NOWPayments error bodies look like {"statusCode":400,"code":"...","message":"..."}.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
