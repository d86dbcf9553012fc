//! # NOWPayments Configuration
//!
//! Configuration for the NOWPayments integration.
//! Loaded once at startup and handed to the client by value.

use pay_core::{PaymentError, PaymentResult};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// Production API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.nowpayments.io/v1";

/// Placeholder key used when `NOW_PAYMENTS_API_KEY` is unset
pub const PLACEHOLDER_API_KEY: &str = "xxxx";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// NOWPayments API configuration
#[derive(Debug, Clone)]
pub struct NowPaymentsConfig {
    /// API key from the NOWPayments dashboard
    pub api_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl NowPaymentsConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `NOW_PAYMENTS_API_KEY` (default `xxxx`)
    /// - `NOW_PAYMENTS_API_URL` (default production URL)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("NOW_PAYMENTS_API_KEY")
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string());

        let api_base_url = lookup("NOW_PAYMENTS_API_URL")
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_key,
            api_base_url,
        }
    }

    /// Create config with an explicit key against the production API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// True when no real key was supplied
    pub fn is_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }

    /// Headers attached to every request
    pub fn default_headers(&self) -> PaymentResult<HeaderMap> {
        let mut api_key = HeaderValue::from_str(&self.api_key).map_err(|_| {
            PaymentError::Configuration(
                "NOW_PAYMENTS_API_KEY is not a valid header value".to_string(),
            )
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Absolute URL for a path relative to the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for NowPaymentsConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NowPaymentsConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_key, "xxxx");
        assert_eq!(config.api_base_url, "https://api.nowpayments.io/v1");
        assert!(config.is_placeholder_key());
    }

    #[test]
    fn test_overrides() {
        let config = NowPaymentsConfig::from_lookup(lookup_from(&[
            ("NOW_PAYMENTS_API_KEY", "NP-KEY-123"),
            ("NOW_PAYMENTS_API_URL", "https://api-sandbox.nowpayments.io/v1"),
        ]));
        assert_eq!(config.api_key, "NP-KEY-123");
        assert_eq!(config.api_base_url, "https://api-sandbox.nowpayments.io/v1");
        assert!(!config.is_placeholder_key());
    }

    #[test]
    fn test_default_headers() {
        let headers = NowPaymentsConfig::new("NP-KEY-123").default_headers().unwrap();
        assert_eq!(headers.get("x-api-key").unwrap(), "NP-KEY-123");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
    }

    #[test]
    fn test_invalid_key_is_config_error() {
        let result = NowPaymentsConfig::new("bad\nkey").default_headers();
        assert!(matches!(result, Err(PaymentError::Configuration(_))));
    }

    #[test]
    fn test_endpoint_joining() {
        let config = NowPaymentsConfig::new("k").with_api_base_url("http://127.0.0.1:9000/v1/");
        assert_eq!(config.endpoint("/invoice"), "http://127.0.0.1:9000/v1/invoice");
        assert_eq!(config.endpoint("payment"), "http://127.0.0.1:9000/v1/payment");
    }
}
