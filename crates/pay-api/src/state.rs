//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment processor, an outbound HTTP client and configuration.

use pay_core::BoxedPaymentProcessor;
use pay_nowpayments::NowPaymentsClient;
use std::net::SocketAddr;
use std::sync::Arc;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Endpoint the `/api` connectivity demo calls
pub const DEFAULT_DEMO_API_URL: &str = "https://httpbin.org";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Externally visible base URL
    pub base_url: String,
    /// Callback URL handed to the processor (redirects and IPN)
    pub webhook_url: String,
    /// Target of the `/api` connectivity demo
    pub demo_api_url: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Every value has a default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = var("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let base_url = var("BASE_URL").unwrap_or_else(|| format!("http://localhost:{}", port));
        let webhook_url = var("NOW_PAYMENTS_WEBHOOK_URL")
            .unwrap_or_else(|| format!("{}/webhook", base_url.trim_end_matches('/')));

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            base_url,
            webhook_url,
            demo_api_url: var("DEMO_API_URL").unwrap_or_else(|| DEFAULT_DEMO_API_URL.to_string()),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Upstream payment processor
    pub processor: BoxedPaymentProcessor,
    /// Plain HTTP client for the connectivity demo
    pub http_client: reqwest::Client,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by NOWPayments
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let client = NowPaymentsClient::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize NOWPayments: {}", e))?;

        Ok(Self::with_processor(config, Arc::new(client)))
    }

    /// Assemble state around an explicit processor
    pub fn with_processor(config: AppConfig, processor: BoxedPaymentProcessor) -> Self {
        Self {
            processor,
            http_client: reqwest::Client::new(),
            config,
        }
    }
}
