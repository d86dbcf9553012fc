//! # pay-nowpayments
//!
//! NOWPayments client for nowpay-relay.
//!
//! Wraps the two NOWPayments operations the relay needs:
//!
//! 1. **Invoice** (`POST /invoice`) - hosted payment link
//! 2. **Payment** (`POST /payment`) - payment completed on your own site
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::{InvoiceRequest, PaymentProcessor};
//! use pay_nowpayments::NowPaymentsClient;
//!
//! let client = NowPaymentsClient::from_env()?;
//!
//! let request = InvoiceRequest::demo_order("https://relay.example.com/webhook");
//! if let Ok(invoice) = client.create_invoice(&request).await {
//!     // Redirect user to invoice["invoice_url"]
//! }
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::NowPaymentsClient;
pub use config::{NowPaymentsConfig, API_KEY_HEADER, DEFAULT_API_BASE_URL};
