//! # pay-core
//!
//! Core types and traits for the nowpay-relay payment relay.
//!
//! This crate provides:
//! - `PaymentProcessor` trait for the upstream processor client
//! - `InvoiceRequest` and `PaymentRequest` fixed outbound payloads
//! - `WebhookEvent` and `WebhookPayload` for IPN callbacks
//! - `PaymentError` and the `Absent` signal for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{InvoiceRequest, PaymentProcessor};
//!
//! let request = InvoiceRequest::demo_order("https://relay.example.com/webhook");
//!
//! match processor.create_invoice(&request).await {
//!     Ok(invoice) => println!("invoice: {invoice}"),
//!     Err(_absent) => println!("processor gave no result"),
//! }
//! ```

pub mod error;
pub mod payment;
pub mod processor;
pub mod request;
pub mod webhook;

// Re-exports for convenience
pub use error::{Absent, PaymentError, PaymentResult, UpstreamResult};
pub use payment::PaymentDetails;
pub use processor::{BoxedPaymentProcessor, PaymentProcessor};
pub use request::{InvoiceRequest, PaymentRequest};
pub use webhook::{FeeBreakdown, PaymentStatus, WebhookEvent, WebhookPayload};
