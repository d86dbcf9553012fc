//! # Payment Processor Trait
//!
//! The seam between the HTTP surface and the upstream processor.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          PaymentProcessor (trait)            │
//! │  ├── create_invoice()   POST /invoice        │
//! │  ├── create_payment()   POST /payment        │
//! │  └── provider_name()                         │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!          ┌────────────┴────────────┐
//!  ┌───────┴────────┐        ┌───────┴────────┐
//!  │NowPaymentsClient│       │ test stubs     │
//!  └────────────────┘        └────────────────┘
//! ```

use crate::error::UpstreamResult;
use crate::request::{InvoiceRequest, PaymentRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Upstream payment processor.
///
/// Every method makes a single attempt and answers with either the
/// processor's JSON body or `Absent`. Implementations must not leak the
/// cause of a failure through the return value.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a hosted payment link.
    async fn create_invoice(&self, request: &InvoiceRequest) -> UpstreamResult<serde_json::Value>;

    /// Create a payment the customer completes without leaving the site.
    async fn create_payment(&self, request: &PaymentRequest) -> UpstreamResult<serde_json::Value>;

    /// Provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;
