//! # pay-api
//!
//! HTTP API layer for nowpay-relay.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Payment link and payment creation relayed to NOWPayments
//! - Webhook endpoint for payment status callbacks
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/payment-link` | Create hosted payment link |
//! | POST | `/payment` | Create embedded payment |
//! | POST | `/webhook` | Payment status callback |
//! | GET | `/api` | Outbound connectivity demo |
//! | GET | `/` | Liveness check |

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppConfig, AppState};
