//! # Routes
//!
//! Axum router configuration for the relay.

use crate::error::handle_panic;
use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Create the main application router
///
/// Routes:
/// - POST /payment-link - Create a hosted payment link
/// - POST /payment - Create an embedded payment
/// - POST /webhook - Payment status callback (always acknowledged)
/// - GET  /api - Outbound connectivity demo
/// - GET  / - Liveness check
///
/// Anything else, including a known path with the wrong method, answers 404.
pub fn create_router(state: AppState) -> Router {
    finish(payment_routes(), state)
}

fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api", get(handlers::demo_api))
        .route("/payment-link", post(handlers::create_payment_link))
        .route("/payment", post(handlers::create_payment))
        .route("/webhook", post(handlers::webhook))
}

/// Fallback, middleware and state shared by every router this crate builds
fn finish(routes: Router<AppState>, state: AppState) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // One line per request at the default log level
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    routes
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(trace)
        // State
        .with_state(state)
}
