//! # nowpay-relay
//!
//! Minimal relay between a client app and the NOWPayments API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (all optional)
//! export NOW_PAYMENTS_API_KEY=...
//! export BASE_URL=https://relay.example.com
//! export NOW_PAYMENTS_WEBHOOK_URL=https://relay.example.com/webhook
//!
//! # Run the server
//! nowpay-relay
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.processor.provider_name());
    info!("Webhook callback URL: {}", state.config.webhook_url);

    // Create router
    let app = routes::create_router(state);

    info!("Server running on port {}", addr.port());

    if !is_prod {
        info!("Health: GET http://{}/", addr);
        info!("Payment link: POST http://{}/payment-link", addr);
        info!("Webhook: POST http://{}/webhook", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` filters, `LOG_FORMAT=json` switches to structured output.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}
