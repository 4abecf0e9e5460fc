//! Documentation of a payment leaderboard.
//!
//! Payment notifications (e.g. Venmo webhooks relayed by a forwarder) are posted to the server,
//! grouped by their note, and summed. A single static page polls the leaderboard.
//!
//!
//!
//! # Endpoints
//!
//! - `GET /` serves `index.html` from the static directory
//! - `GET /static/*` serves any other asset from the static directory
//! - `GET /api/leaderboard` returns `[{name, total}]`, highest total first
//! - `POST /api/payment` takes `{amount, message}` and returns `{ok, label, new_total}`
//!
//!
//!
//! # Payments
//!
//! - If `WEBHOOK_SECRET` is set, the `X-Webhook-Token` header must match it, otherwise 401
//! - Body is read as JSON no matter the content type
//! - `amount` may be a number or a numeric string, negatives and zero are allowed
//! - `message` is trimmed into the label, labels are case sensitive
//! - Nothing is written unless every check passes
//!
//!
//!
//! # Notes
//!
//! Totals are kept as `rust_decimal::Decimal` so `0.1 + 0.2` stays `0.3`. Floats only show up when a
//! total is written into a response.
//!
//! No persistence. A restart clears the leaderboard.
//!
//!
//!
//! # Setup
//!
//! Run locally.
//! ```sh
//! RUST_LOG=info PORT=8080 WEBHOOK_SECRET=changeme cargo run
//! ```
//!
//! Send a test payment.
//! ```sh
//! cargo run -p tester -- 9.00 Sarah --token changeme --leaderboard
//! ```
//!
//! Verbose ledger logging.
//! ```sh
//! cargo run --features verbose
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    http::{HeaderName, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
#[cfg(unix)]
use signal::unix::{SignalKind, signal};
use signal::ctrl_c;
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

use config::{Config, TOKEN_HEADER};
use routes::{leaderboard_handler, payment_handler};
use state::State;

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(TOKEN_HEADER)])
        .max_age(Duration::from_secs(60 * 60));

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/api/leaderboard", get(leaderboard_handler))
        .route("/api/payment", post(payment_handler))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load().inspect_err(|e| error!("{e:#}"))?;

    info!("Initializing state...");
    let state = State::new(config);

    info!("Starting server...");
    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down, {} labels dropped", state.ledger.len());

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
