use std::sync::Arc;

use axum::{Router, http::HeaderValue, routing::get};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use loancalc::errors::Report;
use loancalc::log;
use loancalc_backend::config::{DatabaseConfig, ServerConfig};
use loancalc_backend::{AppState, db, handlers};

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    loancalc::log::setup()?;

    let server = ServerConfig::from_env()?;
    db::init(&DatabaseConfig::from_env()?)?;
    let state = Arc::new(AppState::from_shared_pool()?);

    let app = Router::new()
        .route("/api/health", get(handlers::health::get))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(server.addr).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

fn cors() -> CorsLayer {
    use axum::http::{Method, header};

    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        [3000, 8000, 8080, 8081, 5173]
            .into_iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        // Production origins - add your domains here
        vec![]
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                log::error!("Failed to install SIGTERM handler: {err}");
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

    log::info!("Signal received, starting graceful shutdown");
}
