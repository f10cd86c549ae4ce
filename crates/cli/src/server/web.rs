use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use fortimac_api::{create_api_routes, AppState};
use fortimac_domain::config::ServerConfig;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if server.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

pub async fn start_web_server(state: AppState, server: &ServerConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = server.socket_addr()?;
    let app = create_app(state, server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(bind_address = %addr, "Web server listening");
    info!("API: http://{}/api/ConvertMacAddress", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
