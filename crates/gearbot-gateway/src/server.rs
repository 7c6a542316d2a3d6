//! HTTP server implementation using Axum.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use gearbot_catalog::SnapshotStore;
use gearbot_core::config::GearbotConfig;
use gearbot_core::error::{GearbotError, Result};
use gearbot_engine::Responder;

use crate::sessions::SessionRegistry;

/// Shared state for the gateway server.
pub struct AppState {
    pub config: GearbotConfig,
    pub store: Arc<SnapshotStore>,
    pub responder: Responder,
    pub sessions: SessionRegistry,
    pub start_time: std::time::Instant,
    pub pairing_code: Option<String>,
}

/// Pairing code auth middleware — validates X-Pairing-Code header or ?code=
/// query.
async fn require_pairing(
    State(state): State<Arc<AppState>>,
    req: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> axum::response::Response {
    // If no pairing code configured, allow all
    let Some(expected) = &state.pairing_code else {
        return next.run(req).await;
    };

    let from_header = req
        .headers()
        .get("X-Pairing-Code")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if from_header == expected {
        return next.run(req).await;
    }

    if let Some(query) = req.uri().query() {
        for pair in query.split('&') {
            if let Some(code) = pair.strip_prefix("code=") {
                if code == expected {
                    return next.run(req).await;
                }
            }
        }
    }

    axum::response::Response::builder()
        .status(axum::http::StatusCode::UNAUTHORIZED)
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from(
            serde_json::json!({"ok": false, "error": "Unauthorized — invalid or missing pairing code"})
                .to_string(),
        ))
        .unwrap()
}

/// Verify pairing code endpoint (public).
async fn verify_pairing(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    let code = body["code"].as_str().unwrap_or("");
    match &state.pairing_code {
        Some(expected) if code == expected => Json(serde_json::json!({"ok": true})),
        Some(_) => Json(serde_json::json!({"ok": false, "error": "Invalid pairing code"})),
        None => Json(serde_json::json!({"ok": true})), // no code required
    }
}

fn generate_pairing_code() -> String {
    use rand::Rng;
    format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))
}

/// Build the Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Protected routes — require valid pairing code when one is configured
    let protected = Router::new()
        .route("/api/v1/info", get(super::routes::system_info))
        .route("/api/v1/chat", post(super::routes::chat))
        .route("/api/v1/sessions/{id}/history", get(super::routes::session_history))
        .route("/api/v1/data/products", get(super::routes::data_products))
        .route("/api/v1/data/videos", get(super::routes::data_videos))
        .route("/api/v1/data/reload", post(super::routes::reload_data))
        .layer(axum::middleware::from_fn_with_state(state.clone(), require_pairing));

    Router::new()
        .route("/health", get(super::routes::health_check))
        .route("/api/v1/pair/verify", post(verify_pairing))
        .merge(protected)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway and serve until ctrl-c.
pub async fn run(config: GearbotConfig, store: Arc<SnapshotStore>) -> Result<()> {
    let gateway = config.gateway.clone();
    let pairing_code = if gateway.require_pairing {
        let code = gateway.pairing_code.clone().unwrap_or_else(generate_pairing_code);
        tracing::info!("🔑 pairing code: {code}");
        Some(code)
    } else {
        None
    };

    let state = Arc::new(AppState {
        responder: Responder::new(config.engine.clone()),
        sessions: SessionRegistry::new(),
        start_time: std::time::Instant::now(),
        pairing_code,
        store,
        config,
    });

    let addr = format!("{}:{}", gateway.host, gateway.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| GearbotError::Gateway(format!("bind {addr}: {e}")))?;
    tracing::info!("🚀 GearBot gateway listening on http://{addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await
        .map_err(|e| GearbotError::Gateway(format!("server error: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_code_is_six_digits() {
        let code = generate_pairing_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_router_builds() {
        let config = GearbotConfig::default();
        let state = Arc::new(AppState {
            responder: Responder::new(config.engine.clone()),
            sessions: SessionRegistry::new(),
            start_time: std::time::Instant::now(),
            pairing_code: None,
            store: Arc::new(SnapshotStore::new(&config.data)),
            config,
        });
        let _router = build_router(state);
    }
}
