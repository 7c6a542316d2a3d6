//! API route handlers for the gateway.

use axum::{Json, extract::State};
use std::sync::Arc;

use gearbot_core::types::ChatMessage;

use super::server::AppState;

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "gearbot-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// System information endpoint.
pub async fn system_info(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let uptime = state.start_time.elapsed();
    let pair = state.store.snapshot();
    Json(serde_json::json!({
        "name": state.config.identity.name,
        "version": env!("CARGO_PKG_VERSION"),
        "platform": format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        "uptime_secs": uptime.as_secs(),
        "greeting": state.config.identity.greeting,
        "example_questions": state.config.identity.example_questions,
        "data": {
            "products": pair.catalog.products.len(),
            "videos": pair.media.videos.len(),
            "loaded_at": pair.catalog.loaded_at,
            "usable": !pair.is_unusable(),
        },
        "gateway": {
            "host": state.config.gateway.host,
            "port": state.config.gateway.port,
            "require_pairing": state.config.gateway.require_pairing,
        }
    }))
}

/// Chat endpoint — one query in, one formatted answer out.
///
/// Reuses the caller's `session_id` when given, otherwise opens a fresh
/// session; either way the exchange is appended to that session's transcript.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    let message = body["message"].as_str().unwrap_or("");
    if message.is_empty() {
        return Json(serde_json::json!({"ok": false, "error": "Empty message"}));
    }
    let session_id = body["session_id"]
        .as_str()
        .map(String::from)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let pair = state.store.snapshot();
    let reply = state.responder.answer(message, &pair);

    let greeting = &state.config.identity.greeting;
    state.sessions.append(&session_id, greeting, ChatMessage::user(message));
    state.sessions.append(&session_id, greeting, ChatMessage::assistant(reply.clone()));

    Json(serde_json::json!({
        "ok": true,
        "session_id": session_id,
        "reply": reply,
    }))
}

/// Transcript of one session.
pub async fn session_history(
    State(state): State<Arc<AppState>>,
    axum::extract::Path(id): axum::extract::Path<String>,
) -> Json<serde_json::Value> {
    match state.sessions.history(&id) {
        Some(messages) => Json(serde_json::json!({
            "ok": true,
            "session_id": id,
            "messages": messages,
        })),
        None => Json(serde_json::json!({"ok": false, "error": "Unknown session"})),
    }
}

/// Raw products table preview.
pub async fn data_products(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let pair = state.store.snapshot();
    Json(serde_json::json!({
        "ok": true,
        "count": pair.catalog.products.len(),
        "fingerprint": pair.catalog.fingerprint,
        "loaded_at": pair.catalog.loaded_at,
        "products": pair.catalog.products,
    }))
}

/// Raw videos table preview.
pub async fn data_videos(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let pair = state.store.snapshot();
    Json(serde_json::json!({
        "ok": true,
        "count": pair.media.videos.len(),
        "fingerprint": pair.media.fingerprint,
        "loaded_at": pair.media.loaded_at,
        "videos": pair.media.videos,
    }))
}

/// Force a snapshot reload of both tables.
pub async fn reload_data(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let pair = state.store.reload();
    tracing::info!(
        "manual reload: {} products, {} videos",
        pair.catalog.products.len(),
        pair.media.videos.len()
    );
    Json(serde_json::json!({
        "ok": true,
        "products": pair.catalog.products.len(),
        "videos": pair.media.videos.len(),
    }))
}
