//! # GearBot Gateway
//!
//! HTTP API in front of the pure engine — the presentation collaborator.
//! Chat, per-session transcripts, raw table previews, and snapshot reload,
//! served by axum over one shared [`AppState`].

pub mod routes;
pub mod server;
pub mod sessions;

pub use server::{AppState, build_router, run};
pub use sessions::SessionRegistry;
