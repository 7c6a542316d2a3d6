//! Error types for GearBot.

use thiserror::Error;

/// Top-level error enum for GearBot.
#[derive(Debug, Error)]
pub enum GearbotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GearbotError>;
