//! Crate error type.
//!
//! Geometry, scene, input, and animation operations are total; only engine
//! construction and configuration loading can fail.

/// Errors from engine construction and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("canvas error: {0}")]
    Canvas(String),
}
