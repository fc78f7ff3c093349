//! Errors raised where text or files enter the engine.
//!
//! Geometry itself never fails: degenerate input resolves to a defined
//! sentinel instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid angle: {0}")]
    InvalidAngle(String),

    #[error("invalid distance: {0}")]
    InvalidDistance(String),

    #[error("unknown distance unit: {0}")]
    UnknownUnit(String),

    #[error("line {line}: {message}")]
    InvalidCoordinate { line: usize, message: String },

    #[error("unknown point: {0}")]
    UnknownPoint(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
