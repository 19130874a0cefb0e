//! Crate error type
//!
//! Every fallible operation (mode callbacks, loading, drawing) returns
//! [`Result`]. An error reaching the driving loop ends the session.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid beatmap: {0}")]
    InvalidBeatmap(String),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
