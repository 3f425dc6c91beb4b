//! Unified application error type.
//! All modules (db, core, cli, places, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Boundary validation
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Place search
    // ---------------------------
    #[error("Search query is required")]
    EmptyQuery,

    #[error("Missing configuration: {0}")]
    ConfigMissing(String),

    #[error("Place search is temporarily unavailable, try again later")]
    UpstreamUnavailable,

    #[error("Place search request failed with status {0}")]
    UpstreamRequestFailed(u16),

    #[error("Network error reaching place search: {0}")]
    Transport(String),

    #[error("No matching places found")]
    NoResults,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
