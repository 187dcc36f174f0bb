//! Error types for WBGT Analytics

use thiserror::Error;

/// Errors that can occur during ingestion or report encoding.
///
/// Degenerate-but-valid inputs (short sequences, a zero trend baseline,
/// missing optional fields) never surface here; they produce documented
/// fallback values instead. These variants cover malformed payloads and
/// contract violations only.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Failed to parse payload: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Timestamp parse error: {0}")]
    TimestampParse(String),

    #[error("Non-finite value in field: {0}")]
    NonFiniteValue(&'static str),

    #[error("Empty sequence passed to {0}")]
    EmptySequence(&'static str),
}
