//! Error types for the geogate location-authenticity system.
//!
//! This module provides error handling using [`thiserror`] for automatic
//! `Display` and `Error` trait implementations.
//!
//! # Error Hierarchy
//!
//! - [`DetectError`]: Top-level error type for the detection pipeline
//! - [`StoreError`]: Errors from history persistence backends
//!
//! Neither error type ever escapes the public `detect`/`validate` entry
//! points: store failures are degraded to an empty history inside the
//! history layer, and detection failures are mapped to a permissive
//! sentinel result. The types exist so internal layers can propagate
//! failures with `?` up to the single point where the fail-open policy
//! is applied.

use thiserror::Error;

/// A specialized `Result` type for detection operations.
pub type DetectResult<T> = Result<T, DetectError>;

/// Errors from history persistence backends.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    /// Backend I/O failure (read or write).
    #[error("store I/O error: {message}")]
    Io {
        /// Description of the I/O failure
        message: String,
    },

    /// Stored history document could not be encoded or decoded.
    #[error("store serialization error: {message}")]
    Serialization {
        /// Description of the codec failure
        message: String,
    },
}

impl StoreError {
    /// Creates a new I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a new serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Returns `true` if retrying the operation could succeed.
    ///
    /// I/O failures are transient in principle; a document that fails to
    /// decode will fail the same way every time until it is rewritten.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Io { .. } => true,
            Self::Serialization { .. } => false,
        }
    }
}

/// Top-level error type for the detection pipeline.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DetectError {
    /// History persistence error
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Fix timestamp cannot be represented as a calendar instant
    #[error("timestamp {timestamp_ms} ms is outside the representable range")]
    InvalidTimestamp {
        /// The out-of-range timestamp, milliseconds since epoch
        timestamp_ms: i64,
    },

    /// Configured UTC offset is not a valid offset
    #[error("UTC offset {offset_secs} s is not a valid offset")]
    InvalidUtcOffset {
        /// The invalid offset in seconds
        offset_secs: i32,
    },
}
