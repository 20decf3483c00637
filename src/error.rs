//! Error types for telemetry processing.
//!
//! All errors implement the `std::error::Error` trait and carry enough
//! structured context to decide whether the current datagram should simply be
//! dropped (the normal reaction on a lossy UDP feed) or the caller has a real
//! problem (bad bind address, closed socket).
//!
//! ## Recovery
//!
//! UDP is lossy by design, so nothing in this crate retries internally.
//! [`TelemetryError::is_retryable`] tells the caller whether calling the same
//! operation again on the next tick can succeed:
//!
//! ```rust
//! use paddock::TelemetryError;
//!
//! let error = TelemetryError::oversize_datagram(70_000, 65_536);
//! assert!(!error.is_retryable());
//! ```

use std::time::Duration;
use thiserror::Error;

/// Result type alias for telemetry operations.
pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;

/// Main error type for telemetry operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error("failed to bind UDP socket on {addr}: {reason}")]
    Bind {
        addr: String,
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("UDP socket error: {reason}")]
    Socket {
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("datagram of {len} bytes exceeds the {max} byte limit")]
    OversizeDatagram { len: usize, max: usize },

    #[error("truncated packet: {context} needs {needed} bytes, {available} available")]
    Truncated { context: &'static str, needed: usize, available: usize },

    #[error("malformed {context}: {details}")]
    Malformed { context: &'static str, details: String },

    #[error("vehicle index {index} out of range (max {max})")]
    VehicleIndex { index: usize, max: usize },

    #[error("operation timed out after {duration:?}")]
    Timeout { duration: Duration },
}

impl TelemetryError {
    /// Returns whether the same operation can reasonably succeed on a later
    /// tick without any intervention.
    pub fn is_retryable(&self) -> bool {
        match self {
            TelemetryError::Socket { .. } => true,
            TelemetryError::Timeout { .. } => true,
            TelemetryError::Bind { .. } => false,
            TelemetryError::OversizeDatagram { .. } => false,
            TelemetryError::Truncated { .. } => false,
            TelemetryError::Malformed { .. } => false,
            TelemetryError::VehicleIndex { .. } => false,
        }
    }

    /// Helper constructor for bind failures.
    pub fn bind_failed(addr: impl Into<String>, source: std::io::Error) -> Self {
        TelemetryError::Bind {
            addr: addr.into(),
            reason: source.to_string(),
            source: Some(source),
        }
    }

    /// Helper constructor for socket receive failures.
    pub fn socket_error(reason: impl Into<String>, source: std::io::Error) -> Self {
        TelemetryError::Socket { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for datagrams larger than the per-cycle bound.
    pub fn oversize_datagram(len: usize, max: usize) -> Self {
        TelemetryError::OversizeDatagram { len, max }
    }

    /// Helper constructor for reads past the end of a packet buffer.
    pub fn truncated(context: &'static str, needed: usize, available: usize) -> Self {
        TelemetryError::Truncated { context, needed, available }
    }

    /// Helper constructor for structurally invalid packet contents.
    pub fn malformed(context: &'static str, details: impl Into<String>) -> Self {
        TelemetryError::Malformed { context, details: details.into() }
    }
}
