//! Error types for track-window
//!
//! Structured error handling using thiserror. Failures from the concrete
//! track's hooks or from the query engine are wrapped by phase so the host
//! can tell a broken setup apart from a transient fetch failure.

use thiserror::Error;

/// Boxed error type carried across the track/engine trait seams.
///
/// Concrete tracks and engines keep their own error types; the coordinator
/// only needs to wrap, log and surface them.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure raised by a [`QueryEngine`](crate::data::QueryEngine) execution.
#[derive(Error, Debug)]
#[error("query failed: {message}")]
pub struct QueryError {
    /// Engine-reported description of the failure.
    pub message: String,
}

impl QueryError {
    /// Build a query error from any displayable engine failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Main error type surfaced per track by the window request coordinator
#[derive(Error, Debug)]
pub enum TrackError {
    /// One-time setup hook failed; setup stays unperformed and is retried on
    /// the next tick that needs a fetch.
    #[error("track setup failed: {0}")]
    SetupFailed(#[source] BoxedError),

    /// Reload hook failed; the reload version stays unhandled and the reload
    /// is retried on the next tick.
    #[error("track reload failed: {0}")]
    ReloadFailed(#[source] BoxedError),

    /// Window fetch failed; the previously published window stays intact.
    #[error("window fetch failed: {0}")]
    FetchFailed(#[source] BoxedError),
}

impl TrackError {
    /// Short label for the failed phase, suitable for log fields.
    pub fn phase(&self) -> &'static str {
        match self {
            TrackError::SetupFailed(_) => "setup",
            TrackError::ReloadFailed(_) => "reload",
            TrackError::FetchFailed(_) => "fetch",
        }
    }
}

/// Result type alias for track-window operations
pub type Result<T, E = TrackError> = std::result::Result<T, E>;
