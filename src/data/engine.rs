//! Query engine seam and cache-table identifier rules
//!
//! The backing store is opaque to this crate: it executes a query text and
//! produces rows or fails. Concrete track types consume it directly; the
//! coordinator never does.

use async_trait::async_trait;

use crate::data::TrackId;
use crate::error::QueryError;
use crate::state::TrackConfig;

/// Asynchronous query execution against the backing time-series store.
#[async_trait(?Send)]
pub trait QueryEngine {
    /// Row set produced by a successful execution; opaque to this crate.
    type Rows;

    async fn execute(&self, query: &str) -> Result<Self::Rows, QueryError>;
}

/// Replace every character illegal in the backing store's identifier grammar
/// with `_`. Keeps `[A-Za-z0-9_]` unchanged.
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Derive a valid cache-table name, unique per track.
///
/// Track IDs can be UUIDs or contain arbitrary punctuation, none of which is
/// legal in a table name; the sanitized ID is suffixed onto the caller's
/// prefix, and the whole name is namespaced when the track config carries a
/// namespace.
pub fn cache_table_name(prefix: &str, track_id: &TrackId, config: &TrackConfig) -> String {
    let table = format!("{}_{}", prefix, sanitize_identifier(track_id.as_str()));
    match &config.namespace {
        Some(namespace) => format!("{namespace}_{table}"),
        None => table,
    }
}
