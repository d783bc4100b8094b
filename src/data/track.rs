//! Track identity and the capability seam toward concrete track types
//!
//! A concrete track type (sched slices, counters, ...) plugs into the
//! coordinator as a strategy object: one required window-fetch operation and
//! two optional lifecycle hooks, all asynchronous. The coordinator never
//! inspects the fetched payload beyond the [`TrackData`] metadata.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::fetch::ROW_LIMIT;
use crate::error::{BoxedError, TrackError};
use crate::time::{DurationNs, TimeNs, TimeSpan};

/// Opaque stable identifier for a track.
///
/// May contain characters (UUID hyphens, slashes in process names) that are
/// illegal in the backing store's identifier grammar; see
/// [`cache_table_name`](crate::data::cache_table_name) for the sanitized
/// derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata every fetched payload exposes to the coordinator.
///
/// The payload itself stays opaque; the coordinator only needs the fetched
/// span, the resolution it was fetched at and the row count to decide when a
/// follow-up fetch is due.
pub trait TrackData {
    /// Span actually covered by the fetch (the padded window, not the bare
    /// visible one).
    fn span(&self) -> TimeSpan;

    /// Resolution the data was fetched at (already normalized).
    fn resolution(&self) -> DurationNs;

    /// Number of rows in the payload.
    fn row_count(&self) -> usize;

    /// Whether the fetch hit the row limit, meaning more data exists beyond
    /// the fetched span.
    fn saturated(&self) -> bool {
        self.row_count() == ROW_LIMIT
    }
}

/// Capability set a concrete track type supplies to the coordinator.
///
/// All methods run on the single control thread; the coordinator's request
/// state machine guarantees no two invocations for the same track instance
/// ever overlap.
#[async_trait(?Send)]
pub trait Track {
    /// Payload produced by a window fetch.
    type Data: TrackData;

    /// One-time setup work before the first window fetch (e.g. deciding via
    /// [`cache_sizing`](crate::cache::cache_sizing) whether to materialize an
    /// aggregate table). Runs again on the next tick if it fails.
    async fn on_setup(&mut self) -> Result<(), BoxedError> {
        Ok(())
    }

    /// One-off work when the host requests a reload (e.g. a configuration
    /// change invalidating derived tables). At most once per reload version.
    async fn on_reload(&mut self) -> Result<(), BoxedError> {
        Ok(())
    }

    /// Fetch data for the given window at the given resolution. `start`/`end`
    /// are the visible span padded by one span-width per side.
    async fn on_bounds_change(
        &mut self,
        start: TimeNs,
        end: TimeNs,
        resolution: DurationNs,
    ) -> Result<Self::Data, BoxedError>;
}

/// Where the coordinator delivers results and failures.
pub trait TrackSink<D> {
    /// Publish freshly fetched data for a track. Assumed not to fail.
    fn publish(&self, track_id: &TrackId, data: &D);

    /// Per-track failure notification; the default just drops the error on
    /// the floor (it is also logged by the coordinator).
    fn notify_failure(&self, track_id: &TrackId, error: &TrackError) {
        let _ = (track_id, error);
    }
}
