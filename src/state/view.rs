//! View snapshot and per-track configuration supplied by the host

use serde::{Deserialize, Serialize};

use crate::data::TrackId;
use crate::time::{DurationNs, TimeSpan};

/// Per-tick snapshot of the host's view state.
///
/// Supplied anew on every scheduling tick and never stored beyond it; the
/// queued-retry path re-reads a fresh snapshot instead of replaying a stale
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// Time span the host currently wants visualized.
    pub visible_window: TimeSpan,

    /// Requested resolution in ns per pixel. Raw, possibly not a power of
    /// two; normalized just before a fetch actually runs.
    pub resolution: DurationNs,

    /// Tracks currently on screen. Hidden tracks never fetch.
    pub visible_tracks: Vec<TrackId>,

    /// Monotonic reload-request version. A value greater than the last one a
    /// controller handled forces that track to reload and refetch.
    pub reload_version: u64,
}

impl ViewSnapshot {
    /// Whether the given track is currently on screen.
    pub fn is_visible(&self, track_id: &TrackId) -> bool {
        self.visible_tracks.iter().any(|id| id == track_id)
    }
}

/// Per-track configuration owned by the host's view-state store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Optional namespace prefixed onto any cache-table identifier this
    /// track materializes in the backing store.
    pub namespace: Option<String>,
}

/// Source of view snapshots, owned by the host.
///
/// `run()` reads the *current* state through this seam both on the tick
/// itself and again when a queued retry fires, so a retry always works from
/// the latest view rather than the one that was visible when it got queued.
pub trait ViewStateSource {
    /// Current snapshot, or `None` while the host has no view state yet
    /// (e.g. before a trace finishes loading).
    fn snapshot(&self) -> Option<ViewSnapshot>;
}
