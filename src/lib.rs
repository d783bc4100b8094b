//! track-window: per-track data-window control for interactive timeline
//! visualizations backed by a queryable time-series store.
//!
//! Given the visible time span and a requested sampling resolution, the
//! [`TrackController`] decides on every scheduling tick whether previously
//! fetched data still satisfies the view, keeps at most one fetch per track
//! in flight (coalescing mid-fetch ticks into a single queued retry), and
//! normalizes resolutions to powers of two. For very large datasets the
//! [`cache_sizing`](cache::cache_sizing) heuristic picks the bucket width a
//! pre-aggregated cache table should use so zoomed-out queries stay cheap.
//!
//! Rendering, SQL construction and result display are the host's business:
//! they plug in through the [`Track`](data::Track),
//! [`QueryEngine`](data::QueryEngine), [`TrackSink`](data::TrackSink) and
//! [`ViewStateSource`](state::ViewStateSource) seams.

pub mod cache;
pub mod constants;
pub mod controller;
pub mod data;
pub mod error;
pub mod state;
pub mod time;

pub use cache::{CacheSizing, cache_sizing, should_summarize};
pub use controller::{CachedWindow, RequestState, TrackController};
pub use data::{QueryEngine, Track, TrackData, TrackId, TrackSink, cache_table_name};
pub use error::{BoxedError, QueryError, Result, TrackError};
pub use state::{TrackConfig, ViewSnapshot, ViewStateSource};
pub use time::{DurationNs, TimeNs, TimeSpan, normalize_resolution};
