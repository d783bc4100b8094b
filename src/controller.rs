//! Window request coordinator
//!
//! One controller instance per track. On every scheduling tick the host calls
//! [`TrackController::run`]; the controller decides whether the cached window
//! still satisfies the view, and if not, runs the track's lifecycle hooks and
//! window fetch while guaranteeing that at most one fetch per track is ever
//! in flight. A tick arriving mid-fetch queues exactly one follow-up, which
//! re-reads the latest view state once the in-flight fetch completes.

use std::cell::{Cell, RefCell};

use tracing::{debug, warn};

use crate::constants::fetch::ROW_LIMIT;
use crate::data::{Track, TrackData, TrackId, TrackSink};
use crate::error::{Result, TrackError};
use crate::state::{ViewSnapshot, ViewStateSource};
use crate::time::{DurationNs, TimeSpan, normalize_resolution};

/// Fetch state machine, one per track instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// No fetch outstanding.
    Idle,
    /// A fetch is outstanding; its completion returns to `Idle`.
    InFlight,
    /// A fetch is outstanding and a tick wanted data meanwhile; completion
    /// immediately re-evaluates the controller with fresh view state. A
    /// single flag, not a queue: further ticks while queued are no-ops.
    InFlightWithQueuedRetry,
}

/// Metadata of the last successfully published window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedWindow {
    /// Span the fetch covered (visible span padded one span-width per side).
    pub span: TimeSpan,
    /// Normalized resolution the data was fetched at.
    pub resolution: DurationNs,
    /// Rows in the payload.
    pub row_count: usize,
}

impl CachedWindow {
    /// Whether the fetch hit the row limit, i.e. more data exists beyond the
    /// fetched span.
    pub fn saturated(&self) -> bool {
        self.row_count == ROW_LIMIT
    }
}

/// Pure fetch decision over the cached window and the current view.
///
/// Compares the raw requested resolution against the cached (normalized)
/// one; normalization itself only happens once a fetch actually runs.
fn needs_fetch(
    cached: Option<CachedWindow>,
    window: TimeSpan,
    resolution: DurationNs,
    reload_pending: bool,
) -> bool {
    let Some(cached) = cached else {
        return true;
    };
    if reload_pending {
        return true;
    }

    // A saturated window holds LIMIT rows no matter the zoom, so only panning
    // past its edge justifies another query. The fetch covered one
    // span-width before the visible start, hence the duration offset.
    // Resolution changes alone deliberately do not refetch here.
    if cached.saturated() {
        let prev_window_start = cached.span.start + window.duration();
        return window.start != prev_window_start;
    }

    !cached.span.contains(&window) || resolution != cached.resolution
}

/// Per-track window-fetch controller.
///
/// Owns the track's capability object, the cached payload and the request
/// state machine. All state lives on one control thread; the hooks are
/// cooperative async operations and never overlap for the same instance.
pub struct TrackController<T: Track, S: TrackSink<T::Data>> {
    track_id: TrackId,
    track: RefCell<T>,
    sink: S,
    state: Cell<RequestState>,
    cached: RefCell<Option<T::Data>>,
    setup_done: Cell<bool>,
    last_reload_handled: Cell<u64>,
}

impl<T: Track, S: TrackSink<T::Data>> TrackController<T, S> {
    pub fn new(track_id: TrackId, track: T, sink: S) -> Self {
        Self {
            track_id,
            track: RefCell::new(track),
            sink,
            state: Cell::new(RequestState::Idle),
            cached: RefCell::new(None),
            setup_done: Cell::new(false),
            last_reload_handled: Cell::new(0),
        }
    }

    pub fn track_id(&self) -> &TrackId {
        &self.track_id
    }

    /// Current position in the fetch state machine.
    pub fn request_state(&self) -> RequestState {
        self.state.get()
    }

    /// Metadata of the last published window, if any.
    pub fn cached_window(&self) -> Option<CachedWindow> {
        self.cached.borrow().as_ref().map(|data| CachedWindow {
            span: data.span(),
            resolution: data.resolution(),
            row_count: data.row_count(),
        })
    }

    fn reload_pending(&self, reload_version: u64) -> bool {
        reload_version > self.last_reload_handled.get()
    }

    /// Scheduling-tick entry point.
    ///
    /// Reads the current view through the host-owned `view` source, fetches
    /// if needed and publishes the result through the sink. Failures are
    /// logged and surfaced via [`TrackSink::notify_failure`]; the state
    /// machine always returns to `Idle` (or runs the queued retry), so a
    /// failed fetch never wedges the track.
    pub async fn run<V: ViewStateSource>(&self, view: &V) {
        loop {
            let Some(snapshot) = view.snapshot() else {
                return;
            };
            if !snapshot.is_visible(&self.track_id) {
                return;
            }
            if !needs_fetch(
                self.cached_window(),
                snapshot.visible_window,
                snapshot.resolution,
                self.reload_pending(snapshot.reload_version),
            ) {
                return;
            }

            match self.state.get() {
                RequestState::InFlight | RequestState::InFlightWithQueuedRetry => {
                    self.state.set(RequestState::InFlightWithQueuedRetry);
                    return;
                }
                RequestState::Idle => {}
            }

            self.state.set(RequestState::InFlight);
            debug!(track = %self.track_id, "window fetch started");
            let outcome = self.fetch_window(&snapshot).await;

            // Cleanup runs on success and failure alike: capture the queued
            // retry, then leave the in-flight state.
            let retry_queued = self.state.get() == RequestState::InFlightWithQueuedRetry;
            self.state.set(RequestState::Idle);

            if let Err(err) = outcome {
                warn!(track = %self.track_id, phase = err.phase(), error = %err, "track update failed");
                self.sink.notify_failure(&self.track_id, &err);
            }

            if !retry_queued {
                return;
            }
            // Queued retry: loop back and re-evaluate against a fresh
            // snapshot, exactly as if a new tick had arrived.
        }
    }

    async fn fetch_window(&self, snapshot: &ViewSnapshot) -> Result<()> {
        if !self.setup_done.get() {
            self.track
                .borrow_mut()
                .on_setup()
                .await
                .map_err(TrackError::SetupFailed)?;
            // Only a successful setup counts; a failed one reruns next tick.
            self.setup_done.set(true);
        } else if self.reload_pending(snapshot.reload_version) {
            self.track
                .borrow_mut()
                .on_reload()
                .await
                .map_err(TrackError::ReloadFailed)?;
            self.last_reload_handled.set(snapshot.reload_version);
        }

        let resolution = normalize_resolution(snapshot.resolution);
        let window = snapshot.visible_window;
        let fetch_span = window.padded(window.duration());

        let data = self
            .track
            .borrow_mut()
            .on_bounds_change(fetch_span.start, fetch_span.end, resolution)
            .await
            .map_err(TrackError::FetchFailed)?;

        self.sink.publish(&self.track_id, &data);
        *self.cached.borrow_mut() = Some(data);
        Ok(())
    }
}
