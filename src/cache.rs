//! Aggregate-cache sizing heuristic for large tracks
//!
//! For big datasets the most zoomed-out views are the expensive ones: they
//! sweep the whole raw table and sort on the quantized timestamp. A track can
//! instead materialize one pre-quantized table and serve every sufficiently
//! zoomed-out request from it, falling back to the raw table when zoomed in
//! (where the window itself bounds the work). This module decides whether
//! that table is worth having and which bucket width it should use.

use serde::{Deserialize, Serialize};

use crate::constants::cache::{
    ASSUMED_VIEWPORT_PX, MIN_ROWS_TO_CACHE, RESOLUTION_LEVELS_COVERED,
    SUMMARIZE_THRESHOLD_NS_PER_PX,
};
use crate::time::{DurationNs, bit_ceil};

/// Outcome of the cache sizing heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheSizing {
    /// Dataset too small to bother; query the raw table at every zoom level.
    NoCache,
    /// Trace short enough that one coarse bucket serves every zoom level.
    AllResolutions,
    /// Smallest bucket width (ns) the cached table must support. Requests
    /// with a coarser bucket use the cache; finer ones hit the raw table.
    Bucket(DurationNs),
}

impl CacheSizing {
    /// Whether a cached aggregate table sized by this result may serve a
    /// request quantized to `bucket` ns.
    pub fn covers(&self, bucket: DurationNs) -> bool {
        match self {
            CacheSizing::NoCache => false,
            CacheSizing::AllResolutions => true,
            CacheSizing::Bucket(min_bucket) => bucket >= *min_bucket,
        }
    }
}

/// Decide whether a track should cache quantized data, and at which bucket
/// width. Concrete track types call this once from their setup hook.
///
/// The outermost bucket is what a fully zoomed-out view on a worst-case-wide
/// viewport would request: `bit_ceil(trace_duration / ASSUMED_VIEWPORT_PX)`.
/// The cached table then has to stay usable for a fixed number of halvings
/// below that, so its bucket width is the outermost one divided by
/// `2^RESOLUTION_LEVELS_COVERED`. Traces with fewer resolution levels than
/// that are served from a single coarse bucket forever.
pub fn cache_sizing(row_count: u64, trace_duration: DurationNs) -> CacheSizing {
    if row_count < MIN_ROWS_TO_CACHE {
        return CacheSizing::NoCache;
    }

    let outermost_bucket = bit_ceil(trace_duration / ASSUMED_VIEWPORT_PX);
    let outermost_level = outermost_bucket.ilog2();

    if outermost_level < RESOLUTION_LEVELS_COVERED {
        return CacheSizing::AllResolutions;
    }

    CacheSizing::Bucket(outermost_bucket >> RESOLUTION_LEVELS_COVERED)
}

/// Whether a fetch at `resolution` (ns per pixel) should query summarized
/// buckets rather than raw rows.
pub fn should_summarize(resolution: DurationNs) -> bool {
    resolution >= SUMMARIZE_THRESHOLD_NS_PER_PX
}
