//! Crate-wide constants and default values
//!
//! This module centralizes all magic numbers used by the fetch coordinator
//! and the cache sizing heuristic, making them easier to maintain and audit.

/// Window fetch defaults
pub mod fetch {
    use crate::time::DurationNs;

    /// Maximum number of rows a single window fetch may return.
    ///
    /// A fetch that comes back with exactly this many rows is treated as
    /// saturated: more data exists beyond the fetched span, and only panning
    /// past the window edge justifies another query.
    pub const ROW_LIMIT: usize = 10_000;

    /// Fallback resolution (ns per pixel) used when the requested resolution
    /// is not a power of two. A power of two itself, so normalization is a
    /// fixed point on its own output.
    pub const DEFAULT_RESOLUTION_NS: DurationNs = 1024;
}

/// Aggregate-cache sizing constants
pub mod cache {
    use crate::time::DurationNs;

    /// Minimum row count before materializing a pre-aggregated cache table
    /// pays off. Below this the raw table is cheap to query at any zoom.
    pub const MIN_ROWS_TO_CACHE: u64 = 100_000;

    /// Worst-case viewport width in pixels (4k monitor) used to estimate the
    /// coarsest bucket a fully zoomed-out view would ever request.
    pub const ASSUMED_VIEWPORT_PX: u64 = 3840;

    /// How many halvings of the outermost bucket size the cache table must
    /// remain usable for before callers fall back to the raw table.
    pub const RESOLUTION_LEVELS_COVERED: u32 = 7;

    /// Resolution (ns per pixel) above which a track should query summarized
    /// buckets instead of raw rows.
    pub const SUMMARIZE_THRESHOLD_NS_PER_PX: DurationNs = 800_000;
}
