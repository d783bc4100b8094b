//! Integer time model: trace-relative nanosecond timestamps, time spans and
//! the power-of-two resolution normalizer.
//!
//! All bucket and resolution math is exact unsigned integer arithmetic
//! (`count_ones`, `next_power_of_two`, `ilog2`) so results are deterministic
//! across platforms; no floating point is involved.

use serde::{Deserialize, Serialize};

use crate::constants::fetch::DEFAULT_RESOLUTION_NS;

/// Trace-relative timestamp in nanoseconds.
pub type TimeNs = u64;

/// Duration in nanoseconds. Also used for resolution (ns per pixel).
pub type DurationNs = u64;

/// Half-open-ish time span `[start, end]` as supplied by the host view state.
///
/// Immutable snapshot value; a new one arrives on every scheduling tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: TimeNs,
    pub end: TimeNs,
}

impl TimeSpan {
    /// Create a span. `start` must not exceed `end`.
    pub fn new(start: TimeNs, end: TimeNs) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    /// Width of the span in nanoseconds.
    pub fn duration(&self) -> DurationNs {
        self.end - self.start
    }

    /// Whether `other` lies fully inside this span.
    pub fn contains(&self, other: &TimeSpan) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Span grown by `amount` on each side, clamped at the u64 edges.
    ///
    /// Fetches use the visible span padded by one span-width per side so that
    /// small pans keep hitting already-fetched data.
    pub fn padded(&self, amount: DurationNs) -> TimeSpan {
        TimeSpan {
            start: self.start.saturating_sub(amount),
            end: self.end.saturating_add(amount),
        }
    }
}

/// Whether `resolution` is a valid fetch resolution (exactly one set bit).
pub fn is_power_of_two(resolution: DurationNs) -> bool {
    resolution.count_ones() == 1
}

/// Normalize a candidate resolution to a power of two.
///
/// Valid values pass through unchanged; everything else (including zero)
/// falls back to [`DEFAULT_RESOLUTION_NS`]. Runs before every fetch, but
/// never before the pure `needs_fetch` check, which compares the raw request
/// against an already-normalized cached resolution.
pub fn normalize_resolution(resolution: DurationNs) -> DurationNs {
    if is_power_of_two(resolution) {
        resolution
    } else {
        DEFAULT_RESOLUTION_NS
    }
}

/// Round `value` up to the next power of two (`bit_ceil`). Zero maps to one.
pub fn bit_ceil(value: u64) -> u64 {
    value.next_power_of_two()
}
