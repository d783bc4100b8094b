//! Host-owned view state
//!
//! The controller never reads ambient globals; the host threads an explicit
//! snapshot of the current view through every tick.

mod view;

pub use view::{TrackConfig, ViewSnapshot, ViewStateSource};
