//! Seams toward the concrete track types and the backing query engine

mod engine;
mod track;

pub use engine::{QueryEngine, cache_table_name, sanitize_identifier};
pub use track::{Track, TrackData, TrackId, TrackSink};
