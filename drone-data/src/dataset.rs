//! Bundled static dataset, parsed once on first access.

use std::sync::OnceLock;

use tracing::debug;

use crate::record::ImageRecord;

static RAW: &str = include_str!("../data/drone_data.json");

static DATASET: OnceLock<Vec<ImageRecord>> = OnceLock::new();

/// Returns the bundled record collection.
///
/// Parsed lazily on first call and cached for the process lifetime. The
/// collection is never mutated; callers that need a different order take a
/// copy through [`crate::sorted_view`].
///
/// # Panics
/// If the bundled JSON does not match the [`ImageRecord`] schema. That is a
/// build-time defect, not a runtime condition.
pub fn dataset() -> &'static [ImageRecord] {
    DATASET.get_or_init(|| {
        let records: Vec<ImageRecord> =
            serde_json::from_str(RAW).expect("bundled drone_data.json must match ImageRecord");
        debug!(records = records.len(), "drone dataset loaded");
        records
    })
}
