//! Read-only sort views over the record collection.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::ImageRecord;

/// The fixed set of sortable attributes offered by the display table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ImageId,
    Timestamp,
    AltitudeM,
    BatteryLevelPct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortField {
    fn compare(self, a: &ImageRecord, b: &ImageRecord) -> Ordering {
        match self {
            SortField::ImageId => a.image_id.cmp(&b.image_id),
            SortField::Timestamp => a.timestamp.cmp(&b.timestamp),
            SortField::AltitudeM => a.altitude_m.total_cmp(&b.altitude_m),
            SortField::BatteryLevelPct => a.battery_level_pct.cmp(&b.battery_level_pct),
        }
    }
}

/// Returns a sorted copy of `records`; the input order is never touched.
///
/// The sort is stable: records with equal keys keep their original relative
/// order. Descending uses the reversed comparator, so for distinct keys the
/// two orders are exact reverses of each other.
pub fn sorted_view(records: &[ImageRecord], field: SortField, order: SortOrder) -> Vec<ImageRecord> {
    let mut rows = records.to_vec();
    rows.sort_by(|a, b| {
        let ord = field.compare(a, b);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    rows
}
