use serde::{Deserialize, Serialize};

/// Metadata for one captured drone image.
///
/// Field names match the bundled dataset JSON exactly; they also appear
/// verbatim inside the prompt sent to the completion service, so renaming
/// a field here changes what the model sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Unique identifier, e.g. `img-01`. Answers reference images by this id.
    pub image_id: String,
    /// Capture time as ISO-8601 text; compared lexically when sorting.
    pub timestamp: String,

    // Geolocation
    pub latitude: f64,
    pub longitude: f64,

    // Flight telemetry
    pub altitude_m: f64,
    pub drone_speed_mps: f64,
    pub battery_level_pct: u8,

    // Camera settings
    pub camera_tilt_deg: f64,
    pub focal_length_mm: f64,
    pub iso: u32,
    pub shutter_speed: String,
    pub aperture: String,
    pub color_temp_k: u32,

    // File metadata
    pub file_name: String,
    pub image_format: String,
    pub file_size_mb: f64,

    // Quality metadata
    pub gps_accuracy_m: f64,
    pub gimbal_mode: String,
    pub subject_detection: String,

    /// Free-text tags, order preserved.
    pub image_tags: Vec<String>,
}
