use drone_data::ImageRecord;

/// Shared state for all HTTP handlers.
///
/// Only the static dataset handle lives here. Relay configuration is
/// deliberately not cached: it is read from the environment on each query
/// so a key added after boot is picked up without a restart.
#[derive(Clone)]
pub struct AppState {
    /// The bundled record collection, loaded once for the process lifetime.
    pub dataset: &'static [ImageRecord],
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dataset: drone_data::dataset(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
