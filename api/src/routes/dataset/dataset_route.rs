//! GET /drone_data — the bundled collection, optionally sorted for display.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use drone_data::{ImageRecord, SortField, SortOrder, sorted_view};

use crate::core::app_state::AppState;

/// Query parameters for the dataset view.
///
/// Unknown `sort_by`/`order` values reject with 400 before the handler
/// runs (rewritten into the error envelope by the middleware).
#[derive(Debug, Deserialize)]
pub struct DatasetParams {
    #[serde(default)]
    pub sort_by: Option<SortField>,
    #[serde(default)]
    pub order: Option<SortOrder>,
}

/// Handler: GET /drone_data?sort_by=altitude_m&order=desc
///
/// Defaults to `image_id` ascending. The returned order is a display view
/// only; the underlying collection never changes.
pub async fn drone_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DatasetParams>,
) -> Json<Vec<ImageRecord>> {
    let field = params.sort_by.unwrap_or(SortField::ImageId);
    let order = params.order.unwrap_or(SortOrder::Asc);

    Json(sorted_view(state.dataset, field, order))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> Result<DatasetParams, serde_json::Error> {
        // Query-string values arrive as strings; JSON strings deserialize
        // through the same enum Deserialize impls.
        let mut map = serde_json::Map::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            map.insert(k.to_string(), serde_json::Value::String(v.to_string()));
        }
        serde_json::from_value(serde_json::Value::Object(map))
    }

    #[test]
    fn params_parse_from_query_strings() {
        let params = parse("sort_by=altitude_m&order=desc").unwrap();
        assert_eq!(params.sort_by, Some(SortField::AltitudeM));
        assert_eq!(params.order, Some(SortOrder::Desc));

        let empty = parse("").unwrap();
        assert_eq!(empty.sort_by, None);
        assert_eq!(empty.order, None);
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        assert!(parse("sort_by=latitude").is_err());
    }
}
