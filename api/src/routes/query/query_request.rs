use drone_data::ImageRecord;
use serde::{Deserialize, Serialize};

/// Request payload for /api/query.
///
/// The client always sends the full, unsorted collection; display-side
/// sorting never changes this payload.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Natural language question, forwarded to the model verbatim.
    pub input: String,
    /// The record collection the answer must be grounded in.
    #[serde(rename = "droneData")]
    pub drone_data: Vec<ImageRecord>,
}

/// Response payload for /api/query.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// Model answer (plain text); empty string when the service returned
    /// no content, never absent.
    pub response: String,
}
