//! POST /api/query — answers one question about the submitted dataset.

use axum::Json;
use tracing::debug;

use crate::{
    error_handler::AppResult,
    routes::query::query_request::{QueryRequest, QueryResponse},
};

/// Handler: POST /api/query
///
/// Stateless: the dataset embedded in the prompt is exactly the collection
/// from the request body, and the relay is configured from the environment
/// per call. One outbound completion request per invocation; any relay
/// failure surfaces as 502.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/query \
///   -H 'content-type: application/json' \
///   -d '{"input":"Which image was taken highest?","droneData":[...]}'
/// ```
pub async fn answer_query(Json(body): Json<QueryRequest>) -> AppResult<Json<QueryResponse>> {
    debug!(
        question_len = body.input.len(),
        records = body.drone_data.len(),
        "query received"
    );

    let response = query_relay::answer(&body.input, &body.drone_data).await?;

    Ok(Json(QueryResponse { response }))
}
