//! API route handlers.
//!
//! - POST /receipts/process - Submit a receipt, get its id
//! - GET /receipts/:id/points - Get the points awarded to an id

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

/// Response body for a processed receipt.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response body for a points lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
}

/// Score a submitted receipt.
///
/// The body is taken as raw bytes: the id is derived from exactly what the
/// client sent. A body that cannot be read is an invalid receipt.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let body = body.map_err(|rejection| {
        tracing::debug!(%rejection, "request body rejected");
        rejection
    })?;
    let id = state.processor.process(&body)?;

    Ok(Json(ProcessResponse { id: id.to_string() }))
}

/// Get the points for a receipt id.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.processor.lookup(&id)?;

    Ok(Json(PointsResponse {
        points: points.get(),
    }))
}
