use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use super::domain::EvaluationBatch;
use super::service::ReviewService;

/// Router exposing the stateless scoring endpoint. A malformed body is
/// rejected by the JSON extractor before the scorer runs.
pub fn review_router(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/api/v1/avaliacoes", post(score_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<ReviewService>>,
    Json(batch): Json<EvaluationBatch>,
) -> Json<EvaluationBatch> {
    Json(service.score_batch(&batch))
}
