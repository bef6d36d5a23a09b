use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use avalia::error::AppError;
use avalia::reviews::{ReviewService, Rubric};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the shared scoring service. The weight-sum invariant is checked here
/// once, at startup, never per record.
pub(crate) fn build_service() -> Result<Arc<ReviewService>, AppError> {
    let rubric = Rubric::standard();
    rubric.validate()?;
    Ok(Arc::new(ReviewService::new(rubric)))
}
