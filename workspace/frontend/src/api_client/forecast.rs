use common::{MetricsReport, PredictionPoint};
use futures::future::try_join;

use crate::api_client;

/// Fixed operator-facing message shown when the initial load fails for any
/// reason: unreachable backend, non-2xx status, or a malformed payload.
/// The distinct causes appear only in the console log.
pub const BACKEND_ERROR_MESSAGE: &str =
    "Error connecting to backend API. Ensure the forecast backend is running on port 8000.";

/// Everything the dashboard renders. Both endpoints must load before the
/// page leaves its loading state; there is no partial-success view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub metrics: MetricsReport,
    pub predictions: Vec<PredictionPoint>,
}

/// Get model evaluation metrics, insights and coefficients
pub async fn get_metrics() -> Result<MetricsReport, String> {
    log::trace!("Fetching model metrics");
    let result = api_client::get::<MetricsReport>("/metrics").await;
    match &result {
        Ok(report) => log::info!(
            "Fetched metrics with {} insights and {} coefficients",
            report.insights.len(),
            report.coefficients.len()
        ),
        Err(e) => log::error!("Failed to fetch metrics: {}", e),
    }
    result
}

/// Get actual vs. predicted prices from the backend's test set
pub async fn get_predictions() -> Result<Vec<PredictionPoint>, String> {
    log::trace!("Fetching predictions");
    let result = api_client::get::<Vec<PredictionPoint>>("/predictions").await;
    match &result {
        Ok(points) => log::info!("Fetched {} prediction points", points.len()),
        Err(e) => log::error!("Failed to fetch predictions: {}", e),
    }
    result
}

/// Fetch both dashboard resources concurrently. The join fails as soon as
/// either request fails; the error is collapsed into the fixed
/// operator-facing message.
pub async fn get_dashboard_data() -> Result<DashboardData, String> {
    log::trace!("Fetching dashboard data");
    match try_join(get_metrics(), get_predictions()).await {
        Ok((metrics, predictions)) => Ok(DashboardData {
            metrics,
            predictions,
        }),
        Err(e) => {
            log::error!("Dashboard data load failed: {}", e);
            Err(BACKEND_ERROR_MESSAGE.to_string())
        }
    }
}
