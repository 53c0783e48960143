//! Shared core of the price forecast dashboard.
//!
//! Payloads of the `/predict/` endpoint, the formatting and view models the
//! page displays, chart specifications, and the controller running both
//! dashboard flows. Nothing here touches the DOM: the frontend implements
//! [`DashboardView`] and [`PredictTransport`] for the browser, the native
//! binary implements them for a terminal.

pub mod chart;
pub mod controller;
pub mod error;
pub mod format;
pub mod payload;
pub mod request;
pub mod state;
pub mod surface;
pub mod view;

pub use chart::{ChartConfig, ForecastPlot};
pub use controller::{DashboardController, DashboardView};
pub use error::DashboardError;
pub use payload::{
    BackendError, ForecastMetrics, ForecastPoint, ForecastResponse, HistoryPoint,
    MonthPredictionResponse,
};
pub use request::{CsvUpload, PredictRequest, PredictTransport, RawResponse};
pub use state::{Flow, UiState};
pub use surface::{ChartInstance, ChartSurface};
pub use view::{ForecastRow, MetricsView, MonthResultView};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by the dashboard host (mirrors the server's
/// `ErrorResponse` so clients can decode it without the server crate).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success flag (always false)
    pub success: bool,
}
