use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

pub use common::ErrorResponse;
use common::payload::{
    ForecastMetrics, ForecastPoint, ForecastResponse, HistoryPoint, MonthPredictionResponse,
};
use common::request::PREDICT_PATH;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client used to reach the prediction backend
    pub http: reqwest::Client,
    /// Base URL of the prediction backend, without trailing slash
    pub backend_url: String,
}

impl AppState {
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.backend_url, PREDICT_PATH)
    }
}

/// Query parameters of `GET /predict/`
#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PredictParams {
    /// Month to predict (`YYYY-MM`). Without it the twelve-month forecast is returned.
    pub month: Option<String>,
}

/// Multipart body of `POST /predict/`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// CSV price history
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Prediction backend the host relays to
    pub backend: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::predict::get_prediction,
        crate::handlers::predict::upload_prediction,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            PredictParams,
            UploadForm,
            ForecastResponse,
            ForecastMetrics,
            ForecastPoint,
            HistoryPoint,
            MonthPredictionResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "predict", description = "Price forecast relay endpoints"),
    ),
    info(
        title = "Price Forecast Dashboard",
        description = "Dashboard host relaying forecast requests to the prediction backend",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
