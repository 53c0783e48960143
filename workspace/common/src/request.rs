//! Request layer shared by both flows.
//!
//! A [`PredictQuery`] describes what to ask for and which schema comes back,
//! a [`PredictTransport`] moves bytes (reqwest natively, gloo-net in the
//! browser), and [`execute`] applies the one error policy: status first,
//! then JSON.

use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

use crate::error::DashboardError;
use crate::payload::{BackendError, ForecastResponse, MonthPredictionResponse};

/// Path of the prediction endpoint, relative to the backend origin.
pub const PREDICT_PATH: &str = "/predict/";
/// Multipart field carrying the uploaded CSV.
pub const UPLOAD_FIELD: &str = "file";
pub const CSV_MIME: &str = "text/csv";
pub const MONTH_PARAM: &str = "month";

/// A CSV file picked by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Shape of a call to `/predict/`.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictRequest {
    /// `GET /predict/`
    Forecast,
    /// `POST /predict/` with the CSV as multipart field `file`
    Upload(CsvUpload),
    /// `GET /predict/?month=<value>`
    Month(String),
}

impl PredictRequest {
    pub fn method(&self) -> &'static str {
        match self {
            PredictRequest::Upload(_) => "POST",
            _ => "GET",
        }
    }

    /// Query parameter to append, if any.
    pub fn query(&self) -> Option<(&'static str, &str)> {
        match self {
            PredictRequest::Month(month) => Some((MONTH_PARAM, month.as_str())),
            _ => None,
        }
    }
}

/// Status and body of a completed request, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request to the prediction backend.
///
/// Implementations only fail with [`DashboardError::Network`]; everything
/// that arrives, whatever its status, is returned as a [`RawResponse`].
#[allow(async_fn_in_trait)]
pub trait PredictTransport {
    async fn send(&self, request: &PredictRequest) -> Result<RawResponse, DashboardError>;
}

/// Binds a query shape to the schema of its response.
pub trait PredictQuery {
    type Response: DeserializeOwned;

    fn request(&self) -> PredictRequest;
}

/// Twelve-month forecast, optionally computed from an uploaded CSV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkForecastQuery {
    pub upload: Option<CsvUpload>,
}

impl PredictQuery for BulkForecastQuery {
    type Response = ForecastResponse;

    fn request(&self) -> PredictRequest {
        match &self.upload {
            Some(upload) => PredictRequest::Upload(upload.clone()),
            None => PredictRequest::Forecast,
        }
    }
}

/// Point prediction for one month (`YYYY-MM` as produced by a month input).
#[derive(Debug, Clone, PartialEq)]
pub struct MonthQuery {
    pub month: String,
}

impl MonthQuery {
    /// Rejects an empty selection before anything is sent.
    pub fn new(month: &str) -> Result<Self, DashboardError> {
        let month = month.trim();
        if month.is_empty() {
            return Err(DashboardError::Validation("Please select a month.".to_string()));
        }
        Ok(Self {
            month: month.to_string(),
        })
    }
}

impl PredictQuery for MonthQuery {
    type Response = MonthPredictionResponse;

    fn request(&self) -> PredictRequest {
        PredictRequest::Month(self.month.clone())
    }
}

/// Sends `query` and decodes its response.
#[instrument(skip_all)]
pub async fn execute<T, Q>(transport: &T, query: &Q) -> Result<Q::Response, DashboardError>
where
    T: PredictTransport,
    Q: PredictQuery,
{
    let request = query.request();
    debug!("{} {} {:?}", request.method(), PREDICT_PATH, request.query());
    let response = transport.send(&request).await?;
    decode(response)
}

/// Applies the status check, then parses the body as `R`.
pub fn decode<R: DeserializeOwned>(response: RawResponse) -> Result<R, DashboardError> {
    if !response.is_success() {
        match serde_json::from_str::<BackendError>(&response.body) {
            Ok(backend) => error!("Server error {}: {}", response.status, backend.error),
            Err(_) => error!("Server error {}: {}", response.status, response.body),
        }
        return Err(DashboardError::Server {
            status: response.status,
            body: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| {
        warn!("Failed to parse response: {}", e);
        DashboardError::MalformedResponse(e.to_string())
    })
}
