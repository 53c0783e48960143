//! Relay of `/predict/` to the prediction backend.
//!
//! The backend's answer is passed through untouched (status, content type
//! and body) so the dashboard applies its own error policy to it. Only
//! failures to reach the backend are answered here.

use axum::{
    body::Body,
    extract::{Multipart, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use common::request::{CSV_MIME, MONTH_PARAM, UPLOAD_FIELD};
use common::ForecastResponse;
use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::schemas::{AppState, ErrorResponse, PredictParams, UploadForm};

/// Failures of the relay itself
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Prediction backend unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Failed to build response: {0}")]
    Internal(String),
}

impl RelayError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            RelayError::Unreachable(_) => (StatusCode::BAD_GATEWAY, "BACKEND_UNREACHABLE"),
            RelayError::InvalidUpload(_) => (StatusCode::BAD_REQUEST, "INVALID_UPLOAD"),
            RelayError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        error!("Relay failed with {}: {}", status, self);
        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}

/// Forward the backend's response as received
async fn pass_through(response: reqwest::Response) -> Result<Response, RelayError> {
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let body = response.bytes().await?;
    debug!("Backend answered {} ({} bytes)", status, body.len());

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(body))
        .map_err(|e| RelayError::Internal(e.to_string()))
}

/// Twelve-month forecast, or a single month when `month` is given
#[utoipa::path(
    get,
    path = "/predict/",
    tag = "predict",
    params(PredictParams),
    responses(
        (status = 200, description = "Forecast (no month) or month prediction", body = ForecastResponse),
        (status = 502, description = "Prediction backend unreachable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_prediction(
    State(state): State<AppState>,
    Query(params): Query<PredictParams>,
) -> Result<Response, RelayError> {
    let mut request = state.http.get(state.predict_url());
    if let Some(month) = &params.month {
        request = request.query(&[(MONTH_PARAM, month)]);
    }

    let response = request.send().await?;
    pass_through(response).await
}

/// Twelve-month forecast computed from an uploaded CSV
#[utoipa::path(
    post,
    path = "/predict/",
    tag = "predict",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Forecast computed from the upload", body = ForecastResponse),
        (status = 400, description = "No CSV in the request", body = ErrorResponse),
        (status = 502, description = "Prediction backend unreachable", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn upload_prediction(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, RelayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| RelayError::InvalidUpload(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            warn!("Ignoring multipart field {:?}", field.name());
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload.csv").to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| RelayError::InvalidUpload(e.to_string()))?;
        debug!("Relaying upload {} ({} bytes)", file_name, content.len());

        let part = Part::bytes(content.to_vec())
            .file_name(file_name)
            .mime_str(CSV_MIME)
            .map_err(|e| RelayError::Internal(e.to_string()))?;
        let response = state
            .http
            .post(state.predict_url())
            .multipart(Form::new().part(UPLOAD_FIELD, part))
            .send()
            .await?;
        return pass_through(response).await;
    }

    Err(RelayError::InvalidUpload(format!(
        "missing '{}' field",
        UPLOAD_FIELD
    )))
}
