use common::request::{
    CsvUpload, PredictRequest, PredictTransport, RawResponse, CSV_MIME, UPLOAD_FIELD,
};
use common::DashboardError;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FormData};

use crate::settings;

/// `fetch`-based transport to the prediction endpoint.
pub struct BrowserTransport {
    predict_url: String,
}

impl BrowserTransport {
    pub fn new(predict_url: String) -> Self {
        Self { predict_url }
    }

    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().predict_url())
    }
}

fn network_error(context: &str, detail: impl std::fmt::Display) -> DashboardError {
    let error_msg = format!("{}: {}", context, detail);
    log::error!("{}", error_msg);
    DashboardError::Network(error_msg)
}

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Multipart body with the CSV under the `file` field.
fn upload_form(upload: &CsvUpload) -> Result<FormData, DashboardError> {
    let bytes = js_sys::Uint8Array::from(upload.content.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| network_error("Failed to prepare upload", js_detail(e)))?;
    let form = FormData::new().map_err(|e| network_error("Failed to prepare upload", js_detail(e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &upload.file_name)
        .map_err(|e| network_error("Failed to prepare upload", js_detail(e)))?;
    Ok(form)
}

impl PredictTransport for BrowserTransport {
    async fn send(&self, request: &PredictRequest) -> Result<RawResponse, DashboardError> {
        log::debug!("{} request to: {}", request.method(), self.predict_url);

        let prepared = match request {
            PredictRequest::Upload(upload) => {
                log::debug!("Uploading {} ({} bytes)", upload.file_name, upload.content.len());
                Request::post(&self.predict_url).body(upload_form(upload)?)
            }
            _ => Request::get(&self.predict_url).query(request.query()).build(),
        }
        .map_err(|e| network_error("Failed to build request", e))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| network_error("Request failed", e))?;

        let status = response.status();
        log::trace!("{} - Response {} received, reading body", self.predict_url, status);
        let body = response
            .text()
            .await
            .map_err(|e| network_error("Failed to read response body", e))?;

        Ok(RawResponse { status, body })
    }
}

/// Reads the file picked in `csvFile`.
pub async fn read_upload(file: File) -> Result<CsvUpload, DashboardError> {
    let file_name = file.name();
    log::debug!("Reading selected file {}", file_name);

    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|e| {
        DashboardError::Validation(format!("Could not read {}: {}", file_name, js_detail(e)))
    })?;
    let content = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(CsvUpload { file_name, content })
}
