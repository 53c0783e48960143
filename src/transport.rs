//! Native transport for the dashboard flows.

use common::request::{CSV_MIME, PREDICT_PATH, UPLOAD_FIELD};
use common::{DashboardError, PredictRequest, PredictTransport, RawResponse};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, error, trace};

/// `reqwest`-based client of a `/predict/` endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    predict_url: String,
}

impl HttpTransport {
    /// Creates a transport for the backend at `base_url` (without `/predict/`).
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: crate::config::build_http_client(timeout)?,
            predict_url: format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

fn network_error(context: &str, err: reqwest::Error) -> DashboardError {
    error!("{}: {}", context, err);
    DashboardError::Network(format!("{}: {}", context, err))
}

impl PredictTransport for HttpTransport {
    async fn send(&self, request: &PredictRequest) -> Result<RawResponse, DashboardError> {
        debug!("{} request to: {}", request.method(), self.predict_url);

        let builder = match request {
            PredictRequest::Upload(upload) => {
                let part = Part::bytes(upload.content.clone())
                    .file_name(upload.file_name.clone())
                    .mime_str(CSV_MIME)
                    .map_err(|e| network_error("Failed to prepare upload", e))?;
                self.client
                    .post(&self.predict_url)
                    .multipart(Form::new().part(UPLOAD_FIELD, part))
            }
            _ => {
                let mut builder = self.client.get(&self.predict_url);
                if let Some(pair) = request.query() {
                    builder = builder.query(&[pair]);
                }
                builder
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| network_error("Request failed", e))?;
        let status = response.status().as_u16();
        trace!("{} - Response {} received, reading body", self.predict_url, status);
        let body = response
            .text()
            .await
            .map_err(|e| network_error("Failed to read response body", e))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::CsvUpload;
    use wiremock::matchers::{body_string_contains, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(server: &MockServer) -> HttpTransport {
        HttpTransport::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_forecast_is_plain_get() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/predict/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = transport(&mock_server).send(&PredictRequest::Forecast).await.unwrap();

        assert_eq!(response, RawResponse { status: 200, body: "{}".to_string() });
    }

    #[tokio::test]
    async fn test_month_is_sent_as_query() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/predict/"))
            .and(query_param("month", "2025-03"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"predicted_price": 1612.4}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = transport(&mock_server)
            .send(&PredictRequest::Month("2025-03".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.body.contains("1612.4"));
    }

    #[tokio::test]
    async fn test_upload_is_multipart_post() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict/"))
            .and(header_exists("content-type"))
            .and(body_string_contains(r#"name="file"; filename="prices.csv""#))
            .and(body_string_contains("Content-Type: text/csv"))
            .and(body_string_contains("2024-01-01,1000"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let upload = CsvUpload {
            file_name: "prices.csv".to_string(),
            content: b"date,price\n2024-01-01,1000\n".to_vec(),
        };
        let response = transport(&mock_server)
            .send(&PredictRequest::Upload(upload))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/predict/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&mock_server)
            .await;

        let response = transport(&mock_server).send(&PredictRequest::Forecast).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, "internal error");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let transport = HttpTransport::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();

        let result = transport.send(&PredictRequest::Forecast).await;

        assert!(matches!(result, Err(DashboardError::Network(_))));
    }
}
