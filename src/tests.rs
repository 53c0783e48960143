#[cfg(test)]
mod integration_tests {
    use crate::schemas::{ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::setup_test_app;
    use crate::transport::HttpTransport;
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use common::{DashboardController, DashboardError, ForecastResponse};
    use std::time::Duration;
    use tokio::net::TcpListener;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FORECAST_BODY: &str = r#"{
        "current_price": 100.5,
        "metrics": {"mae": 3.1, "rmse": 4.2, "accuracy": 95.0, "confidence": 90.0, "trend_pct": 2.3},
        "history": [{"date": "2024-12-01", "actual": 98.0, "predicted": 99.1}],
        "forecast": [{"date": "2025-01-01T00:00:00Z", "forecast": 120.4, "change_pct": -3.2}],
        "avg_forecast": 110
    }"#;

    async fn backend() -> MockServer {
        MockServer::start().await
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app("http://127.0.0.1:8000/", None);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.backend, "http://127.0.0.1:8000");
    }

    #[tokio::test]
    async fn test_get_forecast_is_relayed() {
        let mock_server = backend().await;
        Mock::given(method("GET"))
            .and(path("/predict/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_string(FORECAST_BODY),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let server = TestServer::new(setup_test_app(&mock_server.uri(), None)).unwrap();

        let response = server.get("/predict/").await;

        response.assert_status(StatusCode::OK);
        let body: ForecastResponse = response.json();
        assert_eq!(body.current_price, Some(100.5));
        assert_eq!(body.forecast.len(), 1);
    }

    #[tokio::test]
    async fn test_month_query_is_forwarded() {
        let mock_server = backend().await;
        Mock::given(method("GET"))
            .and(path("/predict/"))
            .and(query_param("month", "2025-03"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"predicted_price": 1612.4}"#))
            .expect(1)
            .mount(&mock_server)
            .await;
        let server = TestServer::new(setup_test_app(&mock_server.uri(), None)).unwrap();

        let response = server.get("/predict/").add_query_param("month", "2025-03").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("1612.4"));
    }

    #[tokio::test]
    async fn test_backend_error_status_passes_through() {
        let mock_server = backend().await;
        Mock::given(method("GET"))
            .and(path("/predict/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&mock_server)
            .await;
        let server = TestServer::new(setup_test_app(&mock_server.uri(), None)).unwrap();

        let response = server.get("/predict/").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "internal error");
    }

    #[tokio::test]
    async fn test_upload_is_relayed_as_csv() {
        let mock_server = backend().await;
        Mock::given(method("POST"))
            .and(path("/predict/"))
            .and(body_string_contains(r#"filename="prices.csv""#))
            .and(body_string_contains("Content-Type: text/csv"))
            .and(body_string_contains("2024-01-01,1000"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FORECAST_BODY))
            .expect(1)
            .mount(&mock_server)
            .await;
        let server = TestServer::new(setup_test_app(&mock_server.uri(), None)).unwrap();

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"date,price\n2024-01-01,1000\n".to_vec())
                .file_name("prices.csv")
                .mime_type("text/csv"),
        );
        let response = server.post("/predict/").multipart(form).await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_without_file_is_rejected() {
        let mock_server = backend().await;
        let server = TestServer::new(setup_test_app(&mock_server.uri(), None)).unwrap();

        let form = MultipartForm::new().add_text("note", "no csv here");
        let response = server.post("/predict/").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_UPLOAD");
        assert!(!body.success);
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_bad_gateway() {
        let server = TestServer::new(setup_test_app("http://127.0.0.1:1", None)).unwrap();

        let response = server.get("/predict/").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "BACKEND_UNREACHABLE");
        assert!(body.error.starts_with("Prediction backend unreachable"));
    }

    #[tokio::test]
    async fn test_dashboard_assets_are_served() {
        let dir = std::env::temp_dir().join(format!("priceforecast-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>dashboard</html>").unwrap();
        let server = TestServer::new(setup_test_app("http://127.0.0.1:1", Some(&dir))).unwrap();

        let index = server.get("/index.html").await;
        let fallback = server.get("/some/client/route").await;

        index.assert_status(StatusCode::OK);
        assert_eq!(index.text(), "<html>dashboard</html>");
        assert_eq!(fallback.text(), "<html>dashboard</html>");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_controller_through_relay() {
        let mock_server = backend().await;
        Mock::given(method("GET"))
            .and(path("/predict/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FORECAST_BODY))
            .mount(&mock_server)
            .await;
        let app = setup_test_app(&mock_server.uri(), None);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let transport = HttpTransport::new(&format!("http://{}", address), Duration::from_secs(5)).unwrap();
        let controller = DashboardController::new(transport);
        let view = crate::terminal::TerminalView::new(Vec::new());

        let response = controller.run_forecast(&view, None).await.unwrap();

        assert_eq!(response.avg_forecast, Some(110.0));
        let output = String::from_utf8(view.into_inner()).unwrap();
        assert!(output.contains("Current price:    ₹100.50"));
        assert!(output.contains("Trend:            +2.3%"));
        assert!(output.contains("₹120.40"));
        assert!(output.contains("-3.2%"));
    }

    #[tokio::test]
    async fn test_controller_reports_backend_failure() {
        let mock_server = backend().await;
        Mock::given(method("GET"))
            .and(path("/predict/"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string(r#"{"error": "model not trained"}"#),
            )
            .mount(&mock_server)
            .await;
        let transport = HttpTransport::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let controller = DashboardController::new(transport);
        let view = crate::terminal::TerminalView::new(Vec::new());

        let result = controller.submit_month(&view, "2025-03").await;

        assert!(matches!(result, Err(DashboardError::Server { status: 500, .. })));
        let output = String::from_utf8(view.into_inner()).unwrap();
        assert!(output.contains("! Prediction failed: Server error: 500"));
    }
}
