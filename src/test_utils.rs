#[cfg(test)]
pub mod test_utils {
    use crate::config::build_http_client;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use std::path::Path;
    use std::time::Duration;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create AppState relaying to `backend_url`
    pub fn setup_test_app_state(backend_url: &str) -> AppState {
        AppState {
            http: build_http_client(Duration::from_secs(5)).expect("Failed to build HTTP client"),
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Install a global tracing subscriber for tests, once per test binary.
    ///
    /// Output goes through the test writer so it is captured per test. The
    /// log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        // Only the first call installs; later calls find a subscriber already set.
        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    }

    /// Create axum app for testing
    pub fn setup_test_app(backend_url: &str, static_dir: Option<&Path>) -> Router {
        init_test_tracing();

        let state = setup_test_app_state(backend_url);
        create_router(state, static_dir)
    }

    #[test]
    fn test_setup_installs_tracing() {
        let _app = setup_test_app("http://127.0.0.1:8000", None);

        assert!(tracing::dispatcher::has_been_set());
        init_test_tracing();
        assert!(tracing::dispatcher::has_been_set());
    }
}
