use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::schemas::AppState;

/// Settings of the dashboard host.
///
/// Read from `priceforecast.toml` (optional) and `PRICEFORECAST_*`
/// environment variables, in that order of precedence (lowest first).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// Address the web server binds to
    pub bind_address: String,
    /// Base URL of the prediction backend (without `/predict/`)
    pub backend_url: String,
    /// Directory with the built frontend (index.html and the wasm bundle)
    pub static_dir: PathBuf,
    /// Timeout of a relayed backend request, in seconds
    pub request_timeout_secs: u64,
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Load settings from the optional config file and the environment
pub fn load_settings() -> Result<Settings> {
    let settings = config::Config::builder()
        .set_default("bind_address", "0.0.0.0:3000")?
        .set_default("backend_url", "http://127.0.0.1:8000")?
        .set_default("static_dir", "workspace/frontend/dist")?
        .set_default("request_timeout_secs", 30)?
        .add_source(config::File::with_name("priceforecast").required(false))
        .add_source(config::Environment::with_prefix("PRICEFORECAST"))
        .build()?
        .try_deserialize::<Settings>()?;

    debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}

/// Build the HTTP client shared by the relay handlers
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("priceforecast/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Initialize application state from settings
pub fn initialize_app_state(settings: &Settings) -> Result<AppState> {
    tracing::info!("Relaying predictions to {}", settings.backend_url);
    Ok(AppState {
        http: build_http_client(settings.request_timeout())?,
        backend_url: settings.backend_url.trim_end_matches('/').to_string(),
    })
}
