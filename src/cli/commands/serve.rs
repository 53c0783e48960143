use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error, warn};

use crate::config::{initialize_app_state, Settings};
use crate::router::create_router;

pub async fn serve(settings: &Settings) -> Result<()> {
    trace!("Entering serve function");
    info!("Price forecast dashboard starting up");
    debug!("Backend URL: {}", settings.backend_url);
    debug!("Bind address: {}", settings.bind_address);

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(settings) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    let static_dir = settings.static_dir.as_path();
    let static_dir = if static_dir.is_dir() {
        Some(static_dir)
    } else {
        warn!(
            "Static directory {} not found, serving API only (build the frontend with trunk)",
            static_dir.display()
        );
        None
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state, static_dir);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", settings.bind_address);
    let listener = match TcpListener::bind(&settings.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", settings.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", settings.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Dashboard running on http://{}", settings.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", settings.bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
