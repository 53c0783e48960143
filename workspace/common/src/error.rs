use thiserror::Error;

/// Failures of a dashboard flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The request could not complete
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("Server error: {status}")]
    Server { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// User input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// A chart engine refused the chart
    #[error("Rendering failed: {0}")]
    Render(String),

    /// The flow is already waiting for a response
    #[error("A prediction is already in progress")]
    Busy,
}

impl DashboardError {
    /// Message shown in the blocking alert. `None` when the user is not told.
    pub fn alert_message(&self) -> Option<String> {
        match self {
            DashboardError::Busy => None,
            DashboardError::Validation(message) => Some(message.clone()),
            other => Some(format!("Prediction failed: {}", other)),
        }
    }
}
