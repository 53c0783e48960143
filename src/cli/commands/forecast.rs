use anyhow::{Context, Result};
use common::{CsvUpload, DashboardController};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::terminal::TerminalView;
use crate::transport::HttpTransport;

/// Run the month flow when `month` is given, the twelve-month flow otherwise.
pub async fn forecast(
    backend_url: &str,
    month: Option<&str>,
    csv: Option<&Path>,
    timeout: Duration,
) -> Result<()> {
    let transport = HttpTransport::new(backend_url, timeout)?;
    info!("Requesting predictions from {}", transport.predict_url());
    let controller = DashboardController::new(transport);
    let view = TerminalView::new(std::io::stdout());

    match month {
        Some(month) => {
            controller.submit_month(&view, month).await?;
        }
        None => {
            let upload = match csv {
                Some(path) => Some(read_csv(path).await?),
                None => None,
            };
            controller.run_forecast(&view, upload).await?;
        }
    }
    Ok(())
}

async fn read_csv(path: &Path) -> Result<CsvUpload> {
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.csv".to_string());
    Ok(CsvUpload { file_name, content })
}
