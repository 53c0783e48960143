use anyhow::{anyhow, bail, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// Poll `url` until it answers with a JSON object, returning its keys.
pub async fn poll_endpoint(url: &str, attempts: u32, timeout: Duration, interval: Duration) -> Result<Vec<String>> {
    let client = crate::config::build_http_client(timeout)?;

    for attempt in 0..attempts {
        match fetch_keys(&client, url).await {
            Ok(keys) => {
                debug!("{} answered on attempt {}", url, attempt);
                return Ok(keys);
            }
            Err(e) => {
                warn!("Attempt {} error: {}", attempt, e);
                println!("Attempt {} error: {}", attempt, e);
                tokio::time::sleep(interval).await;
            }
        }
    }

    bail!("FAILED to reach {}", url)
}

async fn fetch_keys(client: &reqwest::Client, url: &str) -> Result<Vec<String>> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&body).map_err(|e| anyhow!("not a JSON object: {}", e))?;
    Ok(object.keys().cloned().collect())
}

pub async fn check(url: &str, attempts: u32, timeout: Duration, interval: Duration) -> Result<()> {
    let keys = poll_endpoint(url, attempts, timeout, interval).await?;
    println!("OK keys= {:?}", keys);
    Ok(())
}
