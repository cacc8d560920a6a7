use coursematch_common::{CourseMatchError, Result};
use reqwest::Client;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

/// Spawn a task that GETs `url` immediately and then every `interval`.
///
/// Failures are logged and never stop the loop.
pub fn spawn_keepalive(url: String, interval: Duration) -> Result<JoinHandle<()>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| CourseMatchError::network(format!("Failed to create HTTP client: {}", e)))?;

    info!("Keep-alive enabled: {} every {:?}", url, interval);

    Ok(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match ping_once(&client, &url).await {
                Ok(status) => info!("Pinged backend: {}", status),
                Err(e) => error!("Error pinging backend: {}", e),
            }
        }
    }))
}

/// Single keep-alive request, returning the HTTP status code
pub async fn ping_once(client: &Client, url: &str) -> Result<u16> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CourseMatchError::network(format!("GET {} failed: {}", url, e)))?;

    Ok(response.status().as_u16())
}
