//! Native-only download of the published launch dashboard dataset.
//!
//! Gated behind the `api` feature so the WASM dashboard build never pulls
//! in reqwest/tokio; only the CLI uses this.

use log::{info, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Published location of the launch dashboard CSV.
pub const DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Fetch the raw dataset CSV with bounded retry and exponential backoff.
///
/// Returns `None` when every attempt fails or yields an empty body; the
/// caller decides whether that is fatal.
pub async fn fetch_launch_csv(client: &Client) -> Option<String> {
    let max_tries = 3;
    let mut sleep_millis: u64 = 1000;

    for attempt in 1..=max_tries {
        match client.get(DATASET_URL).send().await {
            Ok(response) => {
                if response.status() != StatusCode::OK {
                    warn!(
                        "Attempt {}/{}: Bad response status for launch dataset: {}",
                        attempt,
                        max_tries,
                        response.status()
                    );
                } else {
                    match response.text().await {
                        Ok(body) => {
                            if body.len() <= 2 {
                                warn!(
                                    "Attempt {}/{}: Empty response for launch dataset",
                                    attempt, max_tries
                                );
                            } else {
                                return Some(body);
                            }
                        }
                        Err(e) => {
                            warn!(
                                "Attempt {}/{}: Failed to read response body: {}",
                                attempt, max_tries, e
                            );
                        }
                    }
                }
            }
            Err(e) => {
                warn!("Attempt {}/{}: Request failed: {}", attempt, max_tries, e);
            }
        }

        if attempt < max_tries {
            info!("Sleeping for {} milliseconds before retry", sleep_millis);
            tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
            sleep_millis *= 2;
        }
    }

    warn!("All attempts to fetch the launch dataset failed");
    None
}
