//! Download and validate the launch dashboard dataset.

use anyhow::Context;
use log::info;
use slr_core::fetch::fetch_launch_csv;
use slr_core::launch::parse_launch_csv;

/// Fetch the dataset CSV and write it to the output path.
///
/// The body is parsed before anything is written so a bad download can
/// never clobber a good fixture.
pub async fn run_fetch(output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let body = match fetch_launch_csv(&client).await {
        Some(b) => b,
        None => anyhow::bail!("failed to download the launch dataset"),
    };

    let records = parse_launch_csv(&body)?;
    if records.is_empty() {
        anyhow::bail!("downloaded dataset contained no parsable launch rows");
    }
    info!("Downloaded {} launch records", records.len());

    if let Some(parent) = std::path::Path::new(output).parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, &body).with_context(|| format!("failed to write {}", output))?;
    info!("Wrote dataset to {}", output);
    Ok(())
}
