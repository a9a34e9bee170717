//! Per-site launch statistics printed to stdout.
//!
//! Runs the same queries the dashboard's pie chart uses, so the CLI
//! doubles as a sanity check on a freshly fetched dataset.

use anyhow::Context;
use slr_core::launch::LAUNCHES_CSV;
use slr_db::Database;

pub fn run_summary(launches_csv: Option<&str>) -> anyhow::Result<()> {
    let data = match launches_csv {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?
        }
        None => LAUNCHES_CSV.to_string(),
    };

    let db = Database::new()?;
    db.load_launches(&data)?;

    let total = db.query_launch_count()?;
    let (min, max) = db.query_payload_bounds()?;
    println!(
        "{} launches, payload mass {:.0} to {:.0} kg",
        total, min, max
    );

    for site in db.query_sites()? {
        let counts = db.query_site_outcome_counts(&site)?;
        let rate = if counts.total() > 0 {
            100.0 * counts.successes as f64 / counts.total() as f64
        } else {
            0.0
        };
        println!(
            "  {:<14} {:>3} launches, {:>3} successes ({:.0}%)",
            site,
            counts.total(),
            counts.successes,
            rate
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_embedded_dataset_succeeds() {
        run_summary(None).unwrap();
    }

    #[test]
    fn summary_of_missing_file_fails() {
        assert!(run_summary(Some("does/not/exist.csv")).is_err());
    }
}
