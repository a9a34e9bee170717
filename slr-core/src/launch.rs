use crate::booster::BoosterCategory;
use crate::outcome::Outcome;
use csv::ReaderBuilder;
use serde::Serialize;

/// Embedded launch-records dataset, one row per Falcon 9 launch.
pub static LAUNCHES_CSV: &str = include_str!("../../fixtures/launches.csv");

/// Expected CSV header columns, after the optional leading index column.
///
/// `Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category`
pub const COLUMN_COUNT: usize = 6;

/// A single launch record from the dashboard dataset.
///
/// Rows are immutable for the session; the dataset is loaded once and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub flight_number: i64,
    pub launch_site: String,
    pub outcome: Outcome,
    pub payload_mass_kg: f64,
    pub booster_version: String,
    pub booster_category: BoosterCategory,
}

impl LaunchRecord {
    /// All launch records from the embedded dataset.
    pub fn all() -> Vec<LaunchRecord> {
        match parse_launch_csv(LAUNCHES_CSV) {
            Ok(records) => records,
            Err(_) => panic!("failed to parse embedded launches csv"),
        }
    }
}

/// Parse the launch dashboard CSV into records.
///
/// The dataset is a pandas export: a header row, then one row per launch,
/// with an optional unnamed leading index column. Both the 6-column and
/// 7-column layouts parse. Rows whose flight number or payload mass is
/// non-numeric are skipped, not fatal.
pub fn parse_launch_csv(csv_data: &str) -> anyhow::Result<Vec<LaunchRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        // Pandas exports prepend an unnamed index column; shift past it.
        let off = usize::from(r.len() > COLUMN_COUNT);

        let flight_number: i64 = match r.get(off).unwrap_or("").trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let launch_site = r.get(off + 1).unwrap_or("").trim();
        let class: i64 = r.get(off + 2).unwrap_or("").trim().parse().unwrap_or(0);
        let payload_mass_kg: f64 = match r.get(off + 3).unwrap_or("").trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let booster_version = r.get(off + 4).unwrap_or("").trim();
        let booster_category = BoosterCategory::parse(r.get(off + 5).unwrap_or(""));

        if launch_site.is_empty() {
            skipped += 1;
            continue;
        }

        records.push(LaunchRecord {
            flight_number,
            launch_site: launch_site.to_string(),
            outcome: Outcome::from_class(class),
            payload_mass_kg,
            booster_version: booster_version.to_string(),
            booster_category,
        });
    }
    log::info!(
        "parsed {} launch records, skipped {} malformed rows",
        records.len(),
        skipped
    );
    Ok(records)
}

/// Distinct launch sites in first-appearance order.
pub fn distinct_sites(records: &[LaunchRecord]) -> Vec<String> {
    let mut sites: Vec<String> = Vec::new();
    for record in records {
        if !sites.contains(&record.launch_site) {
            sites.push(record.launch_site.clone());
        }
    }
    sites
}
