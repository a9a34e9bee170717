//! SQL schema definitions for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// A single `launches` table holds the dataset: one row per launch with
/// its site, 0/1 outcome, payload mass in kilograms, and booster version
/// strings. Both chart queries filter on `launch_site` and
/// `payload_mass`, so each gets an index.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS launches (
        flight_number INTEGER PRIMARY KEY,
        launch_site TEXT NOT NULL,
        outcome INTEGER NOT NULL,
        payload_mass REAL NOT NULL,
        booster_version TEXT NOT NULL,
        booster_category TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_launches_site ON launches(launch_site);
    CREATE INDEX IF NOT EXISTS idx_launches_payload ON launches(payload_mass);

    "#
}
