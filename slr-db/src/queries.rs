//! Typed query methods for retrieving launch-record data.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for the D3.js chart components. These two chart
//! queries are the reactive core of the dashboard: the pie chart redraws
//! from the outcome aggregates, the scatter chart from the payload window.

use crate::models::{LaunchPoint, OutcomeCounts, SiteSuccessCount};
use crate::Database;
use rusqlite::params;
use slr_core::payload::PayloadRange;
use slr_core::selection::SiteSelection;

fn map_point(row: &rusqlite::Row<'_>) -> rusqlite::Result<LaunchPoint> {
    Ok(LaunchPoint {
        flight_number: row.get(0)?,
        launch_site: row.get(1)?,
        payload_mass_kg: row.get(2)?,
        outcome: row.get(3)?,
        booster_category: row.get(4)?,
    })
}

impl Database {
    /// Get the distinct launch sites, ordered alphabetically.
    ///
    /// Feeds the site dropdown; the "All Sites" entry is prepended by the
    /// UI, not stored here.
    pub fn query_sites(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT launch_site FROM launches
             ORDER BY launch_site",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Get successful launch counts per site (the all-sites pie chart).
    ///
    /// One slice per site, value = number of successful launches there.
    /// Ordered by success count descending so slice order is stable.
    pub fn query_success_by_site(&self) -> anyhow::Result<Vec<SiteSuccessCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, SUM(outcome) as successes
             FROM launches
             GROUP BY launch_site
             ORDER BY successes DESC, launch_site",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteSuccessCount {
                    launch_site: row.get(0)?,
                    successes: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_success_by_site returned {} sites", rows.len());
        Ok(rows)
    }

    /// Get success and failure totals for one site (the two-slice pie).
    ///
    /// An unknown site yields zero counts rather than an error; the app
    /// clears the chart when the total is zero.
    pub fn query_site_outcome_counts(&self, site: &str) -> anyhow::Result<OutcomeCounts> {
        let conn = self.conn.borrow();
        let (successes, total): (i64, i64) = conn.query_row(
            "SELECT COALESCE(SUM(outcome), 0), COUNT(*)
             FROM launches
             WHERE launch_site = ?1",
            params![site],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(OutcomeCounts {
            successes,
            failures: total - successes,
        })
    }

    /// Get launch points inside a payload window (the scatter chart).
    ///
    /// Returns every launch whose payload mass lies inside the inclusive
    /// range, optionally restricted to one site, ordered by payload mass.
    /// An inverted range or unknown site yields an empty result.
    pub fn query_payload_outcomes(
        &self,
        selection: &SiteSelection,
        range: &PayloadRange,
    ) -> anyhow::Result<Vec<LaunchPoint>> {
        let conn = self.conn.borrow();
        let rows = match selection.site() {
            Some(site) => {
                let mut stmt = conn.prepare(
                    "SELECT flight_number, launch_site, payload_mass, outcome, booster_category
                     FROM launches
                     WHERE launch_site = ?1 AND payload_mass >= ?2 AND payload_mass <= ?3
                     ORDER BY payload_mass, flight_number",
                )?;
                let points = stmt
                    .query_map(params![site, range.min_kg, range.max_kg], map_point)?
                    .collect::<Result<Vec<_>, _>>()?;
                points
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT flight_number, launch_site, payload_mass, outcome, booster_category
                     FROM launches
                     WHERE payload_mass >= ?1 AND payload_mass <= ?2
                     ORDER BY payload_mass, flight_number",
                )?;
                let points = stmt
                    .query_map(params![range.min_kg, range.max_kg], map_point)?
                    .collect::<Result<Vec<_>, _>>()?;
                points
            }
        };
        log::info!(
            "query: query_payload_outcomes({}) returned {} points",
            selection,
            rows.len()
        );
        Ok(rows)
    }

    /// Get the (min, max) payload mass across all launches.
    ///
    /// Used for the initial slider thumb positions. Errors when the
    /// table is empty.
    pub fn query_payload_bounds(&self) -> anyhow::Result<(f64, f64)> {
        let conn = self.conn.borrow();
        let bounds = conn.query_row(
            "SELECT MIN(payload_mass), MAX(payload_mass) FROM launches",
            [],
            |row| Ok((row.get::<_, f64>(0)?, row.get::<_, f64>(1)?)),
        )?;
        Ok(bounds)
    }

    /// Total number of loaded launches.
    pub fn query_launch_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    /// Helper to create a database with a small three-site dataset.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,CCAFS LC-40,1,677.0,F9 v1.0  B0007,v1.0
3,4,CCAFS LC-40,1,3170.0,F9 v1.1 B1011,v1.1
4,5,VAFB SLC-4E,1,500.0,F9 v1.1 B1003,v1.1
5,6,VAFB SLC-4E,0,9600.0,F9 FT B1029.1,FT
6,7,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
7,8,KSC LC-39A,1,5300.0,F9 FT B1032.1,FT
8,9,KSC LC-39A,0,6070.0,F9 B4 B1040.1,B4
";
        db.load_launches(csv).unwrap();
        db
    }

    #[test]
    fn query_sites_ordered_alphabetically() {
        let db = sample_db();
        let sites = db.query_sites().unwrap();
        assert_eq!(sites, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    }

    #[test]
    fn success_by_site_counts_and_order() {
        let db = sample_db();
        let slices = db.query_success_by_site().unwrap();
        assert_eq!(slices.len(), 3);
        // CCAFS LC-40 and KSC LC-39A both have 2 successes; ties break
        // alphabetically, then VAFB SLC-4E with 1.
        assert_eq!(slices[0].launch_site, "CCAFS LC-40");
        assert_eq!(slices[0].successes, 2);
        assert_eq!(slices[1].launch_site, "KSC LC-39A");
        assert_eq!(slices[1].successes, 2);
        assert_eq!(slices[2].launch_site, "VAFB SLC-4E");
        assert_eq!(slices[2].successes, 1);
    }

    #[test]
    fn success_by_site_sums_to_total_successes() {
        let db = sample_db();
        let slices = db.query_success_by_site().unwrap();
        let pie_total: i64 = slices.iter().map(|s| s.successes).sum();

        let full_range = PayloadRange::new(0.0, 10_000.0);
        let all_points = db
            .query_payload_outcomes(&SiteSelection::All, &full_range)
            .unwrap();
        let successes = all_points.iter().filter(|p| p.outcome == 1).count() as i64;
        assert_eq!(pie_total, successes);
    }

    #[test]
    fn site_outcome_counts_partition_site_rows() {
        let db = sample_db();
        let counts = db.query_site_outcome_counts("CCAFS LC-40").unwrap();
        assert_eq!(counts.successes, 2);
        assert_eq!(counts.failures, 2);
        assert_eq!(counts.total(), 4);

        let counts = db.query_site_outcome_counts("VAFB SLC-4E").unwrap();
        assert_eq!(counts.successes, 1);
        assert_eq!(counts.failures, 1);
    }

    #[test]
    fn unknown_site_yields_zero_counts() {
        let db = sample_db();
        let counts = db.query_site_outcome_counts("NOPE").unwrap();
        assert_eq!(counts.successes, 0);
        assert_eq!(counts.failures, 0);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn scatter_full_range_all_sites_returns_every_row() {
        let db = sample_db();
        let points = db
            .query_payload_outcomes(&SiteSelection::All, &PayloadRange::new(0.0, 10_000.0))
            .unwrap();
        assert_eq!(points.len() as i64, db.query_launch_count().unwrap());
    }

    #[test]
    fn scatter_filters_by_site_and_range() {
        let db = sample_db();
        let selection = SiteSelection::Site("KSC LC-39A".to_string());
        let range = PayloadRange::new(2000.0, 5500.0);
        let points = db.query_payload_outcomes(&selection, &range).unwrap();
        assert_eq!(points.len(), 2);
        for p in &points {
            assert_eq!(p.launch_site, "KSC LC-39A");
            assert!(p.payload_mass_kg >= 2000.0 && p.payload_mass_kg <= 5500.0);
        }
    }

    #[test]
    fn scatter_range_endpoints_are_inclusive() {
        let db = sample_db();
        let range = PayloadRange::new(525.0, 677.0);
        let points = db
            .query_payload_outcomes(&SiteSelection::All, &range)
            .unwrap();
        let masses: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(masses, vec![525.0, 677.0]);
    }

    #[test]
    fn scatter_ordered_by_payload_mass() {
        let db = sample_db();
        let points = db
            .query_payload_outcomes(&SiteSelection::All, &PayloadRange::new(0.0, 10_000.0))
            .unwrap();
        for pair in points.windows(2) {
            assert!(pair[0].payload_mass_kg <= pair[1].payload_mass_kg);
        }
    }

    #[test]
    fn scatter_inverted_range_is_empty() {
        let db = sample_db();
        let points = db
            .query_payload_outcomes(&SiteSelection::All, &PayloadRange::new(8000.0, 2000.0))
            .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn scatter_unknown_site_is_empty() {
        let db = sample_db();
        let selection = SiteSelection::Site("NOPE".to_string());
        let points = db
            .query_payload_outcomes(&selection, &PayloadRange::new(0.0, 10_000.0))
            .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn scatter_carries_booster_category_labels() {
        let db = sample_db();
        let points = db
            .query_payload_outcomes(
                &SiteSelection::Site("KSC LC-39A".to_string()),
                &PayloadRange::new(0.0, 10_000.0),
            )
            .unwrap();
        let categories: Vec<&str> = points.iter().map(|p| p.booster_category.as_str()).collect();
        assert!(categories.contains(&"FT"));
        assert!(categories.contains(&"B4"));
    }

    #[test]
    fn payload_bounds_span_the_dataset() {
        let db = sample_db();
        let (min, max) = db.query_payload_bounds().unwrap();
        assert!((min - 0.0).abs() < 0.01);
        assert!((max - 9600.0).abs() < 0.01);
    }

    #[test]
    fn payload_bounds_error_on_empty_table() {
        let db = Database::new().unwrap();
        assert!(db.query_payload_bounds().is_err());
    }

    #[test]
    fn full_dashboard_workflow() {
        let db = sample_db();

        // 1. Populate the dropdown
        let sites = db.query_sites().unwrap();
        assert!(!sites.is_empty());

        // 2. Initial slider position
        let (min, max) = db.query_payload_bounds().unwrap();
        assert!(min <= max);

        // 3. ALL pie chart
        let slices = db.query_success_by_site().unwrap();
        assert_eq!(slices.len(), sites.len());

        // 4. Single-site pie chart partitions that site's rows
        let site = &sites[0];
        let counts = db.query_site_outcome_counts(site).unwrap();
        let site_points = db
            .query_payload_outcomes(
                &SiteSelection::Site(site.clone()),
                &PayloadRange::new(min, max),
            )
            .unwrap();
        assert_eq!(counts.total(), site_points.len() as i64);

        // 5. Narrowing the payload window never grows the result
        let narrowed = db
            .query_payload_outcomes(
                &SiteSelection::Site(site.clone()),
                &PayloadRange::new(min + 100.0, max - 100.0),
            )
            .unwrap();
        assert!(narrowed.len() <= site_points.len());
    }
}
