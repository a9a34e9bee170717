//! CSV loading for populating the in-memory SQLite database.
//!
//! Parsing itself lives in `slr_core::launch`; this module only maps the
//! parsed records into `launches` rows.

use crate::Database;
use rusqlite::params;
use slr_core::launch::parse_launch_csv;

impl Database {
    /// Load launch records from the dashboard CSV string.
    ///
    /// Expected format (with headers, optional leading index column):
    /// `Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category`
    ///
    /// Rows with non-numeric flight numbers or payload masses are skipped
    /// by the parser. Re-loading the same flight number replaces the row.
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<()> {
        let records = parse_launch_csv(csv_data)?;

        let conn = self.conn.borrow();
        let mut count = 0u32;
        for record in &records {
            conn.execute(
                "INSERT OR REPLACE INTO launches
                 (flight_number, launch_site, outcome, payload_mass, booster_version, booster_category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.flight_number,
                    record.launch_site,
                    record.outcome.as_class(),
                    record.payload_mass_kg,
                    record.booster_version,
                    record.booster_category.as_str(),
                ],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} launches", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn load_launches_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,1,500.0,F9 FT B1038.1,FT
";
        db.load_launches(csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let site: String = conn
            .query_row(
                "SELECT launch_site FROM launches WHERE flight_number = 3",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(site, "VAFB SLC-4E");

        let payload: f64 = conn
            .query_row(
                "SELECT payload_mass FROM launches WHERE flight_number = 2",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((payload - 525.0).abs() < 0.01);
    }

    #[test]
    fn load_launches_replaces_on_conflict() {
        let db = Database::new().unwrap();
        let csv1 = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,100.0,F9 v1.0  B0003,v1.0
";
        let csv2 = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,1,200.0,F9 v1.0  B0003,v1.0
";
        db.load_launches(csv1).unwrap();
        db.load_launches(csv2).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Should have 1 row after upsert");

        let outcome: i64 = conn
            .query_row(
                "SELECT outcome FROM launches WHERE flight_number = 1",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(outcome, 1);
    }

    #[test]
    fn load_launches_skips_malformed_rows() {
        let db = Database::new().unwrap();
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,1000.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,---,F9 v1.0  B0004,v1.0
2,x,CCAFS LC-40,0,500.0,F9 v1.0  B0005,v1.0
3,4,CCAFS LC-40,1,2000.0,F9 v1.1  B1003,v1.1
";
        db.load_launches(csv).unwrap();
        assert_eq!(
            db.query_launch_count().unwrap(),
            2,
            "Should only load rows with numeric flight number and payload"
        );
    }

    #[test]
    fn load_embedded_dataset() {
        let db = Database::new().unwrap();
        db.load_launches(slr_core::launch::LAUNCHES_CSV).unwrap();
        assert!(db.query_launch_count().unwrap() > 0);
        assert_eq!(db.query_sites().unwrap().len(), 4);
    }
}
