//! In-memory SQLite database layer for SpaceX launch records.
//!
//! This crate loads the launch dashboard CSV into an in-memory SQLite
//! database and exposes typed query methods for consumption by the
//! Dioxus/D3.js dashboard compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the consuming crate
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use slr_db::Database;
//!
//! let db = Database::new().unwrap();
//!
//! // Load CSV data (typically via include_str! in the consuming crate)
//! db.load_launches("\
//! ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ").unwrap();
//!
//! // Query typed results
//! let sites = db.query_sites().unwrap();
//! assert_eq!(sites, vec!["CCAFS LC-40"]);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`]: a single `launches` table indexed on
//! site and payload mass. Pie chart aggregates are derived on-the-fly via
//! SQL `GROUP BY` / `SUM(outcome)` queries against it.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping the launch-records dataset.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_launches`]
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
