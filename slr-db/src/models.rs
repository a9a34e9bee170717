//! Query result model structs for launch-record data.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// One pie slice of the all-sites chart: successful launch count per site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSuccessCount {
    pub launch_site: String,
    pub successes: i64,
}

/// Success/failure totals for a single launch site (the two-slice pie).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCounts {
    pub successes: i64,
    pub failures: i64,
}

impl OutcomeCounts {
    pub fn total(&self) -> i64 {
        self.successes + self.failures
    }
}

/// One scatter chart point: payload mass against the 0/1 launch outcome.
///
/// `booster_category` drives point color; `launch_site` and
/// `flight_number` feed the tooltip.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LaunchPoint {
    pub flight_number: i64,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    /// 0 = failure, 1 = success (the dataset's `class` encoding).
    pub outcome: i64,
    pub booster_category: String,
}
