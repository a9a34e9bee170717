//! SpaceX Launch Records Dashboard
//!
//! A single page with three controls: a launch-site dropdown, a pie chart
//! of launch successes, a payload-mass range slider, and a scatter plot of
//! payload mass against launch outcome colored by booster version.
//!
//! Data flow:
//! 1. `build.rs` copies `launches.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database.
//! 4. When the user changes the site selection, the pie chart re-queries
//!    and redraws; when the site or payload range changes, the scatter
//!    chart re-queries and redraws.

use dioxus::prelude::*;
use slr_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, PayloadRangePicker, SiteSelector,
};
use slr_chart_ui::js_bridge;
use slr_chart_ui::state::AppState;
use slr_core::payload::PayloadRange;
use slr_core::selection::SiteSelection;
use slr_db::Database;

/// Launch records for all sites.
const LAUNCHES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/launches.csv"));

/// Chart container DOM element IDs used by D3.js to render into.
const PIE_CHART_ID: &str = "success-pie-chart";
const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("launch-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the dataset into SQLite on mount ───
    use_effect(move || {
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_launches(LAUNCHES_CSV) {
                    log::error!("Failed to load launches: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load launch data: {}", e)));
                    state.loading.set(false);
                    return;
                }

                // Populate the site dropdown
                match db.query_sites() {
                    Ok(sites) => state.sites.set(sites),
                    Err(e) => {
                        log::error!("Failed to list launch sites: {}", e);
                        state
                            .error_msg
                            .set(Some(format!("Failed to list launch sites: {}", e)));
                        state.loading.set(false);
                        return;
                    }
                }

                // Default the slider to the dataset's payload extent
                if let Ok((min, max)) = db.query_payload_bounds() {
                    state.payload_min.set(min);
                    state.payload_max.set(max);
                }

                state.db.set(Some(db));
                state.loading.set(false);

                // Initialize D3.js chart scripts (one-time)
                js_bridge::init_charts();
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // ─── Effect 2: Redraw the pie chart when the site changes ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let selection = SiteSelection::from_value(&(state.selected_site)());

        let (slices, title) = match selection.site() {
            // ALL: one slice per site, value = successful launches there
            None => {
                let per_site = match db.query_success_by_site() {
                    Ok(s) => s,
                    Err(e) => {
                        log::error!("Pie query failed: {}", e);
                        return;
                    }
                };
                let slices: Vec<serde_json::Value> = per_site
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "label": s.launch_site,
                            "value": s.successes,
                        })
                    })
                    .collect();
                (slices, "Total Success Launches By Site".to_string())
            }
            // Single site: success vs. failure split
            Some(site) => {
                let counts = match db.query_site_outcome_counts(site) {
                    Ok(c) => c,
                    Err(e) => {
                        log::error!("Pie query failed for {}: {}", site, e);
                        return;
                    }
                };
                if counts.total() == 0 {
                    js_bridge::destroy_chart(PIE_CHART_ID);
                    return;
                }
                let slices = vec![
                    serde_json::json!({"label": "Success", "value": counts.successes}),
                    serde_json::json!({"label": "Failure", "value": counts.failures}),
                ];
                (
                    slices,
                    format!("Total Success Launches for site {}", site),
                )
            }
        };

        if slices.is_empty() {
            js_bridge::destroy_chart(PIE_CHART_ID);
            return;
        }

        let data_json = serde_json::to_string(&slices).unwrap_or_default();
        let config_json = serde_json::json!({ "title": title }).to_string();
        js_bridge::render_pie_chart(PIE_CHART_ID, &data_json, &config_json);
    });

    // ─── Effect 3: Redraw the scatter chart when site or range changes ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let selection = SiteSelection::from_value(&(state.selected_site)());
        let range = PayloadRange::new((state.payload_min)(), (state.payload_max)());

        let points = match db.query_payload_outcomes(&selection, &range) {
            Ok(p) => p,
            Err(e) => {
                log::error!("Scatter query failed: {}", e);
                return;
            }
        };

        if points.is_empty() {
            js_bridge::destroy_chart(SCATTER_CHART_ID);
            return;
        }

        let title = match selection.site() {
            None => "Payload vs. Launch Outcome for All Sites".to_string(),
            Some(site) => format!("Payload vs. Launch Outcome for {}", site),
        };

        let data_json = serde_json::to_string(&points).unwrap_or_default();
        let config_json = serde_json::json!({
            "title": title,
            "xMin": range.min_kg,
            "xMax": range.max_kg,
        })
        .to_string();
        js_bridge::render_scatter_chart(SCATTER_CHART_ID, &data_json, &config_json);
    });

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "SpaceX Launch Records Dashboard".to_string(),
                subtitle: "Launch successes and payload outcomes across Falcon 9 launch sites".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                SiteSelector {}

                ChartContainer {
                    id: PIE_CHART_ID.to_string(),
                    loading: false,
                    min_height: 440,
                }

                PayloadRangePicker {}

                ChartContainer {
                    id: SCATTER_CHART_ID.to_string(),
                    loading: false,
                    min_height: 380,
                }
            }
        }
    }
}
