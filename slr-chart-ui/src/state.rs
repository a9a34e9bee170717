//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use slr_core::payload;
use slr_core::selection::ALL_SITES;
use slr_db::Database;
use dioxus::prelude::*;

/// Shared application state for the launch dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected launch site ("ALL" for no filter)
    pub selected_site: Signal<String>,
    /// Available launch sites for the dropdown
    pub sites: Signal<Vec<String>>,
    /// Lower payload slider thumb, in kg
    pub payload_min: Signal<f64>,
    /// Upper payload slider thumb, in kg
    pub payload_max: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(ALL_SITES.to_string()),
            sites: Signal::new(Vec::new()),
            payload_min: Signal::new(payload::SLIDER_MIN_KG),
            payload_max: Signal::new(payload::SLIDER_MAX_KG),
        }
    }
}
