//! Dropdown selector for choosing a launch site.

use crate::state::AppState;
use dioxus::prelude::*;
use slr_core::selection::ALL_SITES;

/// Launch site dropdown selector.
///
/// Reads available sites from AppState and updates selected_site on change.
/// The "All Sites" entry is always first and is the default.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let sites = state.sites.read().clone();
    let selected = (state.selected_site)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_site.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "site-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Launch Site: "
            }
            select {
                id: "site-select",
                onchange: on_change,
                option {
                    value: "{ALL_SITES}",
                    selected: selected == ALL_SITES,
                    "All Sites"
                }
                for site in sites.iter() {
                    option {
                        value: "{site}",
                        selected: *site == selected,
                        "{site}"
                    }
                }
            }
        }
    }
}
