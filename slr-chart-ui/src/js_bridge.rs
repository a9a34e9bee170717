//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are evaluated as
//! globals (no ES modules), exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize data and call those globals.

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('launch-dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderPieChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), they are evaluated
/// at global scope via indirect `eval()` once D3 is ready, then each
/// function is explicitly promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__launchChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__launchChartScripts);
                    delete window.__launchChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__launchChartsReady = true;
                    console.log('launch-dashboard charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the success pie chart (per-site successes, or one site's
/// success/failure split).
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__launchChartsReady &&
                    typeof window.renderPieChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderPieChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('renderPieChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the payload/outcome scatter chart, colored by booster category.
///
/// Same polling discipline as [`render_pie_chart`].
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__launchChartsReady &&
                    typeof window.renderScatterChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderScatterChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('renderScatterChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
