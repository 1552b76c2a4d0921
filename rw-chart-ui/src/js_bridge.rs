//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart code lives in `assets/js/line-chart.js` and is embedded
//! at compile time. It is evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module provides safe Rust wrappers that serialize
//! reading data and call those globals.

static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('RW JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// `line-chart.js` declares its functions with plain `function` statements.
/// To keep them globally accessible (not block-scoped inside the
/// setInterval callback), the script is stashed on `window`, evaluated at
/// global scope via indirect eval once D3 is ready, and each function is
/// promoted to `window.*` explicitly. Safe to call more than once.
pub fn init_charts() {
    let store_js = format!(
        "window.__rwChartScript = {};",
        serde_json::to_string(LINE_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__rwChartsReady) { delete window.__rwChartScript; return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__rwChartScript);
                    delete window.__rwChartScript;
                    if (typeof renderLevelChart !== 'undefined') window.renderLevelChart = renderLevelChart;
                    if (typeof destroyLevelChart !== 'undefined') window.destroyLevelChart = destroyLevelChart;
                    window.__rwChartsReady = true;
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the level line chart for one station.
///
/// Polls until D3 has loaded, the chart script has initialized and the
/// container element exists, then draws. Any chart already in the container
/// is disposed before the new one is created, so at most one chart instance
/// exists per container.
pub fn render_level_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__rwChartsReady &&
                    typeof window.renderLevelChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderLevelChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[RW] renderLevelChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Dispose the chart in the given container, if any.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyLevelChart !== 'undefined') {{ window.destroyLevelChart('{0}'); }} else {{ var el = document.getElementById('{0}'); if (el) el.innerHTML = ''; }}",
        container_id
    ));
}
