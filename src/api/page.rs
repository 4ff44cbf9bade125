//! The dashboard page.
//!
//! Cards and dropdown options are rendered server-side; the four charts are
//! fetched as Plotly figures and drawn client-side. Changing the dropdown
//! refetches only the line chart and the heatmap.

use crate::stats::Card;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn render_page(cards: &[Card], modes: &[String], default_mode: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>COD Shipping Dashboard</title>
    <script src="{plotly}"></script>
    <style>{css}</style>
</head>
<body>
    <nav class="navbar">COD Shipping Dashboard</nav>
    <main>
        <section class="row">
            <div class="col-side">{cards}</div>
            <div class="col-main"><div id="map" class="chart"></div></div>
        </section>
        <hr>
        <h2>Shipping Mode Analysis</h2>
        <section class="row">
            <div class="col-side">
                <div class="card">
                    <div class="card-header">Select Shipping Mode</div>
                    <div class="card-body">
                        <select id="list_ship_mode">{options}</select>
                    </div>
                </div>
                <div id="donut" class="chart donut"></div>
            </div>
            <div class="col-main">
                <div class="tabs">
                    <button class="tab active" data-target="lineplot">Daily Movement</button>
                    <button class="tab" data-target="heatmap">Daily Shipment Count</button>
                    <button class="tab" disabled>Total Revenue</button>
                </div>
                <div id="lineplot" class="chart tab-pane"></div>
                <div id="heatmap" class="chart tab-pane hidden"></div>
            </div>
        </section>
    </main>
    <script>{js}</script>
</body>
</html>"#,
        plotly = PLOTLY_JS,
        css = inline_css(),
        cards = render_cards(cards),
        options = render_options(modes, default_mode),
        js = inline_javascript(),
    )
}

fn render_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="card"><div class="card-header">{}</div><div class="card-body"><h1>{}</h1></div></div>"#,
                escape_html(&card.title),
                escape_html(&card.value)
            )
        })
        .collect()
}

fn render_options(modes: &[String], default_mode: &str) -> String {
    modes
        .iter()
        .map(|mode| {
            let selected = if mode == default_mode { " selected" } else { "" };
            let mode = escape_html(mode);
            format!(r#"<option value="{mode}"{selected}>{mode}</option>"#)
        })
        .collect()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; font-family: -apple-system, "Segoe UI", Roboto, sans-serif; background: #fff; }
.navbar { background: #5f4fa0; color: #fff; padding: 14px 30px; font-size: 20px; font-weight: 600; }
main { padding: 20px 30px; }
.row { display: flex; gap: 24px; }
.col-side { flex: 0 0 25%; display: flex; flex-direction: column; gap: 16px; }
.col-main { flex: 1; min-width: 0; }
.card { border: 1px solid #e5e5e5; border-radius: 6px; }
.card-header { background: #f7f7f9; padding: 8px 14px; border-bottom: 1px solid #e5e5e5; }
.card-body { padding: 12px 14px; }
.card-body h1 { margin: 0; color: #5f4fa0; }
.card-body select { width: 100%; padding: 6px; }
h2 { text-align: center; color: #6f42c1; font-size: 24px; }
.chart { width: 100%; height: 460px; }
.chart.donut { width: 400px; height: 400px; }
.tabs { display: flex; gap: 4px; border-bottom: 1px solid #ddd; }
.tab { border: none; background: none; padding: 8px 14px; cursor: pointer; color: #6f42c1; }
.tab.active { border-bottom: 2px solid #6f42c1; }
.tab:disabled { color: #aaa; cursor: default; }
.hidden { display: none; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
async function fetchJson(url) {
    const res = await fetch(url);
    if (!res.ok) throw new Error(url + ': ' + res.status);
    return res.json();
}

function draw(id, figure) {
    return Plotly.react(id, figure.data, figure.layout, { responsive: true });
}

async function updateModeCharts(mode) {
    const charts = await fetchJson('/api/v1/charts/mode?mode=' + encodeURIComponent(mode));
    await draw('lineplot', charts.line);
    await draw('heatmap', charts.heatmap);
}

document.querySelectorAll('.tab[data-target]').forEach(tab => {
    tab.addEventListener('click', () => {
        document.querySelectorAll('.tab').forEach(t => t.classList.remove('active'));
        document.querySelectorAll('.tab-pane').forEach(p => p.classList.add('hidden'));
        tab.classList.add('active');
        const pane = document.getElementById(tab.dataset.target);
        pane.classList.remove('hidden');
        Plotly.Plots.resize(pane);
    });
});

const selector = document.getElementById('list_ship_mode');
selector.addEventListener('change', () => updateModeCharts(selector.value));

(async () => {
    const map = await fetchJson('/api/v1/charts/map');
    await draw('map', map.figure);
    await draw('donut', await fetchJson('/api/v1/charts/donut'));
    await updateModeCharts(selector.value);
})();
"#
}
