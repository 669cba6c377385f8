//! Dashboard module - BizHealth page shell
//!
//! Holds the markup the controller renders into. Separated into HTML and
//! CSS submodules; element identifiers live in [`ids`] so the template and
//! the DOM bindings cannot drift apart.
//!
//! # Architecture
//! - `html.rs`: Page structure and layout
//! - `css.rs`: Modal and health bar styling on top of Tailwind

mod css;
mod html;

pub use css::STYLES;
pub use html::TEMPLATE;

/// Element identifiers of the page layout
pub mod ids {
    pub const ALERTS: &str = "alerts-container";
    pub const FORM: &str = "dataForm";
    pub const DATE: &str = "date";
    pub const REVENUE: &str = "revenue";
    pub const EXPENSES: &str = "expenses";
    pub const INVENTORY: &str = "inventory";
    pub const CATEGORY: &str = "category";
    pub const SUBMIT: &str = "submitBtn";
    pub const STAT_REVENUE: &str = "stat-revenue";
    pub const STAT_PROFIT: &str = "stat-profit";
    pub const STAT_MARGIN: &str = "stat-margin";
    pub const STAT_HEALTH: &str = "stat-health";
    pub const STAT_HEALTH_LABEL: &str = "stat-health-label";
    pub const HEALTH_BAR: &str = "health-bar";
    pub const MODAL: &str = "modal";
    pub const OPEN_MODAL: &str = "openModalBtn";
    pub const CLOSE_MODAL: &str = "closeModalBtn";
    pub const REFRESH: &str = "refreshBtn";
    pub const REFRESH_TIME: &str = "refreshTime";
    pub const TRENDS_CHART: &str = "trendsChart";

    pub const ALL: [&str; 20] = [
        ALERTS, FORM, DATE, REVENUE, EXPENSES, INVENTORY, CATEGORY, SUBMIT,
        STAT_REVENUE, STAT_PROFIT, STAT_MARGIN, STAT_HEALTH, STAT_HEALTH_LABEL,
        HEALTH_BAR, MODAL, OPEN_MODAL, CLOSE_MODAL, REFRESH, REFRESH_TIME, TRENDS_CHART,
    ];
}

/// Generate a standalone dashboard page loading the wasm bundle.
///
/// `bundle` is the path of the wasm-bindgen JS glue (e.g. `./pkg/bizhealth_dashboard.js`);
/// `api_base` ends up in `data-api-base` on `<body>`.
pub fn dashboard_html(bundle: &str, api_base: &str) -> String {
    let api_base = escape_attr(api_base);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>BizHealth Dashboard</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://unpkg.com/lucide@latest"></script>
    <style>
{css}
    </style>
</head>
<body class="bg-slate-950 text-slate-100" data-api-base="{api_base}">
{html}
    <script type="module">
        import init from '{bundle}';
        init();
    </script>
</body>
</html>"#,
        css = css::STYLES,
        html = html::TEMPLATE,
    )
}

/// Escape a value for a double-quoted HTML attribute
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
