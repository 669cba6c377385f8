//! BizHealth Dashboard - browser client for business health metrics
//!
//! Fetches metrics from the BizHealth API, renders stats cards, a colored
//! health bar and severity-styled alerts, and submits new financial records.
//!
//! # Architecture
//! - `controller`: sequential refresh cycle and form submission
//! - `alerts` / `health`: pure mapping from payload to visual state
//! - `client`: HTTP client with an injected API origin
//! - `view`: traits for the page, chart and icon collaborators
//! - `dom` (wasm32 only): `web-sys` implementation and event wiring
//!
//! # Features
//! - Marker-based alert severity (CRITICAL over WARNING over info)
//! - Health tiers at 40 / 70 with Stable / Monitor / At Risk labels
//! - Single in-flight request sequence, no overlapping refreshes
//! - Optional periodic auto-refresh

// Clippy configuration for dashboard code patterns
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::if_not_else)] // Readability preference
#![allow(clippy::map_unwrap_or)] // Explicit error handling preference
#![allow(clippy::float_cmp)] // Threshold and formatting tests compare exact values

mod alerts;
mod client;
mod config;
mod controller;
mod dashboard;
mod error;
mod form;
mod health;
mod logging;
mod types;
mod view;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(test)]
mod test_support;

pub use alerts::{AlertElement, AlertRenderer, SEVERITY_RULES, Severity, StyleBundle};
pub use client::ApiClient;
pub use config::Config;
pub use controller::{Dashboard, RefreshFailure, RefreshOutcome, RefreshStep, SubmitOutcome};
pub use dashboard::{STYLES, TEMPLATE, dashboard_html, ids};
pub use error::{DashboardError, Result};
pub use form::parse_float;
pub use health::{HealthTier, format_number, format_usd, update_stats};
pub use logging::{ConsoleLogger, init as init_logging};
pub use types::*;
pub use view::{ChartSink, DashboardView, FormFields, IconRenderer, StatField};

/// Browser entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = dom::boot() {
        log::error!("Dashboard failed to start: {e}");
    }
}
