//! Common types for the dashboard
//!
//! Request-scoped payloads exchanged with the BizHealth API. None of them
//! outlive a single refresh cycle or submission.

use serde::{Deserialize, Serialize};

/// Aggregate business metrics from `/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_revenue: f64,
    pub net_profit: f64,
    pub profit_margin: f64,
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub total_inventory: f64,
}

/// Snapshot returned by `GET /summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub metrics: Metrics,
    /// Expected in 0-100, not clamped on this side
    pub health_score: f64,
    /// Alert texts with severity embedded as a marker word
    #[serde(default)]
    pub alerts: Vec<String>,
}

/// Time series from `GET /trends`, forwarded to the chart untouched
pub type TrendsPayload = serde_json::Value;

/// Body of `POST /add-data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormEntryPayload {
    pub date: String,
    pub revenue: f64,
    pub expenses: f64,
    pub inventory_cost: f64,
    pub category: String,
}

/// Error body the API sends with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
