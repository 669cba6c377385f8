//! Shared fixtures for unit tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::alerts::AlertElement;
use crate::health::HealthTier;
use crate::types::{Metrics, SummaryPayload, TrendsPayload};
use crate::view::{ChartSink, DashboardView, FormFields, StatField};

/// In-memory page recording every write
#[derive(Default)]
pub struct RecordingView {
    stats: RefCell<HashMap<StatField, String>>,
    bar: RefCell<Option<(String, HealthTier)>>,
    alerts: RefCell<Vec<AlertElement>>,
    form: RefCell<FormFields>,
    pub modal_open: Cell<bool>,
    pub dialogs: RefCell<Vec<String>>,
    pub submit_toggles: RefCell<Vec<bool>>,
    pub last_updated: RefCell<Option<String>>,
}

impl RecordingView {
    pub fn with_form(fields: FormFields) -> Self {
        let view = Self::default();
        *view.form.borrow_mut() = fields;
        view.modal_open.set(true);
        view
    }

    pub fn stat(&self, field: StatField) -> Option<String> {
        self.stats.borrow().get(&field).cloned()
    }

    pub fn health_bar(&self) -> Option<(String, HealthTier)> {
        self.bar.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<AlertElement> {
        self.alerts.borrow().clone()
    }

    pub fn form(&self) -> FormFields {
        self.form.borrow().clone()
    }
}

impl DashboardView for RecordingView {
    fn set_stat(&self, field: StatField, text: &str) {
        self.stats.borrow_mut().insert(field, text.to_string());
    }

    fn set_health_bar(&self, width: &str, tier: HealthTier) {
        *self.bar.borrow_mut() = Some((width.to_string(), tier));
    }

    fn replace_alerts(&self, alerts: &[AlertElement]) {
        *self.alerts.borrow_mut() = alerts.to_vec();
    }

    fn read_form(&self) -> FormFields {
        self.form.borrow().clone()
    }

    fn reset_form(&self) {
        *self.form.borrow_mut() = FormFields::default();
    }

    fn close_modal(&self) {
        self.modal_open.set(false);
    }

    fn show_dialog(&self, message: &str) {
        self.dialogs.borrow_mut().push(message.to_string());
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_toggles.borrow_mut().push(enabled);
    }

    fn set_last_updated(&self, text: &str) {
        *self.last_updated.borrow_mut() = Some(text.to_string());
    }
}

/// Chart collaborator keeping every payload it was handed
#[derive(Clone, Default)]
pub struct RecordingChart(pub Rc<RefCell<Vec<TrendsPayload>>>);

impl ChartSink for RecordingChart {
    fn update_trends(&self, trends: &TrendsPayload) {
        self.0.borrow_mut().push(trends.clone());
    }
}

pub fn summary(revenue: f64, profit: f64, margin: f64, health: f64, alerts: &[&str]) -> SummaryPayload {
    SummaryPayload {
        metrics: Metrics {
            total_revenue: revenue,
            net_profit: profit,
            profit_margin: margin,
            total_expenses: revenue - profit,
            total_inventory: 0.0,
        },
        health_score: health,
        alerts: alerts.iter().map(|a| (*a).to_string()).collect(),
    }
}

/// `/summary` body as the API produces it
pub fn summary_json(health: f64, alerts: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "metrics": {
            "total_revenue": 1000,
            "total_expenses": 800,
            "total_inventory": 0,
            "net_profit": 200,
            "profit_margin": 20
        },
        "health_score": health,
        "alerts": alerts
    })
}
