//! Dashboard controller - orchestrates refresh cycles and form submission
//!
//! A refresh cycle is strictly sequential:
//! 1. `GET /summary`, then stats cards and health bar
//! 2. alert list
//! 3. `GET /trends`, then the chart
//!
//! A failure stops the cycle at that step. Whatever was rendered before it
//! stays on the page; later steps are skipped. Only one request sequence
//! runs at a time: a refresh requested while another is outstanding is
//! skipped, and a submission while busy is rejected.

use std::cell::Cell;
use std::fmt;

use crate::alerts::AlertRenderer;
use crate::client::ApiClient;
use crate::error::DashboardError;
use crate::health::{self, HealthTier};
use crate::types::FormEntryPayload;
use crate::view::{ChartSink, DashboardView, IconRenderer};

/// Network step of a refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStep {
    FetchSummary,
    FetchTrends,
}

impl fmt::Display for RefreshStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshStep::FetchSummary => write!(f, "summary fetch"),
            RefreshStep::FetchTrends => write!(f, "trends fetch"),
        }
    }
}

/// Where and why a refresh cycle stopped
#[derive(Debug)]
pub struct RefreshFailure {
    pub step: RefreshStep,
    pub error: DashboardError,
}

/// Result of one refresh request
#[derive(Debug)]
pub enum RefreshOutcome {
    Completed { tier: HealthTier, alerts: usize },
    /// Another request sequence was in flight
    Skipped,
    Failed(RefreshFailure),
}

/// Result of one form submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Entry stored; carries the follow-up refresh
    Saved { refresh: RefreshOutcome },
    /// Entry not stored; the user has been shown why
    Rejected(DashboardError),
    /// Another request sequence was in flight
    Busy,
}

/// Holds the in-flight flag until dropped
struct BusyGuard<'a>(&'a Cell<bool>);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Dashboard controller coordinating client, renderers and page
pub struct Dashboard<V: DashboardView> {
    client: ApiClient,
    view: V,
    alerts: AlertRenderer,
    chart: Option<Box<dyn ChartSink>>,
    busy: Cell<bool>,
}

impl<V: DashboardView> Dashboard<V> {
    /// Create a controller without chart or icon collaborators
    pub fn new(client: ApiClient, view: V) -> Self {
        Self {
            client,
            view,
            alerts: AlertRenderer::new(None),
            chart: None,
            busy: Cell::new(false),
        }
    }

    pub fn with_chart(mut self, chart: Box<dyn ChartSink>) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn with_icons(mut self, icons: Box<dyn IconRenderer>) -> Self {
        self.alerts = AlertRenderer::new(Some(icons));
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Run a complete refresh cycle unless one is already running
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            log::debug!("Refresh skipped: request already in flight");
            return RefreshOutcome::Skipped;
        };

        self.run_refresh().await
    }

    /// Submit the data-entry form.
    ///
    /// On success the modal closes, the form clears and exactly one
    /// refresh cycle follows. Any failure is shown as `Error: <message>`
    /// and leaves the form and modal untouched.
    pub async fn submit_entry(&self) -> SubmitOutcome {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            log::warn!("Submission ignored: request already in flight");
            return SubmitOutcome::Busy;
        };

        let entry = FormEntryPayload::from_fields(&self.view.read_form());
        self.view.set_submit_enabled(false);

        let outcome = match self.client.add_data(&entry).await {
            Ok(_) => {
                log::info!("Recorded entry for {} ({})", entry.date, entry.category);
                self.view.close_modal();
                self.view.reset_form();
                SubmitOutcome::Saved {
                    refresh: self.run_refresh().await,
                }
            }
            Err(err) => {
                log::error!("Submission failed: {err}");
                self.view.show_dialog(&format!("Error: {}", err.user_message()));
                SubmitOutcome::Rejected(err)
            }
        };

        self.view.set_submit_enabled(true);
        outcome
    }

    /// Refresh body; callers hold the busy guard
    async fn run_refresh(&self) -> RefreshOutcome {
        match self.refresh_steps().await {
            Ok((tier, alerts)) => {
                let stamp = chrono::Local::now().format("%H:%M:%S");
                self.view.set_last_updated(&format!("Updated: {stamp}"));
                RefreshOutcome::Completed { tier, alerts }
            }
            Err(failure) => {
                log::error!("Failed to refresh dashboard at {}: {}", failure.step, failure.error);
                RefreshOutcome::Failed(failure)
            }
        }
    }

    async fn refresh_steps(&self) -> Result<(HealthTier, usize), RefreshFailure> {
        let summary = self.client.get_summary().await.map_err(|error| RefreshFailure {
            step: RefreshStep::FetchSummary,
            error,
        })?;

        let tier = health::update_stats(&self.view, &summary);
        let rendered = self.alerts.render(&self.view, &summary.alerts);

        let trends = self.client.get_trends().await.map_err(|error| RefreshFailure {
            step: RefreshStep::FetchTrends,
            error,
        })?;

        if let Some(chart) = &self.chart {
            chart.update_trends(&trends);
        }

        Ok((tier, rendered.len()))
    }
}
