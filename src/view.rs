//! Seams between the dashboard logic and the page
//!
//! `DashboardView` covers the fixed page layout. Chart and icon libraries
//! are optional collaborators handed in at construction; a dashboard built
//! without them simply skips those calls.

use crate::alerts::AlertElement;
use crate::health::HealthTier;
use crate::types::TrendsPayload;

/// Text fields of the stats cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Revenue,
    Profit,
    Margin,
    Health,
    /// Stable / Monitor / At Risk signal next to the score
    HealthLabel,
}

/// Raw values of the data-entry form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub date: String,
    pub revenue: String,
    pub expenses: String,
    pub inventory: String,
    pub category: String,
}

/// Everything the dashboard reads from or writes to the page.
///
/// Methods take `&self`: the DOM is shared, interior-mutable state and
/// the whole dashboard runs on one event loop.
pub trait DashboardView {
    fn set_stat(&self, field: StatField, text: &str);

    /// Width is a CSS percentage string such as `55%`
    fn set_health_bar(&self, width: &str, tier: HealthTier);

    /// Drop every current alert element and append these, in order
    fn replace_alerts(&self, alerts: &[AlertElement]);

    fn read_form(&self) -> FormFields;

    fn reset_form(&self);

    fn close_modal(&self);

    /// Blocking message dialog
    fn show_dialog(&self, message: &str);

    fn set_submit_enabled(&self, enabled: bool);

    fn set_last_updated(&self, _text: &str) {}
}

/// Chart library receiving the trends series
pub trait ChartSink {
    fn update_trends(&self, trends: &TrendsPayload);
}

/// Icon library turning glyph placeholders into rendered icons
pub trait IconRenderer {
    fn create_icons(&self);
}
