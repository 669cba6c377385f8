//! Alert classification and rendering
//!
//! The API embeds severity inside the alert text itself ("CRITICAL: ...",
//! "WARNING: ..."). Classification walks an ordered rule table and stops at
//! the first marker found, so an alert mentioning both words is critical.

use crate::view::{DashboardView, IconRenderer};

/// Alert severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Anything without a known marker (STABLE, ADVISORY, ...)
    Info,
    Warning,
    Critical,
}

/// Marker substrings in priority order
pub const SEVERITY_RULES: [(&str, Severity); 2] = [
    ("CRITICAL", Severity::Critical),
    ("WARNING", Severity::Warning),
];

/// Layout classes shared by every alert row
pub const ALERT_LAYOUT: &str = "p-4 rounded-xl text-sm flex items-start space-x-3";

/// Sizing classes shared by every alert icon
pub const ICON_LAYOUT: &str = "w-5 h-5 flex-shrink-0";

/// Visual treatment of one severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBundle {
    /// Background and border classes of the alert row
    pub container_class: &'static str,
    /// Accent color class of the icon
    pub icon_class: &'static str,
    /// lucide glyph name
    pub glyph: &'static str,
}

impl StyleBundle {
    pub fn row_class(&self) -> String {
        format!("{} {ALERT_LAYOUT}", self.container_class)
    }

    pub fn icon_classes(&self) -> String {
        format!("{} {ICON_LAYOUT}", self.icon_class)
    }
}

impl Severity {
    /// Classify an alert by the first matching marker
    pub fn classify(message: &str) -> Self {
        SEVERITY_RULES
            .iter()
            .find(|(marker, _)| message.contains(marker))
            .map(|(_, severity)| *severity)
            .unwrap_or(Severity::Info)
    }

    pub fn style(&self) -> StyleBundle {
        match self {
            Severity::Info => StyleBundle {
                container_class: "bg-slate-800/50",
                icon_class: "text-sky-400",
                glyph: "info",
            },
            Severity::Warning => StyleBundle {
                container_class: "bg-amber-500/10 border border-amber-500/20",
                icon_class: "text-amber-500",
                glyph: "alert-triangle",
            },
            Severity::Critical => StyleBundle {
                container_class: "bg-rose-500/10 border border-rose-500/20",
                icon_class: "text-rose-500",
                glyph: "alert-octagon",
            },
        }
    }
}

/// One alert row ready to be placed in the container.
///
/// `text` is inserted as text content, never as markup.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertElement {
    pub severity: Severity,
    pub style: StyleBundle,
    pub text: String,
}

impl AlertElement {
    pub fn from_message(message: &str) -> Self {
        let severity = Severity::classify(message);
        Self {
            severity,
            style: severity.style(),
            text: message.to_string(),
        }
    }
}

/// Rebuilds the alert list on every call
pub struct AlertRenderer {
    icons: Option<Box<dyn IconRenderer>>,
}

impl AlertRenderer {
    pub fn new(icons: Option<Box<dyn IconRenderer>>) -> Self {
        Self { icons }
    }

    /// Replace the container contents with `alerts`, preserving order
    pub fn render<V: DashboardView + ?Sized>(&self, view: &V, alerts: &[String]) -> Vec<AlertElement> {
        let elements: Vec<AlertElement> = alerts.iter().map(|m| AlertElement::from_message(m)).collect();

        view.replace_alerts(&elements);

        // Glyphs stay placeholders until the icon library runs over them
        if let Some(icons) = &self.icons {
            icons.create_icons();
        }

        log::debug!("Rendered {} alerts", elements.len());
        elements
    }
}
