//! Stats cards and health bar
//!
//! Turns a summary snapshot into display text and a color tier:
//! - Revenue and profit as en-US dollar amounts
//! - Margin and health score as plain numbers
//! - Health bar width and tier from the 40/70 thresholds

use crate::types::SummaryPayload;
use crate::view::{DashboardView, StatField};

/// Classes every health bar carries regardless of tier
pub const BAR_LAYOUT: &str = "h-full transition-all duration-1000";

/// Health bar color tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTier {
    /// score < 40
    Danger,
    /// 40 <= score < 70
    Caution,
    /// score >= 70
    Healthy,
}

impl HealthTier {
    /// Determine tier from a 0-100 health score.
    ///
    /// 40 and 70 belong to the higher tier. NaN compares false against
    /// both thresholds and lands in `Healthy`.
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            HealthTier::Danger
        } else if score < 70.0 {
            HealthTier::Caution
        } else {
            HealthTier::Healthy
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            HealthTier::Danger => "bg-rose-500",
            HealthTier::Caution => "bg-amber-500",
            HealthTier::Healthy => "bg-emerald-500",
        }
    }

    /// Full class attribute for the bar element
    pub fn bar_class(&self) -> String {
        format!("{} {BAR_LAYOUT}", self.color_class())
    }

    /// Short signal shown next to the score
    pub fn label(&self) -> &'static str {
        match self {
            HealthTier::Danger => "At Risk",
            HealthTier::Caution => "Monitor",
            HealthTier::Healthy => "Stable",
        }
    }
}

/// Format as US dollars: `$1,234.50`, `-$12.00`.
///
/// Cents round half away from zero on the exact binary value, so
/// `0.125` is `$0.13` and `2.675` (stored just below the tie) is `$2.67`.
pub fn format_usd(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }

    // Negative zero keeps its sign, as en-US currency formatting does
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let abs = value.abs();
    if abs.is_infinite() {
        return format!("{sign}$∞");
    }

    let (whole, cents) = round_cents(abs);
    format!("{sign}${}.{cents}", group_thousands(&whole))
}

/// Integer digits and two cent digits of a finite non-negative value.
///
/// Every finite f64 has at most 1074 fractional decimal digits, so this
/// precision prints the exact expansion and the third decimal decides.
fn round_cents(abs: f64) -> (String, String) {
    let exact = format!("{abs:.1074}");
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let fraction = fraction.as_bytes();

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.iter().copied().take(2)).collect();
    if fraction.get(2).is_some_and(|d| *d >= b'5') {
        increment_digits(&mut digits);
    }

    let split = digits.len() - 2;
    let cents = String::from_utf8_lossy(&digits[split..]).into_owned();
    let whole = String::from_utf8_lossy(&digits[..split]).into_owned();
    (whole, cents)
}

fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Plain number text the way a browser prints it: `20`, `12.5`, `NaN`,
/// `1e+21`, `1e-7`
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        // `{:e}` is shortest round-trip digits, only the exponent sign differs
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    value.to_string()
}

/// Write the stats cards and health bar for one summary
pub fn update_stats<V: DashboardView + ?Sized>(view: &V, summary: &SummaryPayload) -> HealthTier {
    let metrics = &summary.metrics;
    let score = summary.health_score;

    view.set_stat(StatField::Revenue, &format_usd(metrics.total_revenue));
    view.set_stat(StatField::Profit, &format_usd(metrics.net_profit));
    view.set_stat(StatField::Margin, &format!("{}%", format_number(metrics.profit_margin)));
    view.set_stat(StatField::Health, &format_number(score));

    if !(0.0..=100.0).contains(&score) {
        log::warn!("Health score {score} outside 0-100, rendering as-is");
    }

    let tier = HealthTier::from_score(score);
    view.set_stat(StatField::HealthLabel, tier.label());
    view.set_health_bar(&format!("{}%", format_number(score)), tier);

    tier
}
