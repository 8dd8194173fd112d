//! Data models for targets, the desired product, and check outcomes.

use serde::{Deserialize, Serialize};

/// One monitored product page plus the selectors needed to read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Human-readable name used in notifications and logs.
    pub name: String,

    /// Full URL of the product page.
    pub url: String,

    /// CSS selectors for price, color options, and size options.
    pub selector: SelectorSet,
}

/// CSS selectors locating the interesting parts of a product page.
///
/// The strings are opaque here; only the extractor interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorSet {
    /// Selects the price element. Must match at least one element.
    pub price: String,

    /// Selects every currently offered color label.
    pub color: String,

    /// Selects every currently offered size label.
    pub size: String,
}

/// The operator's desired variant, shared across all targets in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub preferred_color: String,
    pub size: String,
}

/// Facts extracted from one target during one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Trimmed price text, kept as-is (never parsed numerically).
    pub price: String,

    /// Offered color labels in document order.
    pub colors: Vec<String>,

    /// Offered size labels in document order.
    pub sizes: Vec<String>,

    /// Whether the desired variant is among the offered options.
    pub in_stock: bool,
}

/// Terminal state of one target within a pass.
#[derive(Debug, Clone)]
pub enum TargetOutcome {
    /// Check succeeded and the desired variant is available.
    InStock(CheckResult),

    /// Check succeeded but the desired variant is not offered.
    OutOfStock(CheckResult),

    /// Fetch or extraction failed; carries the error description.
    Failed(String),
}

/// Ordered per-target outcomes of one full pass.
#[derive(Debug, Default)]
pub struct RunReport {
    /// `(target name, outcome)` in configuration order.
    pub outcomes: Vec<(String, TargetOutcome)>,
}

impl RunReport {
    /// Number of targets where the desired variant was available.
    pub fn in_stock(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| matches!(o, TargetOutcome::InStock(_))).count()
    }

    /// Number of targets whose check failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| matches!(o, TargetOutcome::Failed(_))).count()
    }

    /// One-line human summary of the pass.
    pub fn summary(&self) -> String {
        format!(
            "{} targets checked, {} in stock, {} failed",
            self.outcomes.len(),
            self.in_stock(),
            self.failed()
        )
    }
}
