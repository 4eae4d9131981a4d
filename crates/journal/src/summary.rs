// In crates/journal/src/summary.rs

use core_types::{Risk, Trade};
use risk::{RiskClassifier, RiskLevel};
use serde::Serialize;

/// Aggregate view of the journal for a summary display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct JournalSummary {
    pub total_trades: usize,
    pub total_risk: Risk,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    /// The riskiest single trade, `None` for an empty journal.
    pub max_risk: Option<Risk>,
}

impl JournalSummary {
    /// Computes the summary from scratch; nothing is cached between calls.
    pub fn from_trades(trades: &[Trade], classifier: &dyn RiskClassifier) -> Self {
        let mut summary = Self {
            total_trades: trades.len(),
            ..Self::default()
        };

        for risk in trades.iter().map(Trade::risk) {
            match classifier.classify(risk) {
                RiskLevel::Low => summary.low += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::High => summary.high += 1,
            }
            summary.total_risk = summary.total_risk + risk;
            summary.max_risk = summary.max_risk.max(Some(risk));
        }

        summary
    }
}
