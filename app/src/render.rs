// In app/src/render.rs

use core_types::{Risk, Trade};
use crossterm::style::Stylize;
use journal::JournalSummary;
use risk::{RiskClassifier, RiskLevel};

/// Formats trades and summaries for the terminal.
///
/// With `color` off the output is plain text, which is what tests and pipes get.
pub struct Renderer<'a> {
    classifier: &'a dyn RiskClassifier,
    color: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(classifier: &'a dyn RiskClassifier, color: bool) -> Self {
        Self { classifier, color }
    }

    pub fn header(&self) -> String {
        format!("{:>3}  {:<10} {:>12} {:>12} {:>9}", "#", "TICKER", "TVH", "SL", "RISK")
    }

    /// One table row. `position` is the 1-based position shown to the user.
    pub fn row(&self, position: usize, trade: &Trade) -> String {
        let ticker = if trade.ticker().is_empty() { "-" } else { trade.ticker().as_str() };
        format!(
            "{:>3}  {:<10} {:>12.2} {:>12.2} {}",
            position,
            ticker,
            trade.tvh(),
            trade.sl(),
            self.risk_cell(trade.risk(), 9),
        )
    }

    pub fn table(&self, trades: &[Trade], total: Risk) -> Vec<String> {
        if trades.is_empty() {
            return vec!["No trades yet.".to_string()];
        }

        let mut lines = Vec::with_capacity(trades.len() + 2);
        lines.push(self.header());
        lines.extend(trades.iter().enumerate().map(|(i, trade)| self.row(i + 1, trade)));
        lines.push(format!("Total risk: {}", risk_label(total)));
        lines
    }

    pub fn summary(&self, summary: &JournalSummary) -> String {
        let max = summary.max_risk.map_or_else(|| "-".to_string(), risk_label);
        format!(
            "Trades: {} (low {}, medium {}, high {}) | Total risk: {} | Max risk: {}",
            summary.total_trades,
            summary.low,
            summary.medium,
            summary.high,
            risk_label(summary.total_risk),
            max,
        )
    }

    fn risk_cell(&self, risk: Risk, width: usize) -> String {
        let cell = format!("{:>width$}", risk_label(risk));
        if !self.color {
            return cell;
        }
        match self.classifier.classify(risk) {
            RiskLevel::Low => cell.green().to_string(),
            RiskLevel::Medium => cell.yellow().to_string(),
            RiskLevel::High => cell.red().to_string(),
        }
    }
}

/// `5.00%` for a finite risk, `∞` for an unbounded one.
pub fn risk_label(risk: Risk) -> String {
    match risk {
        Risk::Percent(_) => format!("{risk}%"),
        Risk::Unbounded => risk.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk::ThresholdClassifier;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_row() {
        let classifier = ThresholdClassifier::default();
        let renderer = Renderer::new(&classifier, false);
        let row = renderer.row(1, &Trade::new("aapl", dec!(100), dec!(95)));
        assert_eq!(row, "  1  AAPL             100.00        95.00     5.00%");
    }

    #[test]
    fn test_colored_risk_uses_level() {
        let classifier = ThresholdClassifier::default();
        let renderer = Renderer::new(&classifier, true);
        let low = renderer.row(1, &Trade::new("a", dec!(100), dec!(99)));
        let high = renderer.row(2, &Trade::new("b", dec!(100), dec!(50)));
        assert!(low.contains(&"    1.00%".green().to_string()));
        assert!(high.contains(&"   50.00%".red().to_string()));
    }

    #[test]
    fn test_empty_table() {
        let classifier = ThresholdClassifier::default();
        let renderer = Renderer::new(&classifier, false);
        assert_eq!(renderer.table(&[], Risk::ZERO), ["No trades yet."]);
    }

    #[test]
    fn test_risk_label() {
        assert_eq!(risk_label(Risk::Percent(dec!(15))), "15.00%");
        assert_eq!(risk_label(Risk::Unbounded), "∞");
    }
}
