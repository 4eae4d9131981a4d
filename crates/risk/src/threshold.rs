// In crates/risk/src/threshold.rs

use crate::types::{RiskLevel, RiskThresholds};
use crate::{Result, RiskClassifier};
use core_types::Risk;

/// A classifier with two fixed cut-offs.
///
/// - `risk < medium` is `Low`
/// - `medium <= risk < high` is `Medium`
/// - `risk >= high` is `High`
///
/// An unbounded risk is always `High`.
#[derive(Debug, Clone, Default)]
pub struct ThresholdClassifier {
    /// The configuration for this classifier instance.
    thresholds: RiskThresholds,
}

impl ThresholdClassifier {
    /// Creates a new `ThresholdClassifier`, rejecting inconsistent thresholds.
    pub fn new(thresholds: RiskThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }
}

impl RiskClassifier for ThresholdClassifier {
    fn name(&self) -> &'static str {
        "ThresholdClassifier"
    }

    fn classify(&self, risk: Risk) -> RiskLevel {
        let percent = match risk {
            Risk::Percent(percent) => percent,
            Risk::Unbounded => return RiskLevel::High,
        };

        if percent >= self.thresholds.high {
            RiskLevel::High
        } else if percent >= self.thresholds.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
