// In crates/risk/src/types.rs

use crate::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity band of a trade's risk, rendered green / yellow / red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The lower bounds (inclusive, in percent) of the medium and high bands.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RiskThresholds {
    /// Risks at or above this percentage are at least `Medium`.
    #[serde(default = "default_medium")]
    pub medium: Decimal,

    /// Risks at or above this percentage are `High`.
    #[serde(default = "default_high")]
    pub high: Decimal,
}

impl RiskThresholds {
    /// Checks that `0 <= medium <= high`.
    pub fn validate(&self) -> Result<()> {
        if self.medium < Decimal::ZERO {
            return Err(Error::InvalidParameters(format!(
                "medium threshold ({}) must not be negative",
                self.medium
            )));
        }
        if self.medium > self.high {
            return Err(Error::InvalidParameters(format!(
                "medium threshold ({}) is above high threshold ({})",
                self.medium, self.high
            )));
        }
        Ok(())
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium: default_medium(),
            high: default_high(),
        }
    }
}

/// Helper functions for serde defaults
fn default_medium() -> Decimal { dec!(5) }
fn default_high() -> Decimal { dec!(15) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_are_valid() {
        let thresholds = RiskThresholds::default();
        assert_eq!(thresholds.medium, dec!(5));
        assert_eq!(thresholds.high, dec!(15));
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_inverted_thresholds_are_rejected() {
        let thresholds = RiskThresholds { medium: dec!(20), high: dec!(10) };
        assert!(matches!(thresholds.validate(), Err(Error::InvalidParameters(_))));
    }

    #[test]
    fn test_negative_medium_is_rejected() {
        let thresholds = RiskThresholds { medium: dec!(-1), high: dec!(10) };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_equal_thresholds_are_allowed() {
        // Collapses the medium band; everything is either low or high.
        let thresholds = RiskThresholds { medium: dec!(10), high: dec!(10) };
        assert!(thresholds.validate().is_ok());
    }
}
