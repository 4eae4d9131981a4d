// In crates/risk/src/lib.rs

use core_types::Risk;

pub mod error;
pub mod threshold;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use threshold::ThresholdClassifier;
pub use types::{RiskLevel, RiskThresholds};

/// The universal interface for turning a risk percentage into a severity level.
///
/// The journal only ever needs one classifier at a time, but the trait keeps the
/// summary and rendering code independent of how the bands are chosen.
pub trait RiskClassifier {
    /// The name of the classification scheme.
    fn name(&self) -> &'static str;

    /// Maps a risk onto a severity level.
    ///
    /// Must be total: every finite percentage and `Risk::Unbounded` gets a level.
    fn classify(&self, risk: Risk) -> RiskLevel;
}

/// Classifies a risk with the standard 5% / 15% bands.
pub fn classify(risk: Risk) -> RiskLevel {
    ThresholdClassifier::default().classify(risk)
}
