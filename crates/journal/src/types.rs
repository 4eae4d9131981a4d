// In crates/journal/src/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two price inputs a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceField {
    /// The entry price.
    Tvh,
    /// The stop-loss price.
    Sl,
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceField::Tvh => f.write_str("TVH"),
            PriceField::Sl => f.write_str("SL"),
        }
    }
}

/// What the entry flow does when the ticker is left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankTickerPolicy {
    /// Substitute `EntrySettings::default_ticker`.
    #[default]
    #[serde(rename = "default")]
    UseDefault,
    /// Refuse to save the trade.
    Reject,
    /// Save the trade with an empty ticker.
    KeepEmpty,
}

/// Settings for turning form input into trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySettings {
    #[serde(default = "default_ticker")]
    pub default_ticker: String,

    #[serde(default)]
    pub blank_ticker: BlankTickerPolicy,
}

impl Default for EntrySettings {
    fn default() -> Self {
        Self {
            default_ticker: default_ticker(),
            blank_ticker: BlankTickerPolicy::default(),
        }
    }
}

pub const DEFAULT_TICKER: &str = "HDFS1000";

/// Helper function for serde defaults
fn default_ticker() -> String { DEFAULT_TICKER.to_string() }
