// In crates/core-types/src/lib.rs

pub mod risk;
pub mod trade;
pub mod types;

// Re-export the most important types for easy access from other crates.
pub use risk::Risk;
pub use trade::Trade;
pub use types::{Ticker, TradeId};
