// In crates/journal/src/lib.rs

pub mod entry;
pub mod error;
pub mod store;
pub mod summary;
pub mod types;

// Re-export public types
pub use entry::{TradeEntry, parse_price};
pub use error::{Error, Result};
pub use store::{SubscriptionId, TradeStore};
pub use summary::JournalSummary;
pub use types::{BlankTickerPolicy, EntrySettings, PriceField};
