// --- Journal change notifications ---

use chrono::{DateTime, Utc};
use core_types::Trade;
use serde::Serialize;

/// A trade was appended to the end of the journal.
#[derive(Debug, Clone, Serialize)]
pub struct TradeAdded {
    pub timestamp: DateTime<Utc>,
    /// The journal version after the append.
    pub version: u64,
    /// Position of the new trade (always the last one).
    pub index: usize,
    pub trade: Trade,
}

/// One or more trades were removed in a single atomic update.
#[derive(Debug, Clone, Serialize)]
pub struct TradesRemoved {
    pub timestamp: DateTime<Utc>,
    /// The journal version after the removal.
    pub version: u64,
    /// Positions the trades occupied before the removal, ascending.
    pub indices: Vec<usize>,
    /// The removed trades, in the same order as `indices`.
    pub trades: Vec<Trade>,
}

/// The top-level journal event enum delivered to subscribers.
/// `tag` and `content` are used by serde for clean JSON representation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum JournalEvent {
    TradeAdded(TradeAdded),
    TradesRemoved(TradesRemoved),
}

impl JournalEvent {
    pub fn added(version: u64, index: usize, trade: Trade) -> Self {
        JournalEvent::TradeAdded(TradeAdded {
            timestamp: Utc::now(),
            version,
            index,
            trade,
        })
    }

    pub fn removed(version: u64, indices: Vec<usize>, trades: Vec<Trade>) -> Self {
        JournalEvent::TradesRemoved(TradesRemoved {
            timestamp: Utc::now(),
            version,
            indices,
            trades,
        })
    }

    /// The journal version this event brought the journal to.
    pub fn version(&self) -> u64 {
        match self {
            JournalEvent::TradeAdded(event) => event.version,
            JournalEvent::TradesRemoved(event) => event.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_json_shape() {
        let event = JournalEvent::added(1, 0, Trade::new("aapl", dec!(100), dec!(95)));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TradeAdded");
        assert_eq!(json["payload"]["version"], 1);
        assert_eq!(json["payload"]["index"], 0);
        assert_eq!(json["payload"]["trade"]["ticker"], "AAPL");
    }

    #[test]
    fn test_removed_event_carries_version() {
        let trade = Trade::new("msft", dec!(10), dec!(9));
        let event = JournalEvent::removed(7, vec![2], vec![trade]);
        assert_eq!(event.version(), 7);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TradesRemoved");
        assert_eq!(json["payload"]["indices"][0], 2);
    }
}
