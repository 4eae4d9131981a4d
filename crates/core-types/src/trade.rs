// In crates/core-types/src/trade.rs

use crate::risk::Risk;
use crate::types::{Ticker, TradeId};
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One journaled position: what was bought, where, and where it gets stopped out.
///
/// A `Trade` is a value. Its risk is derived from `tvh` and `sl` on every read
/// and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    id: TradeId,
    ticker: Ticker,
    /// Entry price ("trade value here").
    tvh: Decimal,
    /// Stop-loss price.
    sl: Decimal,
}

impl Trade {
    /// Creates a new trade with a freshly generated id. The ticker is upper-cased.
    ///
    /// There is no error path: parsing and validation of user input happen in the
    /// journal's entry flow before a `Trade` is ever built.
    pub fn new(ticker: impl Into<Ticker>, tvh: Decimal, sl: Decimal) -> Self {
        Self {
            id: TradeId::new(),
            ticker: ticker.into(),
            tvh,
            sl,
        }
    }

    pub fn id(&self) -> TradeId {
        self.id
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Replaces the ticker. The new value is upper-cased like at construction.
    pub fn set_ticker(&mut self, ticker: impl Into<Ticker>) {
        self.ticker = ticker.into();
    }

    pub fn tvh(&self) -> Decimal {
        self.tvh
    }

    pub fn sl(&self) -> Decimal {
        self.sl
    }

    /// The percentage distance between stop-loss and entry. See [`Risk::from_prices`].
    pub fn risk(&self) -> Risk {
        Risk::from_prices(self.tvh, self.sl)
    }
}

// Serialized with the derived risk so consumers never recompute it.
impl Serialize for Trade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Trade", 5)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("ticker", &self.ticker)?;
        state.serialize_field("tvh", &self.tvh)?;
        state.serialize_field("sl", &self.sl)?;
        state.serialize_field("risk", &self.risk())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_construct_uppercases_ticker() {
        let trade = Trade::new("aapl", dec!(100), dec!(95));
        assert_eq!(trade.ticker().as_str(), "AAPL");
        assert_eq!(trade.tvh(), dec!(100));
        assert_eq!(trade.sl(), dec!(95));
    }

    #[test]
    fn test_set_ticker_uppercases() {
        let mut trade = Trade::new("AAPL", dec!(100), dec!(95));
        trade.set_ticker("nvda");
        assert_eq!(trade.ticker().as_str(), "NVDA");
    }

    #[test]
    fn test_set_ticker_keeps_identity() {
        let mut trade = Trade::new("AAPL", dec!(100), dec!(95));
        let id = trade.id();
        trade.set_ticker("msft");
        assert_eq!(trade.id(), id);
    }

    #[test]
    fn test_risk_is_derived_from_prices() {
        assert_eq!(Trade::new("X", dec!(100), dec!(95)).risk(), Risk::Percent(dec!(5)));
        assert_eq!(Trade::new("X", dec!(0), dec!(95)).risk(), Risk::Unbounded);
    }

    #[test]
    fn test_identical_fields_are_distinct_trades() {
        let a = Trade::new("AAPL", dec!(100), dec!(95));
        let b = Trade::new("AAPL", dec!(100), dec!(95));
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_serializes_with_risk() {
        let trade = Trade::new("aapl", dec!(100), dec!(85));
        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["tvh"], "100");
        let risk: Decimal = json["risk"]["percent"].as_str().unwrap().parse().unwrap();
        assert_eq!(risk, dec!(15));
    }
}
