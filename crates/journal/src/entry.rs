// In crates/journal/src/entry.rs

use crate::types::{BlankTickerPolicy, EntrySettings, PriceField};
use crate::{Error, Result};
use core_types::Trade;
use rust_decimal::Decimal;
use std::str::FromStr;

/// The raw text of the "add trade" form, exactly as the user typed it.
///
/// Nothing is validated until [`TradeEntry::into_trade`] is called, and that call
/// either yields a complete `Trade` or an error; a half-built trade never exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeEntry {
    pub ticker: String,
    pub tvh: String,
    pub sl: String,
}

impl TradeEntry {
    pub fn new(ticker: impl Into<String>, tvh: impl Into<String>, sl: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            tvh: tvh.into(),
            sl: sl.into(),
        }
    }

    /// Validates the form and builds the trade.
    ///
    /// # Errors
    ///
    /// * `MissingField` / `InvalidNumber` if a price is blank or not a decimal.
    /// * `NonPositivePrice` if a price is zero or negative.
    /// * `BlankTicker` if the ticker is blank and the policy is `Reject`.
    pub fn into_trade(&self, settings: &EntrySettings) -> Result<Trade> {
        let tvh = parse_price(PriceField::Tvh, &self.tvh)?;
        let sl = parse_price(PriceField::Sl, &self.sl)?;

        let ticker = self.ticker.trim();
        let ticker = if ticker.is_empty() {
            match settings.blank_ticker {
                BlankTickerPolicy::UseDefault => settings.default_ticker.trim(),
                BlankTickerPolicy::KeepEmpty => "",
                BlankTickerPolicy::Reject => {
                    tracing::warn!("Rejected trade entry with a blank ticker");
                    return Err(Error::BlankTicker);
                }
            }
        } else {
            ticker
        };

        let trade = Trade::new(ticker, tvh, sl);
        tracing::debug!(ticker = %trade.ticker(), %tvh, %sl, "Trade entry validated");
        Ok(trade)
    }
}

/// Parses a strictly positive price.
///
/// Either `.` or `,` is accepted as the decimal separator so input from any
/// locale's decimal keypad parses the same way. Thousands separators, exponents
/// and anything else are rejected.
pub fn parse_price(field: PriceField, input: &str) -> Result<Decimal> {
    let value = parse_decimal(field, input)?;
    if value <= Decimal::ZERO {
        tracing::warn!(%field, %value, "Rejected non-positive price");
        return Err(Error::NonPositivePrice { field, value });
    }
    Ok(value)
}

fn parse_decimal(field: PriceField, input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        tracing::warn!(%field, "Rejected trade entry with a missing price");
        return Err(Error::MissingField { field });
    }

    let invalid = || {
        tracing::warn!(%field, input, "Rejected unparseable price");
        Error::InvalidNumber { field, input: input.to_string() }
    };

    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'+' => (false, &trimmed[1..]),
        b'-' => (true, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut separators = digits.match_indices(['.', ',']);
    let (whole, fraction) = match (separators.next(), separators.next()) {
        (None, _) => (digits, ""),
        (Some((at, _)), None) => (&digits[..at], &digits[at + 1..]),
        (Some(_), Some(_)) => return Err(invalid()),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    let canonical = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if whole.is_empty() { "0" } else { whole },
        if fraction.is_empty() { "0" } else { fraction },
    );
    Decimal::from_str(&canonical).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn settings(policy: BlankTickerPolicy) -> EntrySettings {
        EntrySettings {
            blank_ticker: policy,
            ..EntrySettings::default()
        }
    }

    #[test]
    fn test_parse_accepts_both_separators() {
        assert_eq!(parse_price(PriceField::Tvh, "101.25").unwrap(), dec!(101.25));
        assert_eq!(parse_price(PriceField::Tvh, "101,25").unwrap(), dec!(101.25));
        assert_eq!(parse_price(PriceField::Tvh, " 42 ").unwrap(), dec!(42));
        assert_eq!(parse_price(PriceField::Tvh, "+7").unwrap(), dec!(7));
    }

    #[test]
    fn test_parse_accepts_bare_separator_edges() {
        assert_eq!(parse_price(PriceField::Sl, ".5").unwrap(), dec!(0.5));
        assert_eq!(parse_price(PriceField::Sl, "5.").unwrap(), dec!(5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["abc", "1.000,5", "1,000,000", "1e5", "12$", ".", "--3", "1 000", "0x10"] {
            assert_eq!(
                parse_price(PriceField::Tvh, input),
                Err(Error::InvalidNumber { field: PriceField::Tvh, input: input.to_string() }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_missing_input() {
        assert_eq!(parse_price(PriceField::Sl, "   "), Err(Error::MissingField { field: PriceField::Sl }));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(
            parse_price(PriceField::Tvh, "0"),
            Err(Error::NonPositivePrice { field: PriceField::Tvh, value: dec!(0) })
        );
        assert!(matches!(
            parse_price(PriceField::Sl, "-3,5"),
            Err(Error::NonPositivePrice { field: PriceField::Sl, .. })
        ));
    }

    #[test]
    fn test_entry_builds_trade() {
        let trade = TradeEntry::new("aapl", "100", "95").into_trade(&EntrySettings::default()).unwrap();
        assert_eq!(trade.ticker().as_str(), "AAPL");
        assert_eq!(trade.tvh(), dec!(100));
        assert_eq!(trade.sl(), dec!(95));
        assert_eq!(trade.risk(), core_types::Risk::Percent(dec!(5)));
    }

    #[test]
    fn test_blank_ticker_uses_default() {
        let trade = TradeEntry::new("  ", "100", "95")
            .into_trade(&settings(BlankTickerPolicy::UseDefault))
            .unwrap();
        assert_eq!(trade.ticker().as_str(), "HDFS1000");
    }

    #[test]
    fn test_blank_ticker_default_is_normalized() {
        let settings = EntrySettings {
            default_ticker: "spy".to_string(),
            blank_ticker: BlankTickerPolicy::UseDefault,
        };
        let trade = TradeEntry::new("", "100", "95").into_trade(&settings).unwrap();
        assert_eq!(trade.ticker().as_str(), "SPY");
    }

    #[test]
    fn test_blank_ticker_rejected() {
        let result = TradeEntry::new("", "100", "95").into_trade(&settings(BlankTickerPolicy::Reject));
        assert_eq!(result, Err(Error::BlankTicker));
    }

    #[test]
    fn test_blank_ticker_kept_empty() {
        let trade = TradeEntry::new("", "100", "95")
            .into_trade(&settings(BlankTickerPolicy::KeepEmpty))
            .unwrap();
        assert!(trade.ticker().is_empty());
    }

    #[test]
    fn test_ticker_is_trimmed() {
        let trade = TradeEntry::new("  msft ", "1", "1").into_trade(&EntrySettings::default()).unwrap();
        assert_eq!(trade.ticker().as_str(), "MSFT");
    }

    #[test]
    fn test_price_errors_take_precedence_over_ticker() {
        let result = TradeEntry::new("", "abc", "95").into_trade(&settings(BlankTickerPolicy::Reject));
        assert!(matches!(result, Err(Error::InvalidNumber { field: PriceField::Tvh, .. })));
    }
}
