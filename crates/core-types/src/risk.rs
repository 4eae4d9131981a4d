// In crates/core-types/src/risk.rs

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Number of decimal places a risk percentage is rounded to.
pub const RISK_DECIMAL_PLACES: u32 = 2;

/// The distance between a stop-loss and its entry price, as a percentage of the entry.
///
/// A risk is normally a finite, non-negative percentage rounded to two decimal
/// places. When the entry price is zero (or the ratio does not fit in a `Decimal`)
/// the distance is undefined and the risk is `Unbounded`. `Unbounded` is ordered
/// above every finite percentage and absorbs any sum it takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Risk {
    Percent(Decimal),
    Unbounded,
}

impl Risk {
    pub const ZERO: Risk = Risk::Percent(Decimal::ZERO);

    /// Computes `round(|sl / tvh - 1| * 100, 2)`.
    ///
    /// Rounding is half away from zero. A zero `tvh` yields `Risk::Unbounded`.
    pub fn from_prices(tvh: Decimal, sl: Decimal) -> Self {
        if tvh.is_zero() {
            return Risk::Unbounded;
        }

        let percent = sl
            .checked_div(tvh)
            .and_then(|ratio| ratio.checked_sub(Decimal::ONE))
            .and_then(|deviation| deviation.abs().checked_mul(Decimal::ONE_HUNDRED));

        match percent {
            Some(percent) => Risk::Percent(
                percent.round_dp_with_strategy(RISK_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero),
            ),
            None => Risk::Unbounded,
        }
    }

    /// The finite percentage, or `None` for an unbounded risk.
    pub fn percent(&self) -> Option<Decimal> {
        match self {
            Risk::Percent(value) => Some(*value),
            Risk::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Risk::Unbounded)
    }
}

impl Default for Risk {
    fn default() -> Self {
        Risk::ZERO
    }
}

impl Add for Risk {
    type Output = Risk;

    fn add(self, rhs: Risk) -> Risk {
        match (self, rhs) {
            (Risk::Percent(a), Risk::Percent(b)) => a.checked_add(b).map_or(Risk::Unbounded, Risk::Percent),
            _ => Risk::Unbounded,
        }
    }
}

impl Sum for Risk {
    fn sum<I: Iterator<Item = Risk>>(iter: I) -> Risk {
        iter.fold(Risk::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Risk> for Risk {
    fn sum<I: Iterator<Item = &'a Risk>>(iter: I) -> Risk {
        iter.copied().sum()
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Risk::Percent(value) => {
                let value = value.round_dp_with_strategy(RISK_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
                f.pad(&format!("{:.2}", value))
            }
            Risk::Unbounded => f.pad("∞"),
        }
    }
}
