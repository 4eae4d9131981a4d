// In crates/journal/src/error.rs

use crate::types::PriceField;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{field} is required")]
    MissingField { field: PriceField },

    #[error("{field} is not a valid number: {input:?}")]
    InvalidNumber { field: PriceField, input: String },

    #[error("{field} must be greater than zero, got {value}")]
    NonPositivePrice { field: PriceField, value: Decimal },

    #[error("Ticker must not be blank")]
    BlankTicker,

    #[error("Position {index} is out of range for a journal of {len} trades")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
