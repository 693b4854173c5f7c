//! Error types for order construction
//!
//! Every variant is an invalid-argument condition raised before an order
//! exists. Looking up an unknown order is not an error and is reported with
//! `Option::None` instead.

use thiserror::Error;

#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum OrderError {
    #[error("order price is missing")]
    MissingPrice,

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("quantity must not be negative, got {0}")]
    NegativeQuantity(i64),

    #[error("order side is missing")]
    MissingSide,
}
