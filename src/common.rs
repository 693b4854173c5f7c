use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Number of decimal places prices are rendered with
pub const DISPLAY_DP: u32 = 2;

pub type Quantity = u64;

/// Sum of many quantities, e.g. a level total or side depth
pub type Volume = u128;

/// Exact decimal price
///
/// Values are normalized on construction, so `100.20` and `100.200` compare,
/// hash and render identically and therefore land on the same price level.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize,
)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self(value.normalize())
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// The price rounded half-up to [`DISPLAY_DP`] places, always carrying
    /// exactly that many digits after the point
    pub fn display_rounded(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_DP);
        rounded.to_string()
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl FromStr for Price {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self::new)
            .map_err(|_| OrderError::InvalidPrice(s.to_string()))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_rounded())
    }
}
