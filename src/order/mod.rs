use std::fmt::{Debug, Display};

use arbitrary::Arbitrary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Price, Quantity};
use crate::error::OrderError;

pub mod plain;
pub use plain::*;

/// Globally unique order identifier
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Arbitrary, Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    #[serde(alias = "buy", alias = "Buy")]
    Buy,
    #[serde(alias = "sell", alias = "Sell")]
    Sell,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// Unvalidated parameters for a new order
///
/// Missing fields are representable here so that input arriving from outside
/// the crate (e.g., JSON) is checked in exactly one place.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub price: Option<Price>,
    pub quantity: i64,
    #[serde(default)]
    pub side: Option<Side>,
}

impl OrderRequest {
    pub fn new(price: Price, quantity: i64, side: Side) -> Self {
        Self {
            price: Some(price),
            quantity,
            side: Some(side),
        }
    }

    /// Check the construction invariants, yielding the validated fields
    pub fn validate(&self) -> Result<(Price, Quantity, Side), OrderError> {
        let price = self.price.ok_or(OrderError::MissingPrice)?;
        let quantity = checked_quantity(self.quantity)?;
        let side = self.side.ok_or(OrderError::MissingSide)?;
        Ok((price, quantity, side))
    }
}

pub fn checked_quantity(quantity: i64) -> Result<Quantity, OrderError> {
    Quantity::try_from(quantity).map_err(|_| OrderError::NegativeQuantity(quantity))
}

/// A resting order
///
/// Implementors are values: the book never mutates an order it holds, it
/// replaces it wholesale (see [`Order::with_quantity`]).
pub trait Order: Clone + Debug + Display + Eq + PartialEq {
    /// Construct an order, failing if `request` violates an invariant
    fn from_request(
        id: OrderId,
        request: &OrderRequest,
        placed: DateTime<Utc>,
    ) -> Result<Self, OrderError>;
    fn id(&self) -> OrderId;
    fn side(&self) -> Side;
    fn price(&self) -> Price;
    fn quantity(&self) -> Quantity;
    /// Time priority of this order within its price level
    fn placed_at(&self) -> DateTime<Utc>;

    /// A replacement order with the same identity, side and price but a new
    /// quantity and placement time
    fn with_quantity(
        &self,
        quantity: i64,
        placed: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        Self::from_request(
            self.id(),
            &OrderRequest::new(self.price(), quantity, self.side()),
            placed,
        )
    }
}
