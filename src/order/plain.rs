use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::common::{Price, Quantity};
use crate::error::OrderError;

use super::{Order, OrderId, OrderRequest, Side};

/// The default order type held by a book
///
/// Fields are private: a `PlainOrder` only comes into existence through
/// [`Order::from_request`], which enforces the construction invariants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlainOrder {
    id: OrderId,
    side: Side,
    price: Price,
    quantity: Quantity,
    placed: DateTime<Utc>,
}

impl Order for PlainOrder {
    fn from_request(
        id: OrderId,
        request: &OrderRequest,
        placed: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        let (price, quantity, side) = request.validate()?;
        Ok(Self {
            id,
            side,
            price,
            quantity,
            placed,
        })
    }

    fn id(&self) -> OrderId {
        self.id
    }

    fn side(&self) -> Side {
        self.side
    }

    fn price(&self) -> Price {
        self.price
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn placed_at(&self) -> DateTime<Utc> {
        self.placed
    }
}

impl Display for PlainOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{} [{}]", self.quantity, self.price, self.id)
    }
}
