//! Point-in-time view of a book and its text ladder rendering
//!
//! Rendered layout, one section per side (BUY first):
//!
//! ```text
//! [BUY]
//! 99.90| 25@99.90 [..]
//! 100.10| 10@100.10 [..]
//!
//! [SELL]
//! 100.20| 45@100.20 [..] << 15@100.20 [..]
//!
//! ////////////////////////////////////////////////////////
//!
//! ```

use std::fmt::Display;

use serde::Serialize;

use crate::common::{Price, Quantity};
use crate::order::{Order, Side};

/// Separates the orders resting on one level line
pub const ORDER_DELIMITER: &str = " << ";

/// Marks the end of one rendered snapshot
pub const SNAPSHOT_TERMINATOR: &str =
    "////////////////////////////////////////////////////////";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LevelSnapshot<T: Order> {
    pub price: Price,
    /// Oldest first
    pub orders: Vec<T>,
}

impl<T> LevelSnapshot<T>
where
    T: Order,
{
    pub fn quantities(&self) -> Vec<Quantity> {
        self.orders.iter().map(|x| x.quantity()).collect()
    }
}

/// Both sides of a book, each with its levels in ascending price order
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Snapshot<T: Order> {
    pub buy: Vec<LevelSnapshot<T>>,
    pub sell: Vec<LevelSnapshot<T>>,
}

impl<T> Snapshot<T>
where
    T: Order,
{
    pub fn side(&self, side: Side) -> &[LevelSnapshot<T>] {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }

    pub fn level(&self, side: Side, price: Price) -> Option<&LevelSnapshot<T>> {
        self.side(side).iter().find(|x| x.price == price)
    }

    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty()
    }

    fn fmt_side(
        f: &mut std::fmt::Formatter<'_>,
        side: Side,
        levels: &[LevelSnapshot<T>],
    ) -> std::fmt::Result {
        writeln!(f, "[{side}]")?;
        for level in levels {
            let orders: Vec<String> =
                level.orders.iter().map(|x| x.to_string()).collect();
            writeln!(f, "{}| {}", level.price, orders.join(ORDER_DELIMITER))?;
        }
        writeln!(f)
    }
}

impl<T> Display for Snapshot<T>
where
    T: Order,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::fmt_side(f, Side::Buy, &self.buy)?;
        Self::fmt_side(f, Side::Sell, &self.sell)?;
        writeln!(f, "{SNAPSHOT_TERMINATOR}")?;
        writeln!(f)
    }
}
