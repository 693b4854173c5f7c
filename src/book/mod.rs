pub mod btree_book;
pub mod level;
pub mod snapshot;

use std::fmt::Debug;

pub use level::PriceLevel;
pub use snapshot::{LevelSnapshot, Snapshot};

use crate::{
    common::{Price, Volume},
    order::{Order, OrderId, OrderRequest, Side},
};

/// A resting-order book
///
/// Orders never match against each other; a book may hold crossed prices.
pub trait Book<T: Order>: Clone + Debug {
    type Error;

    fn order(&self, id: OrderId) -> Option<&T>;
    /// Create an order from `request` and queue it behind every order already
    /// resting at its price
    fn submit(&mut self, request: OrderRequest) -> Result<T, Self::Error>;
    fn cancel(&mut self, order_id: OrderId) -> Option<T>;
    /// Replace the quantity of a resting order, forfeiting its time priority
    fn modify(
        &mut self,
        order_id: OrderId,
        quantity: i64,
    ) -> Result<Option<T>, Self::Error>;
    fn snapshot(&self) -> Snapshot<T>;
    fn len(&self) -> usize;
    fn depth(&self) -> (Volume, Volume);
    fn top(&self) -> (Option<Price>, Option<Price>);

    fn add(
        &mut self,
        price: Price,
        quantity: i64,
        side: Side,
    ) -> Result<T, Self::Error> {
        self.submit(OrderRequest::new(price, quantity, side))
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
