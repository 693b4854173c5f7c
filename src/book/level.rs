//! FIFO queue of the orders resting at one price
//!
//! Orders are keyed by their placement time. The book issues strictly
//! increasing placement times, so key order is arrival order and any single
//! order can be taken out without disturbing the others.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::common::Volume;
use crate::order::Order;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceLevel<T: Order> {
    orders: BTreeMap<DateTime<Utc>, T>,
    total_quantity: Volume,
}

impl<T> PriceLevel<T>
where
    T: Order,
{
    pub fn new() -> Self {
        Self {
            orders: BTreeMap::new(),
            total_quantity: 0,
        }
    }

    /// Append an order to the back of the queue
    pub fn push_back(&mut self, order: T) {
        debug_assert!(self
            .orders
            .last_key_value()
            .map_or(true, |(last, _)| *last < order.placed_at()));
        self.total_quantity += Volume::from(order.quantity());
        self.orders.insert(order.placed_at(), order);
    }

    /// Remove the order placed at `placed`, keeping the rest in sequence
    pub fn remove(&mut self, placed: DateTime<Utc>) -> Option<T> {
        let order = self.orders.remove(&placed)?;
        self.total_quantity -= Volume::from(order.quantity());
        Some(order)
    }

    pub fn front(&self) -> Option<&T> {
        self.orders.values().next()
    }

    /// Orders in time priority, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.orders.values()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn total_quantity(&self) -> Volume {
        self.total_quantity
    }
}

impl<T> Default for PriceLevel<T>
where
    T: Order,
{
    fn default() -> Self {
        Self::new()
    }
}
