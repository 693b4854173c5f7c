use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::OrderError;
use crate::event::{Event, EventKind};
use crate::order::{OrderId, OrderRequest, Side};
use crate::{
    book::{Book, LevelSnapshot, PriceLevel, Snapshot},
    common::{Price, Volume},
    order::Order,
};

#[derive(Clone, Debug, Serialize)]
pub struct Levels {
    pub bids: Vec<(Price, Volume)>,
    pub asks: Vec<(Price, Volume)>,
}

/// Limit order book where each side of the book is an ordered mapping (using
/// B-trees) keyed on price, alongside an identity index over every resting
/// order
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BTreeBook<T: Order> {
    /// Every live order, by identifier
    orders: HashMap<OrderId, T>,
    /// Event log for this book (describes all mutations)
    events: Vec<Event<T>>,
    /// Bid-side of the market
    bids: BTreeMap<Price, PriceLevel<T>>,
    /// Ask-side of the market
    asks: BTreeMap<Price, PriceLevel<T>>,
    /// Most recently issued placement time
    last_placed: Option<DateTime<Utc>>,
}

impl<T> Display for BTreeBook<T>
where
    T: Order,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}

impl<T> Default for BTreeBook<T>
where
    T: Order,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BTreeBook<T>
where
    T: Order,
{
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
            events: vec![],
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            last_placed: None,
        }
    }

    pub fn events(&self) -> &[Event<T>] {
        &self.events
    }

    pub fn levels(&self) -> Levels {
        Levels {
            bids: self
                .bids
                .iter()
                .map(|(p, xs)| (*p, xs.total_quantity()))
                .collect(),
            asks: self
                .asks
                .iter()
                .map(|(p, xs)| (*p, xs.total_quantity()))
                .collect(),
        }
    }

    fn side(&self, side: Side) -> &BTreeMap<Price, PriceLevel<T>> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut BTreeMap<Price, PriceLevel<T>> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Issue the next placement time, strictly after every earlier one even
    /// when the wall clock stalls or steps backwards
    fn next_placed(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let placed = match self.last_placed {
            Some(last) if now <= last => last + Duration::nanoseconds(1),
            _ => now,
        };
        self.last_placed = Some(placed);
        placed
    }

    /// Insert (post) an order into both indices
    fn insert_order(&mut self, order: T) {
        let level = self.side_mut(order.side()).entry(order.price());
        if matches!(level, Entry::Vacant(_)) {
            trace!(side = %order.side(), price = %order.price(), "opening level");
        }
        level.or_default().push_back(order.clone());
        self.orders.insert(order.id(), order);
    }

    /// Take an order out of both indices, closing its level if it empties
    fn remove_order(&mut self, order_id: OrderId) -> Option<T> {
        let order = self.orders.remove(&order_id)?;

        if let Entry::Occupied(mut level) =
            self.side_mut(order.side()).entry(order.price())
        {
            level.get_mut().remove(order.placed_at());
            if level.get().is_empty() {
                level.remove();
                trace!(side = %order.side(), price = %order.price(), "closing level");
            }
        }

        Some(order)
    }

    fn snapshot_side(&self, side: Side) -> Vec<LevelSnapshot<T>> {
        self.side(side)
            .iter()
            .map(|(price, level)| LevelSnapshot {
                price: *price,
                orders: level.iter().cloned().collect(),
            })
            .collect()
    }
}

impl<T> Book<T> for BTreeBook<T>
where
    T: Order,
{
    type Error = OrderError;

    fn order(&self, id: OrderId) -> Option<&T> {
        self.orders.get(&id)
    }

    fn submit(&mut self, request: OrderRequest) -> Result<T, Self::Error> {
        let placed = self.next_placed();
        let order = T::from_request(OrderId::new(), &request, placed)?;

        debug!(
            order_id = %order.id(),
            side = %order.side(),
            price = %order.price(),
            quantity = order.quantity(),
            "order added"
        );
        self.insert_order(order.clone());
        self.events.push(Event::new(EventKind::Add(order.clone())));
        Ok(order)
    }

    fn cancel(&mut self, order_id: OrderId) -> Option<T> {
        let Some(order) = self.remove_order(order_id) else {
            debug!(%order_id, "cancel of unknown order");
            return None;
        };

        debug!(%order_id, quantity = order.quantity(), "order cancelled");
        self.events.push(Event::new(EventKind::Cancel(order.clone())));
        Some(order)
    }

    fn modify(
        &mut self,
        order_id: OrderId,
        quantity: i64,
    ) -> Result<Option<T>, Self::Error> {
        let Some(previous) = self.orders.get(&order_id).cloned() else {
            debug!(%order_id, "modify of unknown order");
            return Ok(None);
        };

        // a rejected quantity must leave the original queued where it was
        let placed = self.next_placed();
        let replacement = previous.with_quantity(quantity, placed)?;

        self.remove_order(order_id);
        self.insert_order(replacement.clone());

        debug!(
            %order_id,
            from = previous.quantity(),
            to = replacement.quantity(),
            "order modified"
        );
        self.events.push(Event::new(EventKind::Modify {
            previous,
            replacement: replacement.clone(),
        }));
        Ok(Some(replacement))
    }

    fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            buy: self.snapshot_side(Side::Buy),
            sell: self.snapshot_side(Side::Sell),
        }
    }

    fn len(&self) -> usize {
        self.orders.len()
    }

    fn depth(&self) -> (Volume, Volume) {
        (
            self.bids.values().map(|x| x.total_quantity()).sum(),
            self.asks.values().map(|x| x.total_quantity()).sum(),
        )
    }

    fn top(&self) -> (Option<Price>, Option<Price>) {
        (
            self.bids.last_key_value().map(|x| *x.0),
            self.asks.first_key_value().map(|x| *x.0),
        )
    }
}
