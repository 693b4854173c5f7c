use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::order::Order;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum EventKind<T: Order> {
    Add(T),
    Cancel(T),
    /// Cancel-and-replace of a resting order's quantity
    Modify { previous: T, replacement: T },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Event<T: Order> {
    pub timestamp: DateTime<Utc>,
    pub kind: EventKind<T>,
}

impl<T> Event<T>
where
    T: Order,
{
    pub fn new(kind: EventKind<T>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}
