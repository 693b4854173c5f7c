//! In-memory resting-order book with price-time priority
//!
//! Orders are indexed twice: by identifier, and by side, price and arrival.
//! Books never match crossing orders against each other.

pub mod book;
pub mod common;
pub mod config;
pub mod error;
pub mod event;
pub mod order;

pub use book::{btree_book::BTreeBook, Book, Snapshot};
pub use common::{Price, Quantity, Volume};
pub use error::OrderError;
pub use order::{Order, OrderId, OrderRequest, PlainOrder, Side};
