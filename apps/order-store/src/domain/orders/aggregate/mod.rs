//! Order aggregate.

pub mod order;

pub use order::{CreateOrderCommand, Order};
