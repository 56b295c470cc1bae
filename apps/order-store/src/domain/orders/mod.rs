//! Orders Bounded Context
//!
//! Order identity, numbering, activation, and filter queries.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: identity (id, uuid, order number) plus clinical
//!   references; effective status computed from temporal fields
//! - **Order Number Allocation**: serializable max-id derivation with a
//!   unique index backstop and caller-side retry
//! - **Authoritative Reads**: activation and order number read through any
//!   cache layer

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use aggregate::{CreateOrderCommand, Order};
pub use errors::OrderError;
pub use repository::{OrderNumberAllocator, OrderRepository};
pub use value_objects::{OrderFilter, OrderKind, OrderStatus};
