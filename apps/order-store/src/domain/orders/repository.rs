//! Order persistence ports.
//!
//! Defines the persistence abstraction for orders and the order-number
//! allocation contract. Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;
use uuid::Uuid;

use super::aggregate::Order;
use super::errors::OrderError;
use super::value_objects::{OrderFilter, OrderKind};
use crate::domain::shared::{OrderId, OrderNumber};

/// Contract for deriving the next usable order number.
///
/// Callers compute the next number as `maximum_allocated_id() + 1` and rely
/// on the store's unique order-number index to reject the loser of a
/// concurrent allocation with a typed, retryable failure. Retry is the
/// caller's responsibility; this layer never retries internally.
#[async_trait]
pub trait OrderNumberAllocator: Send + Sync {
    /// The largest order id ever persisted, or 0 if no order exists.
    ///
    /// Reflects committed state only: a value is never derived from a write
    /// that is not yet durable. Never decreases when orders are deleted.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read.
    async fn maximum_allocated_id(&self) -> Result<u64, OrderError>;

    /// The canonical order number for the next allocation.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read.
    async fn next_order_number(&self) -> Result<OrderNumber, OrderError> {
        let max = self.maximum_allocated_id().await?;
        Ok(OrderNumber::from_sequence(max + 1))
    }
}

/// Repository trait for Order persistence.
///
/// This is a domain interface (port) that is implemented by infrastructure
/// adapters. Single-entity getters return `Ok(None)` on absence; constraint
/// and store failures are typed errors, never swallowed.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Save an order (insert or update), returning the persisted state.
    ///
    /// # Errors
    ///
    /// Returns error if the order number is held by a different order, the
    /// id is occupied by a different entity, or the write fails.
    async fn save(&self, order: &Order) -> Result<Order, OrderError>;

    /// Permanently remove an order.
    ///
    /// # Errors
    ///
    /// Returns error if the delete fails; the store decides how a repeated
    /// delete of an already-absent order behaves.
    async fn delete(&self, order: &Order) -> Result<(), OrderError>;

    /// Resolve an order by id, optionally validating its kind.
    ///
    /// `None` for `expected` matches any kind.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the stored order is not of the requested
    /// kind, or an error if the lookup fails. Absence is `Ok(None)`.
    async fn get_by_id(
        &self,
        id: OrderId,
        expected: Option<OrderKind>,
    ) -> Result<Option<Order>, OrderError>;

    /// Resolve an order by uuid.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup fails. Absence is `Ok(None)`.
    async fn get_by_uuid(&self, uuid: Uuid) -> Result<Option<Order>, OrderError>;

    /// Resolve an order by its order number.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup fails. Absence is `Ok(None)`.
    async fn get_by_order_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<Order>, OrderError>;

    /// All orders satisfying every supplied filter dimension.
    ///
    /// Never fails on an empty result; ordering is stable for a fixed input.
    ///
    /// # Errors
    ///
    /// Returns error if the query cannot be executed.
    async fn query(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderError>;

    /// The activation flag as currently committed in the store, bypassing
    /// any caching layer.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order row no longer exists.
    async fn is_activated_in_store(&self, order: &Order) -> Result<bool, OrderError>;

    /// The order number as currently committed in the store, bypassing any
    /// caching layer.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order row no longer exists.
    async fn order_number_in_store(&self, order: &Order) -> Result<OrderNumber, OrderError>;
}
