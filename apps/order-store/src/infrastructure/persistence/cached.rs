//! Read-through cache decorator for the order repository.
//!
//! Normal single-entity reads may be served from the cache and can
//! therefore be stale until invalidation propagates. The two `*_in_store`
//! reads never touch the cache: the authoritative path is a distinct access
//! path, not a flag on the normal one, so the consistency guarantee cannot
//! be accidentally disabled.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::config::CacheConfig;
use crate::domain::orders::repository::OrderRepository;
use crate::domain::orders::value_objects::{OrderFilter, OrderKind};
use crate::domain::orders::{Order, OrderError};
use crate::domain::shared::{OrderId, OrderNumber};

/// Caching decorator over any [`OrderRepository`].
///
/// The cache is a bounded map keyed by order id; entries beyond capacity are
/// simply not cached. A capacity of zero makes the decorator a pass-through.
#[derive(Debug)]
pub struct CachedOrderRepository<R> {
    inner: Arc<R>,
    cache: RwLock<HashMap<u64, Order>>,
    capacity: usize,
}

impl<R: OrderRepository> CachedOrderRepository<R> {
    /// Decorate a repository with the default cache capacity.
    #[must_use]
    pub fn new(inner: Arc<R>) -> Self {
        Self::with_capacity(inner, CacheConfig::default().capacity)
    }

    /// Decorate a repository with an explicit cache capacity.
    #[must_use]
    pub fn with_capacity(inner: Arc<R>, capacity: usize) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Decorate a repository as configured; a disabled cache is a
    /// pass-through.
    #[must_use]
    pub fn from_config(inner: Arc<R>, config: &CacheConfig) -> Self {
        let capacity = if config.enabled { config.capacity } else { 0 };
        Self::with_capacity(inner, capacity)
    }

    /// Seed a cache entry without touching the inner store.
    ///
    /// For test setup and cache warm-up; the entry may be deliberately
    /// stale relative to the store.
    pub fn prime(&self, order: Order) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(order.id().value(), order);
        }
    }

    /// Drop the cache entry for an order id.
    pub fn invalidate(&self, id: OrderId) {
        if let Ok(mut cache) = self.cache.write() {
            cache.remove(&id.value());
        }
    }

    fn cache_put(&self, order: &Order) {
        // Best-effort: a poisoned or full cache just skips the entry.
        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < self.capacity || cache.contains_key(&order.id().value()) {
                cache.insert(order.id().value(), order.clone());
            }
        }
    }

    fn cached_by_id(&self, id: OrderId) -> Option<Order> {
        self.cache
            .read()
            .ok()
            .and_then(|cache| cache.get(&id.value()).cloned())
    }

    fn cached_by(&self, predicate: impl Fn(&Order) -> bool) -> Option<Order> {
        self.cache
            .read()
            .ok()
            .and_then(|cache| cache.values().find(|o| predicate(o)).cloned())
    }

    fn check_kind(order: &Order, expected: Option<OrderKind>) -> Result<(), OrderError> {
        match expected {
            Some(kind) if order.kind() != kind => Err(OrderError::TypeMismatch {
                order_id: order.id().value(),
                expected: kind,
                actual: order.kind(),
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<R: OrderRepository> OrderRepository for CachedOrderRepository<R> {
    async fn save(&self, order: &Order) -> Result<Order, OrderError> {
        let saved = self.inner.save(order).await?;
        self.cache_put(&saved);
        Ok(saved)
    }

    async fn delete(&self, order: &Order) -> Result<(), OrderError> {
        self.inner.delete(order).await?;
        self.invalidate(order.id());
        Ok(())
    }

    async fn get_by_id(
        &self,
        id: OrderId,
        expected: Option<OrderKind>,
    ) -> Result<Option<Order>, OrderError> {
        if let Some(hit) = self.cached_by_id(id) {
            Self::check_kind(&hit, expected)?;
            debug!(order_id = id.value(), "Order served from cache");
            return Ok(Some(hit));
        }

        let fetched = self.inner.get_by_id(id, expected).await?;
        if let Some(order) = &fetched {
            self.cache_put(order);
        }
        Ok(fetched)
    }

    async fn get_by_uuid(&self, uuid: Uuid) -> Result<Option<Order>, OrderError> {
        if let Some(hit) = self.cached_by(|o| o.uuid() == uuid) {
            debug!(order_id = hit.id().value(), "Order served from cache");
            return Ok(Some(hit));
        }

        let fetched = self.inner.get_by_uuid(uuid).await?;
        if let Some(order) = &fetched {
            self.cache_put(order);
        }
        Ok(fetched)
    }

    async fn get_by_order_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<Order>, OrderError> {
        if let Some(hit) = self.cached_by(|o| o.order_number() == order_number) {
            debug!(order_id = hit.id().value(), "Order served from cache");
            return Ok(Some(hit));
        }

        let fetched = self.inner.get_by_order_number(order_number).await?;
        if let Some(order) = &fetched {
            self.cache_put(order);
        }
        Ok(fetched)
    }

    async fn query(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderError> {
        // Multi-dimensional queries cannot be answered from a partial cache.
        self.inner.query(filter).await
    }

    async fn is_activated_in_store(&self, order: &Order) -> Result<bool, OrderError> {
        self.inner.is_activated_in_store(order).await
    }

    async fn order_number_in_store(&self, order: &Order) -> Result<OrderNumber, OrderError> {
        self.inner.order_number_in_store(order).await
    }
}
