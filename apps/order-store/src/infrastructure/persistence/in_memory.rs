//! In-memory order store.
//!
//! Reference adapter: one lock-guarded state shared by independent
//! per-context repository views. All constraint checks and mutations for a
//! save happen under a single write lock, so `maximum_allocated_id` only
//! ever reflects committed state and a failed save mutates nothing. Losers
//! of the allocate-then-insert race get a typed, retryable failure from the
//! unique order-number index.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::domain::order_groups::{OrderGroup, OrderGroupError, OrderGroupRepository};
use crate::domain::order_sets::{
    OrderSet, OrderSetError, OrderSetRepository, PublishedOrderSet, PublishedOrderSetRegistry,
};
use crate::domain::orders::repository::{OrderNumberAllocator, OrderRepository};
use crate::domain::orders::value_objects::{OrderFilter, OrderKind};
use crate::domain::orders::{Order, OrderError};
use crate::domain::shared::value_objects::order_number;
use crate::domain::shared::{
    ConceptId, OrderGroupId, OrderId, OrderNumber, OrderSetId, PatientId, PublishedOrderSetId,
    Timestamp,
};

/// Everything the store has committed.
#[derive(Debug, Default)]
struct StoreInner {
    orders: HashMap<u64, Order>,
    /// Unique index: order number -> holding order id.
    order_numbers: HashMap<String, u64>,
    /// Largest order id ever persisted; never decreases on delete.
    max_order_id: u64,
    groups: HashMap<u64, OrderGroup>,
    order_sets: HashMap<u64, OrderSet>,
    /// Keyed by concept id, which makes at-most-one-per-concept structural.
    published: HashMap<u64, PublishedOrderSet>,
    next_published_id: u64,
}

#[derive(Debug)]
struct StoreShared {
    inner: RwLock<StoreInner>,
    order_number_prefix: String,
}

impl StoreShared {
    fn read(&self) -> Result<RwLockReadGuard<'_, StoreInner>, String> {
        self.inner
            .read()
            .map_err(|_| "store lock poisoned".to_string())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreInner>, String> {
        self.inner
            .write()
            .map_err(|_| "store lock poisoned".to_string())
    }
}

/// In-memory implementation of the order persistence contracts.
///
/// One shared durable state exposing independent per-context repository
/// views. Suitable for testing, development, and as the reference semantics
/// for durable adapters.
#[derive(Debug, Clone)]
pub struct InMemoryOrderStore {
    shared: Arc<StoreShared>,
}

impl InMemoryOrderStore {
    /// Create a new empty store with the canonical order-number prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(order_number::DEFAULT_PREFIX)
    }

    /// Create a new empty store using the configured order-number prefix.
    #[must_use]
    pub fn with_config(config: &StoreConfig) -> Self {
        Self::with_prefix(&config.order_number_prefix)
    }

    fn with_prefix(prefix: &str) -> Self {
        Self {
            shared: Arc::new(StoreShared {
                inner: RwLock::new(StoreInner::default()),
                order_number_prefix: prefix.to_string(),
            }),
        }
    }

    /// Order repository view (also the order-number allocator).
    #[must_use]
    pub fn orders(&self) -> InMemoryOrderRepository {
        InMemoryOrderRepository {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Order group repository view.
    #[must_use]
    pub fn groups(&self) -> InMemoryOrderGroupRepository {
        InMemoryOrderGroupRepository {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Order set repository view.
    #[must_use]
    pub fn order_sets(&self) -> InMemoryOrderSetRepository {
        InMemoryOrderSetRepository {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Published order set registry view.
    #[must_use]
    pub fn published(&self) -> InMemoryPublishedOrderSetRegistry {
        InMemoryPublishedOrderSetRegistry {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Whether the store holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared
            .read()
            .is_ok_and(|inner| inner.orders.is_empty())
    }

    /// Remove everything, including allocation history.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.shared.inner.write() {
            *inner = StoreInner::default();
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Order repository over the shared in-memory state.
#[derive(Debug, Clone)]
pub struct InMemoryOrderRepository {
    shared: Arc<StoreShared>,
}

impl InMemoryOrderRepository {
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
impl OrderNumberAllocator for InMemoryOrderRepository {
    async fn maximum_allocated_id(&self) -> Result<u64, OrderError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderError::Storage { message })?;
        Ok(inner.max_order_id)
    }

    async fn next_order_number(&self) -> Result<OrderNumber, OrderError> {
        let max = self.maximum_allocated_id().await?;
        Ok(OrderNumber::with_prefix(
            &self.shared.order_number_prefix,
            max + 1,
        ))
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<Order, OrderError> {
        let mut inner = self
            .shared
            .write()
            .map_err(|message| OrderError::Storage { message })?;

        let id = order.id().value();
        if let Some(existing) = inner.orders.get(&id) {
            if existing.uuid() != order.uuid() {
                return Err(OrderError::IdentityConflict { order_id: id });
            }
            if existing.order_number() != order.order_number() {
                return Err(OrderError::InvalidParameters {
                    field: "order_number".to_string(),
                    message: "Orders are never renumbered".to_string(),
                });
            }
        }
        if let Some(&holder) = inner.order_numbers.get(order.order_number().as_str()) {
            if holder != id {
                return Err(OrderError::DuplicateOrderNumber {
                    order_number: order.order_number().as_str().to_string(),
                });
            }
        }

        inner
            .order_numbers
            .insert(order.order_number().as_str().to_string(), id);
        inner.orders.insert(id, order.clone());
        inner.max_order_id = inner.max_order_id.max(id);

        debug!(
            order_id = id,
            order_number = %order.order_number(),
            "Order saved"
        );
        Ok(order.clone())
    }

    async fn delete(&self, order: &Order) -> Result<(), OrderError> {
        let mut inner = self
            .shared
            .write()
            .map_err(|message| OrderError::Storage { message })?;

        let id = order.id().value();
        if let Some(removed) = inner.orders.remove(&id) {
            inner.order_numbers.remove(removed.order_number().as_str());
            debug!(order_id = id, "Order purged");
        } else {
            debug!(order_id = id, "Delete of absent order ignored");
        }
        Ok(())
    }

    async fn get_by_id(
        &self,
        id: OrderId,
        expected: Option<OrderKind>,
    ) -> Result<Option<Order>, OrderError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderError::Storage { message })?;

        match inner.orders.get(&id.value()) {
            None => Ok(None),
            Some(order) => {
                Self::check_kind(order, expected)?;
                Ok(Some(order.clone()))
            }
        }
    }

    async fn get_by_uuid(&self, uuid: Uuid) -> Result<Option<Order>, OrderError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderError::Storage { message })?;
        Ok(inner.orders.values().find(|o| o.uuid() == uuid).cloned())
    }

    async fn get_by_order_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<Order>, OrderError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderError::Storage { message })?;
        Ok(inner
            .order_numbers
            .get(order_number.as_str())
            .and_then(|id| inner.orders.get(id))
            .cloned())
    }

    async fn query(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderError::Storage { message })?;

        // An absent as-of date resolves once, so one evaluation never
        // straddles two instants.
        let now = Timestamp::now();
        let mut matched: Vec<Order> = inner
            .orders
            .values()
            .filter(|order| filter.matches(order, now))
            .cloned()
            .collect();
        matched.sort_by_key(Order::id);
        Ok(matched)
    }

    async fn is_activated_in_store(&self, order: &Order) -> Result<bool, OrderError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderError::Storage { message })?;
        inner
            .orders
            .get(&order.id().value())
            .map(Order::activated)
            .ok_or(OrderError::NotFound {
                order_id: order.id().value(),
            })
    }

    async fn order_number_in_store(&self, order: &Order) -> Result<OrderNumber, OrderError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderError::Storage { message })?;
        inner
            .orders
            .get(&order.id().value())
            .map(|o| o.order_number().clone())
            .ok_or(OrderError::NotFound {
                order_id: order.id().value(),
            })
    }
}

// =============================================================================
// Order groups
// =============================================================================

/// Order group repository over the shared in-memory state.
#[derive(Debug, Clone)]
pub struct InMemoryOrderGroupRepository {
    shared: Arc<StoreShared>,
}

#[async_trait]
impl OrderGroupRepository for InMemoryOrderGroupRepository {
    async fn save(&self, group: &OrderGroup) -> Result<OrderGroup, OrderGroupError> {
        let mut inner = self
            .shared
            .write()
            .map_err(|message| OrderGroupError::Storage { message })?;

        // Validate every member against committed orders before touching
        // anything, so a failed save persists no partial state.
        for member in group.members() {
            match inner.orders.get(&member.value()) {
                None => {
                    return Err(OrderGroupError::UnknownMember {
                        group_id: group.id().value(),
                        order_id: member.value(),
                    });
                }
                Some(order) if order.patient() != group.patient() => {
                    return Err(OrderGroupError::CrossPatientMember {
                        group_id: group.id().value(),
                        order_id: member.value(),
                    });
                }
                Some(_) => {}
            }
        }

        inner.groups.insert(group.id().value(), group.clone());
        debug!(
            group_id = group.id().value(),
            members = group.members().len(),
            "Order group saved"
        );
        Ok(group.clone())
    }

    async fn get_by_id(&self, id: OrderGroupId) -> Result<OrderGroup, OrderGroupError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderGroupError::Storage { message })?;
        inner
            .groups
            .get(&id.value())
            .cloned()
            .ok_or(OrderGroupError::NotFound {
                lookup: format!("id {id}"),
            })
    }

    async fn get_by_uuid(&self, uuid: Uuid) -> Result<OrderGroup, OrderGroupError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderGroupError::Storage { message })?;
        inner
            .groups
            .values()
            .find(|g| g.uuid() == uuid)
            .cloned()
            .ok_or(OrderGroupError::NotFound {
                lookup: format!("uuid {uuid}"),
            })
    }

    async fn list_by_patient(
        &self,
        patient: PatientId,
    ) -> Result<Vec<OrderGroup>, OrderGroupError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderGroupError::Storage { message })?;
        let mut groups: Vec<OrderGroup> = inner
            .groups
            .values()
            .filter(|g| g.patient() == patient)
            .cloned()
            .collect();
        groups.sort_by_key(OrderGroup::id);
        Ok(groups)
    }
}

// =============================================================================
// Order sets
// =============================================================================

/// Order set repository over the shared in-memory state.
#[derive(Debug, Clone)]
pub struct InMemoryOrderSetRepository {
    shared: Arc<StoreShared>,
}

#[async_trait]
impl OrderSetRepository for InMemoryOrderSetRepository {
    async fn save(&self, set: &OrderSet) -> Result<OrderSet, OrderSetError> {
        let mut inner = self
            .shared
            .write()
            .map_err(|message| OrderSetError::Storage { message })?;
        inner.order_sets.insert(set.id().value(), set.clone());
        debug!(
            order_set_id = set.id().value(),
            name = set.name(),
            "Order set saved"
        );
        Ok(set.clone())
    }

    async fn get_by_id(&self, id: OrderSetId) -> Result<Option<OrderSet>, OrderSetError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderSetError::Storage { message })?;
        Ok(inner.order_sets.get(&id.value()).cloned())
    }

    async fn get_by_uuid(&self, uuid: Uuid) -> Result<Option<OrderSet>, OrderSetError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderSetError::Storage { message })?;
        Ok(inner
            .order_sets
            .values()
            .find(|s| s.uuid() == uuid)
            .cloned())
    }
}

// =============================================================================
// Published order sets
// =============================================================================

/// Published order set registry over the shared in-memory state.
#[derive(Debug, Clone)]
pub struct InMemoryPublishedOrderSetRegistry {
    shared: Arc<StoreShared>,
}

#[async_trait]
impl PublishedOrderSetRegistry for InMemoryPublishedOrderSetRegistry {
    async fn publish(
        &self,
        concept: ConceptId,
        content: OrderSet,
    ) -> Result<PublishedOrderSet, OrderSetError> {
        let mut inner = self
            .shared
            .write()
            .map_err(|message| OrderSetError::Storage { message })?;

        // Replacing keeps the registry id, so one concept can never surface
        // two published rows.
        let existing_id = inner
            .published
            .get(&concept.value())
            .map(PublishedOrderSet::id);
        let id = match existing_id {
            Some(id) => id,
            None => {
                inner.next_published_id += 1;
                PublishedOrderSetId::new(inner.next_published_id)
            }
        };

        let published = PublishedOrderSet::new(id, concept, content);
        let replaced = inner
            .published
            .insert(concept.value(), published.clone())
            .is_some();

        info!(
            concept_id = concept.value(),
            replaced,
            name = published.content().name(),
            "Order set published"
        );
        Ok(published)
    }

    async fn get_by_concept(
        &self,
        concept: ConceptId,
    ) -> Result<Option<PublishedOrderSet>, OrderSetError> {
        let inner = self
            .shared
            .read()
            .map_err(|message| OrderSetError::Storage { message })?;
        Ok(inner.published.get(&concept.value()).cloned())
    }

    async fn search(&self, query: &str) -> Result<Vec<PublishedOrderSet>, OrderSetError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let inner = self
            .shared
            .read()
            .map_err(|message| OrderSetError::Storage { message })?;
        let mut matched: Vec<PublishedOrderSet> = inner
            .published
            .values()
            .filter(|published| {
                let content = published.content();
                content.name().to_lowercase().contains(&needle)
                    || content
                        .description()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        matched.sort_by_key(PublishedOrderSet::id);
        Ok(matched)
    }
}
