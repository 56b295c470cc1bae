// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Store - Clinical Order Persistence Core
//!
//! Persistence contract for clinical orders in an electronic health record
//! system: how an order is identified, numbered, filtered, and grouped, and
//! how reusable order-set templates are published and looked up.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, repository traits)
//!   - `orders`: Order aggregate, order numbering, filter queries
//!   - `order_groups`: Patient-scoped groupings of related orders
//!   - `order_sets`: Reusable templates and the published-set registry
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: In-memory order store, read-through cache decorator
//!
//! The calling order-management service (business rules, workflow, rendering)
//! sits outside this crate and composes these contracts. No operation here
//! spans more than one committed write; composing multiple calls into one
//! atomic unit is the caller's responsibility.
//!
//! # Consistency
//!
//! Order-number allocation is serializable: `maximum_allocated_id` reflects
//! committed state only, and the store rejects a duplicate order number with
//! a typed, retryable failure. The two `*_in_store` reads bypass any cache
//! layer; every other read may be served stale by a caching decorator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Infrastructure layer - Persistence adapters.
pub mod infrastructure;

/// Store configuration.
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::order_groups::{OrderGroup, OrderGroupError, OrderGroupRepository};
pub use domain::order_sets::{
    OrderSet, OrderSetError, OrderSetRepository, PublishedOrderSet, PublishedOrderSetRegistry,
};
pub use domain::orders::{
    CreateOrderCommand, Order, OrderError, OrderFilter, OrderKind, OrderNumberAllocator,
    OrderRepository, OrderStatus,
};
pub use domain::shared::{
    ConceptId, EncounterId, OrderGroupId, OrderId, OrderNumber, OrderSetId, PatientId,
    PublishedOrderSetId, Timestamp, UserId,
};

// Infrastructure re-exports
pub use config::{CacheConfig, ConfigError, StoreConfig};
pub use infrastructure::persistence::{
    CachedOrderRepository, InMemoryOrderGroupRepository, InMemoryOrderRepository,
    InMemoryOrderSetRepository, InMemoryOrderStore, InMemoryPublishedOrderSetRegistry,
};
