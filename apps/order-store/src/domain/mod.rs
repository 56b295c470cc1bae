//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`orders`]: Order identity, numbering, activation, and filter queries
//! - [`order_groups`]: Patient-scoped groupings of related orders
//! - [`order_sets`]: Reusable order templates and their published registry

pub mod order_groups;
pub mod order_sets;
pub mod orders;
pub mod shared;
