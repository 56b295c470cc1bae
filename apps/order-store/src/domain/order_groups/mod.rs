//! Order Groups Bounded Context
//!
//! Patient-scoped groupings of related orders. Every member order must
//! belong to the group's patient; the invariant is enforced when the group
//! is saved, against committed orders.

pub mod errors;
pub mod group;
pub mod repository;

pub use errors::OrderGroupError;
pub use group::OrderGroup;
pub use repository::OrderGroupRepository;
