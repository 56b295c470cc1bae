//! Persistence Adapters
//!
//! Implementations of the domain repository traits. The in-memory store is
//! the reference adapter; the cached decorator layers a read-through cache
//! over any order repository while keeping the authoritative reads on a
//! direct path to the store.

pub mod cached;
pub mod in_memory;

pub use cached::CachedOrderRepository;
pub use in_memory::{
    InMemoryOrderGroupRepository, InMemoryOrderRepository, InMemoryOrderSetRepository,
    InMemoryOrderStore, InMemoryPublishedOrderSetRegistry,
};
