//! Order Sets Bounded Context
//!
//! Reusable order templates and the registry that publishes them under
//! clinical concepts. Templates are administrative artifacts, independent of
//! any patient encounter.

pub mod errors;
pub mod order_set;
pub mod published;
pub mod repository;

pub use errors::OrderSetError;
pub use order_set::OrderSet;
pub use published::PublishedOrderSet;
pub use repository::{OrderSetRepository, PublishedOrderSetRegistry};
