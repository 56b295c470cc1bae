//! Shared Domain Types
//!
//! Value objects shared across bounded contexts.

pub mod value_objects;

pub use value_objects::{
    ConceptId, EncounterId, OrderGroupId, OrderId, OrderNumber, OrderSetId, PatientId,
    PublishedOrderSetId, Timestamp, UserId,
};
