//! Shared value objects.

pub mod identifiers;
pub mod order_number;
pub mod timestamp;

pub use identifiers::{
    ConceptId, EncounterId, OrderGroupId, OrderId, OrderSetId, PatientId, PublishedOrderSetId,
    UserId,
};
pub use order_number::OrderNumber;
pub use timestamp::Timestamp;
