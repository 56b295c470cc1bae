//! Order set persistence ports.

use async_trait::async_trait;
use uuid::Uuid;

use super::errors::OrderSetError;
use super::order_set::OrderSet;
use super::published::PublishedOrderSet;
use crate::domain::shared::{ConceptId, OrderSetId};

/// Repository trait for `OrderSet` template persistence.
#[async_trait]
pub trait OrderSetRepository: Send + Sync {
    /// Save a template (insert or update), returning the persisted state.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn save(&self, set: &OrderSet) -> Result<OrderSet, OrderSetError>;

    /// Resolve a template by id.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup fails. Absence is `Ok(None)`.
    async fn get_by_id(&self, id: OrderSetId) -> Result<Option<OrderSet>, OrderSetError>;

    /// Resolve a template by uuid.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup fails. Absence is `Ok(None)`.
    async fn get_by_uuid(&self, uuid: Uuid) -> Result<Option<OrderSet>, OrderSetError>;
}

/// Registry of order sets published under clinical concepts.
#[async_trait]
pub trait PublishedOrderSetRegistry: Send + Sync {
    /// Create or replace the published association for a concept.
    ///
    /// Publishing under a concept that already has a published set
    /// overwrites it; the registry never holds two sets for one concept.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn publish(
        &self,
        concept: ConceptId,
        content: OrderSet,
    ) -> Result<PublishedOrderSet, OrderSetError>;

    /// The set published under a concept, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup fails. Absence is `Ok(None)`.
    async fn get_by_concept(
        &self,
        concept: ConceptId,
    ) -> Result<Option<PublishedOrderSet>, OrderSetError>;

    /// Published sets whose name or description matches the query text,
    /// case-insensitively, in stable order.
    ///
    /// An empty or unmatched query returns an empty sequence, never an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns error if the query cannot be executed.
    async fn search(&self, query: &str) -> Result<Vec<PublishedOrderSet>, OrderSetError>;
}
