//! Order group persistence port.

use async_trait::async_trait;
use uuid::Uuid;

use super::errors::OrderGroupError;
use super::group::OrderGroup;
use crate::domain::shared::{OrderGroupId, PatientId};

/// Repository trait for `OrderGroup` persistence.
///
/// Unlike the nullable order getters, group lookups fail typed on absence.
#[async_trait]
pub trait OrderGroupRepository: Send + Sync {
    /// Save a group (insert or update), returning the persisted state.
    ///
    /// The cross-patient invariant is checked against committed orders
    /// before anything is written; a failed save persists no partial state.
    ///
    /// # Errors
    ///
    /// Returns error if a member order is unknown, belongs to a different
    /// patient than the group, or the write fails.
    async fn save(&self, group: &OrderGroup) -> Result<OrderGroup, OrderGroupError>;

    /// Resolve a group by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no group has this id.
    async fn get_by_id(&self, id: OrderGroupId) -> Result<OrderGroup, OrderGroupError>;

    /// Resolve a group by uuid.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no group has this uuid.
    async fn get_by_uuid(&self, uuid: Uuid) -> Result<OrderGroup, OrderGroupError>;

    /// All groups scoped to a patient, in stable order.
    ///
    /// # Errors
    ///
    /// Returns error if the query cannot be executed.
    async fn list_by_patient(&self, patient: PatientId)
        -> Result<Vec<OrderGroup>, OrderGroupError>;
}
