//! Order group aggregate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::{OrderGroupId, OrderId, PatientId};

/// A set of related orders for one patient, grouped for clinical or
/// workflow reasons.
///
/// Members are referenced by order id, in the order they were added.
/// Invariant, enforced at save time against committed orders: every member
/// order's patient equals the group's patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderGroup {
    id: OrderGroupId,
    uuid: Uuid,
    patient: PatientId,
    members: Vec<OrderId>,
}

impl OrderGroup {
    /// Create a new group for a patient.
    #[must_use]
    pub fn new(id: OrderGroupId, patient: PatientId, members: Vec<OrderId>) -> Self {
        Self {
            id,
            uuid: Uuid::new_v4(),
            patient,
            members,
        }
    }

    /// Storage identity.
    #[must_use]
    pub const fn id(&self) -> OrderGroupId {
        self.id
    }

    /// Stable universal identity.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Patient every member order must belong to.
    #[must_use]
    pub const fn patient(&self) -> PatientId {
        self.patient
    }

    /// Member order ids, in insertion order.
    #[must_use]
    pub fn members(&self) -> &[OrderId] {
        &self.members
    }

    /// Append a member order reference.
    pub fn add_member(&mut self, order_id: OrderId) {
        self.members.push(order_id);
    }
}
