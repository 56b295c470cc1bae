//! Multi-dimensional order query criteria.

use serde::{Deserialize, Serialize};

use super::{OrderKind, OrderStatus};
use crate::domain::orders::aggregate::Order;
use crate::domain::shared::{ConceptId, EncounterId, PatientId, Timestamp, UserId};

/// Filter criteria for querying orders.
///
/// Every dimension is optional; absent means unconstrained. Supplied
/// dimensions compose conjunctively. A supplied but empty list constrains to
/// nothing and therefore matches no orders.
///
/// The status dimension is evaluated relative to `as_of`; when `as_of` is
/// absent it resolves to "now", once per query evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    kind: Option<OrderKind>,
    patients: Option<Vec<PatientId>>,
    concepts: Option<Vec<ConceptId>>,
    orderers: Option<Vec<UserId>>,
    encounters: Option<Vec<EncounterId>>,
    status: OrderStatus,
    as_of: Option<Timestamp>,
}

impl OrderFilter {
    /// An unconstrained filter matching every order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to a single order kind.
    #[must_use]
    pub fn with_kind(mut self, kind: OrderKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Constrain to orders for any of the given patients.
    #[must_use]
    pub fn for_patients(mut self, patients: impl IntoIterator<Item = PatientId>) -> Self {
        self.patients = Some(patients.into_iter().collect());
        self
    }

    /// Constrain to orders for any of the given concepts.
    #[must_use]
    pub fn for_concepts(mut self, concepts: impl IntoIterator<Item = ConceptId>) -> Self {
        self.concepts = Some(concepts.into_iter().collect());
        self
    }

    /// Constrain to orders placed by any of the given orderers.
    #[must_use]
    pub fn for_orderers(mut self, orderers: impl IntoIterator<Item = UserId>) -> Self {
        self.orderers = Some(orderers.into_iter().collect());
        self
    }

    /// Constrain to orders placed within any of the given encounters.
    #[must_use]
    pub fn for_encounters(mut self, encounters: impl IntoIterator<Item = EncounterId>) -> Self {
        self.encounters = Some(encounters.into_iter().collect());
        self
    }

    /// Constrain by computed status.
    #[must_use]
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Evaluate the status dimension at the given instant instead of "now".
    #[must_use]
    pub fn as_of(mut self, as_of: Timestamp) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// The status dimension of this filter.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// The explicit as-of instant, if one was supplied.
    #[must_use]
    pub const fn as_of_instant(&self) -> Option<Timestamp> {
        self.as_of
    }

    /// Whether the given order satisfies every supplied dimension.
    ///
    /// `now` is the instant an absent `as_of` resolves to; the caller fixes
    /// it once per query so a single evaluation never straddles two instants.
    #[must_use]
    pub fn matches(&self, order: &Order, now: Timestamp) -> bool {
        if self.kind.is_some_and(|kind| order.kind() != kind) {
            return false;
        }
        if let Some(patients) = &self.patients {
            if !patients.contains(&order.patient()) {
                return false;
            }
        }
        if let Some(concepts) = &self.concepts {
            if !concepts.contains(&order.concept()) {
                return false;
            }
        }
        if let Some(orderers) = &self.orderers {
            if !orderers.contains(&order.orderer()) {
                return false;
            }
        }
        if let Some(encounters) = &self.encounters {
            if !encounters.contains(&order.encounter()) {
                return false;
            }
        }

        let as_of = self.as_of.unwrap_or(now);
        match self.status {
            OrderStatus::Current => order.is_current(as_of),
            OrderStatus::Complete => order.is_complete(as_of),
            OrderStatus::Any => true,
        }
    }
}
