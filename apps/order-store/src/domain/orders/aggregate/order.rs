//! Order Aggregate Root
//!
//! A single clinical instruction tied to a patient, concept, orderer, and
//! encounter. The order number is assigned at creation and never changes;
//! effective status is computed from the temporal fields, never stored.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::orders::errors::OrderError;
use crate::domain::orders::value_objects::OrderKind;
use crate::domain::shared::{
    ConceptId, EncounterId, OrderId, OrderNumber, PatientId, Timestamp, UserId,
};

/// Command to create a new order.
///
/// The storage id and order number are allocated by the caller before
/// construction (see `OrderNumberAllocator`); the uuid is generated here.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Storage identity chosen for the order.
    pub id: OrderId,
    /// Allocated order number.
    pub order_number: OrderNumber,
    /// Clinical kind of the order.
    pub kind: OrderKind,
    /// Patient the order is for.
    pub patient: PatientId,
    /// Concept being ordered.
    pub concept: ConceptId,
    /// User placing the order.
    pub orderer: UserId,
    /// Encounter the order was placed in.
    pub encounter: EncounterId,
    /// Start of the effective period.
    pub start_date: Timestamp,
    /// Instant the order expires on its own, if any.
    pub auto_expire_date: Option<Timestamp>,
    /// Free-text instructions.
    pub instructions: Option<String>,
    /// External accession number, if any.
    pub accession_number: Option<String>,
    /// Number of the order this one revises, if any.
    pub previous_order_number: Option<OrderNumber>,
}

impl CreateOrderCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if required parameters are missing or inconsistent.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.order_number.as_str().is_empty() {
            return Err(OrderError::InvalidParameters {
                field: "order_number".to_string(),
                message: "Order number must not be empty".to_string(),
            });
        }

        if let Some(expire) = self.auto_expire_date {
            if expire <= self.start_date {
                return Err(OrderError::InvalidParameters {
                    field: "auto_expire_date".to_string(),
                    message: "Auto-expire date must follow the start date".to_string(),
                });
            }
        }

        if self
            .instructions
            .as_ref()
            .is_some_and(|text| text.trim().is_empty())
        {
            return Err(OrderError::InvalidParameters {
                field: "instructions".to_string(),
                message: "Instructions must not be blank when present".to_string(),
            });
        }

        Ok(())
    }
}

/// Order Aggregate Root.
///
/// Owned by the storage layer; patient, concept, orderer, and encounter are
/// references to entities owned elsewhere. The active period is half-open:
/// `[start_date, effective_stop)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    uuid: Uuid,
    order_number: OrderNumber,
    kind: OrderKind,
    patient: PatientId,
    concept: ConceptId,
    orderer: UserId,
    encounter: EncounterId,
    instructions: Option<String>,
    accession_number: Option<String>,
    previous_order_number: Option<OrderNumber>,
    activated: bool,
    date_activated: Option<Timestamp>,
    start_date: Timestamp,
    auto_expire_date: Option<Timestamp>,
    date_stopped: Option<Timestamp>,
    created_at: Timestamp,
}

impl Order {
    /// Create a new order from a validated command.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails validation.
    pub fn new(command: CreateOrderCommand) -> Result<Self, OrderError> {
        command.validate()?;

        Ok(Self {
            id: command.id,
            uuid: Uuid::new_v4(),
            order_number: command.order_number,
            kind: command.kind,
            patient: command.patient,
            concept: command.concept,
            orderer: command.orderer,
            encounter: command.encounter,
            instructions: command.instructions,
            accession_number: command.accession_number,
            previous_order_number: command.previous_order_number,
            activated: false,
            date_activated: None,
            start_date: command.start_date,
            auto_expire_date: command.auto_expire_date,
            date_stopped: None,
            created_at: Timestamp::now(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Storage identity.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Stable universal identity.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Globally unique order number.
    #[must_use]
    pub const fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    /// Clinical kind discriminant.
    #[must_use]
    pub const fn kind(&self) -> OrderKind {
        self.kind
    }

    /// Patient the order is for.
    #[must_use]
    pub const fn patient(&self) -> PatientId {
        self.patient
    }

    /// Concept being ordered.
    #[must_use]
    pub const fn concept(&self) -> ConceptId {
        self.concept
    }

    /// User who placed the order.
    #[must_use]
    pub const fn orderer(&self) -> UserId {
        self.orderer
    }

    /// Encounter the order was placed in.
    #[must_use]
    pub const fn encounter(&self) -> EncounterId {
        self.encounter
    }

    /// Free-text instructions.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// External accession number.
    #[must_use]
    pub fn accession_number(&self) -> Option<&str> {
        self.accession_number.as_deref()
    }

    /// Number of the order this one revises.
    #[must_use]
    pub const fn previous_order_number(&self) -> Option<&OrderNumber> {
        self.previous_order_number.as_ref()
    }

    /// Signing-workflow activation flag.
    ///
    /// Authoritative only in storage; a cached copy of the order may carry a
    /// stale value. Use `OrderRepository::is_activated_in_store` when the
    /// committed value matters.
    #[must_use]
    pub const fn activated(&self) -> bool {
        self.activated
    }

    /// Instant the order was activated, if it has been.
    #[must_use]
    pub const fn date_activated(&self) -> Option<Timestamp> {
        self.date_activated
    }

    /// Start of the effective period.
    #[must_use]
    pub const fn start_date(&self) -> Timestamp {
        self.start_date
    }

    /// Instant the order expires on its own, if any.
    #[must_use]
    pub const fn auto_expire_date(&self) -> Option<Timestamp> {
        self.auto_expire_date
    }

    /// Instant the order was explicitly stopped, if it has been.
    #[must_use]
    pub const fn date_stopped(&self) -> Option<Timestamp> {
        self.date_stopped
    }

    /// Instant the order row was created.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Mark the order as activated by the signing workflow.
    ///
    /// # Errors
    ///
    /// Returns error if the order is already activated.
    pub fn activate(&mut self, at: Timestamp) -> Result<(), OrderError> {
        if self.activated {
            return Err(OrderError::AlreadyActivated {
                order_id: self.id.value(),
            });
        }
        self.activated = true;
        self.date_activated = Some(at);
        Ok(())
    }

    /// Explicitly stop the order, ending its effective period.
    ///
    /// # Errors
    ///
    /// Returns error if the order is already stopped or the stop instant
    /// precedes the start of the effective period.
    pub fn stop(&mut self, at: Timestamp) -> Result<(), OrderError> {
        if self.date_stopped.is_some() {
            return Err(OrderError::CannotStop {
                order_id: self.id.value(),
                reason: "already stopped".to_string(),
            });
        }
        if at < self.start_date {
            return Err(OrderError::CannotStop {
                order_id: self.id.value(),
                reason: "stop date precedes start date".to_string(),
            });
        }
        self.date_stopped = Some(at);
        Ok(())
    }

    // =========================================================================
    // Computed status
    // =========================================================================

    /// End of the effective period: the earliest of the explicit stop and the
    /// auto-expire instant, if either exists.
    #[must_use]
    pub fn effective_stop(&self) -> Option<Timestamp> {
        match (self.date_stopped, self.auto_expire_date) {
            (Some(stopped), Some(expire)) => Some(stopped.min(expire)),
            (Some(stopped), None) => Some(stopped),
            (None, Some(expire)) => Some(expire),
            (None, None) => None,
        }
    }

    /// Whether the active period contains `as_of`.
    #[must_use]
    pub fn is_current(&self, as_of: Timestamp) -> bool {
        self.start_date <= as_of && self.effective_stop().is_none_or(|stop| as_of < stop)
    }

    /// Whether the active period ended at or before `as_of`.
    ///
    /// Disjoint with [`Order::is_current`] for any fixed `as_of`.
    #[must_use]
    pub fn is_complete(&self, as_of: Timestamp) -> bool {
        self.effective_stop().is_some_and(|stop| stop <= as_of)
    }
}
