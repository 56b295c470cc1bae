//! Order set template.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::{ConceptId, OrderSetId};

/// A reusable template listing concepts to order together, independent of
/// any patient or encounter.
///
/// No status or activation semantics apply; an order set is a template, not
/// a clinical event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSet {
    id: OrderSetId,
    uuid: Uuid,
    name: String,
    description: Option<String>,
    member_concepts: Vec<ConceptId>,
}

impl OrderSet {
    /// Create a new template.
    #[must_use]
    pub fn new(id: OrderSetId, name: impl Into<String>, member_concepts: Vec<ConceptId>) -> Self {
        Self {
            id,
            uuid: Uuid::new_v4(),
            name: name.into(),
            description: None,
            member_concepts,
        }
    }

    /// Attach a human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Storage identity.
    #[must_use]
    pub const fn id(&self) -> OrderSetId {
        self.id
    }

    /// Stable universal identity.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Human-readable template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Concept references, in template order.
    #[must_use]
    pub fn member_concepts(&self) -> &[ConceptId] {
        &self.member_concepts
    }
}
