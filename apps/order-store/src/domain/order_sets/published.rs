//! Published order set.

use serde::{Deserialize, Serialize};

use super::order_set::OrderSet;
use crate::domain::shared::{ConceptId, PublishedOrderSetId};

/// An order set made discoverable and reusable under a clinical concept.
///
/// At most one published set exists per concept; publishing under an
/// occupied concept replaces the previous association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedOrderSet {
    id: PublishedOrderSetId,
    concept: ConceptId,
    content: OrderSet,
}

impl PublishedOrderSet {
    /// Associate template content with a concept.
    #[must_use]
    pub const fn new(id: PublishedOrderSetId, concept: ConceptId, content: OrderSet) -> Self {
        Self {
            id,
            concept,
            content,
        }
    }

    /// Registry identity.
    #[must_use]
    pub const fn id(&self) -> PublishedOrderSetId {
        self.id
    }

    /// Concept the set is published under.
    #[must_use]
    pub const fn concept(&self) -> ConceptId {
        self.concept
    }

    /// The published template content.
    #[must_use]
    pub const fn content(&self) -> &OrderSet {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::OrderSetId;

    #[test]
    fn new_carries_concept_and_content() {
        let content = OrderSet::new(OrderSetId::new(3), "Chest pain workup", vec![]);
        let published =
            PublishedOrderSet::new(PublishedOrderSetId::new(1), ConceptId::new(42), content);
        assert_eq!(published.concept(), ConceptId::new(42));
        assert_eq!(published.content().name(), "Chest pain workup");
    }
}
