//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up ids from different contexts. Storage identities
//! are integers; patient/concept/user/encounter ids reference entities owned
//! elsewhere in the record system.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new identifier.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the inner numeric value.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(OrderId, "Storage identity of an order.");
define_id!(OrderGroupId, "Storage identity of an order group.");
define_id!(OrderSetId, "Storage identity of an order-set template.");
define_id!(
    PublishedOrderSetId,
    "Storage identity of a published order set."
);
define_id!(PatientId, "Reference to a patient owned by the record system.");
define_id!(ConceptId, "Reference to a clinical concept (drug, test, ...).");
define_id!(UserId, "Reference to a user (the orderer).");
define_id!(EncounterId, "Reference to a clinical encounter.");
