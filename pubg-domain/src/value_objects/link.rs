// Resolved-or-not relationship slot

use serde::{Deserialize, Serialize};

// `Unresolved` means the pointer was present but `included` had no match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Link<T> {
    Resolved(T),
    Unresolved { kind: String, id: String },
}

impl<T> Link<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Link::Resolved(value) => Some(value),
            Link::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Link::Resolved(_))
    }
}
