//! Matching strategy definitions

use std::hash::{Hash, Hasher};

/// An algorithm the server uses to find approximate word matches
/// (e.g. "exact", "prefix")
///
/// Equality and hashing consider the name only.
#[derive(Debug, Clone)]
pub struct MatchingStrategy {
    name: String,
    description: String,
}

impl MatchingStrategy {
    /// Create a new matching strategy value
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Strategy token as used on the wire (e.g. "prefix")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for MatchingStrategy {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MatchingStrategy {}

impl Hash for MatchingStrategy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
