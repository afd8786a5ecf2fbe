//! Database definitions
//!
//! A named, independently searchable dictionary source on the server.

use std::hash::{Hash, Hasher};

/// A dictionary database offered by a DICT server
///
/// Equality and hashing consider the name only; the name is a unique,
/// case-sensitive token per server.
#[derive(Debug, Clone)]
pub struct Database {
    name: String,
    description: String,
}

impl Database {
    /// Wildcard token: search all databases on the server
    pub const ALL: &'static str = "*";

    /// Token selecting only the first database that yields a hit
    pub const FIRST: &'static str = "!";

    /// Create a new database value
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Short unique token identifying the database (e.g. "wn")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description (e.g. "WordNet (r) 3.0")
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Database {}

impl Hash for Database {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
