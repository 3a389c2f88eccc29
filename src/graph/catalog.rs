//! Caller-supplied catalog of known middleware.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Functional category of a middleware, used by policy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiddlewareCategory {
    SecurityHeaders,
    RateLimit,
    Auth,
    Cors,
    StripPrefix,
    Other,
}

/// The set of middleware names a compile unit may reference.
///
/// Owned by the caller; the pipeline only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MiddlewareCatalog {
    entries: BTreeMap<String, MiddlewareCategory>,
}

impl MiddlewareCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, category: MiddlewareCategory) {
        self.entries.insert(name.into(), category);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn category(&self, name: &str) -> Option<MiddlewareCategory> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, MiddlewareCategory)> for MiddlewareCatalog {
    fn from_iter<I: IntoIterator<Item = (String, MiddlewareCategory)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
