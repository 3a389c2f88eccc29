//! Injectable validation policy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Deployment-specific rules the validator enforces.
///
/// Policy violations are warnings, not structural errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Require a security-headers middleware on TLS-facing routers.
    pub require_security_headers_on_tls: bool,

    /// Entry points that denote encrypted listeners, in addition to
    /// routers that set `tls` explicitly.
    pub tls_entry_points: BTreeSet<String>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_security_headers_on_tls: true,
            tls_entry_points: ["websecure".to_string()].into_iter().collect(),
        }
    }
}

impl ValidationPolicy {
    /// True when the entry point names an encrypted listener.
    pub fn is_tls_entry_point(&self, entry_point: &str) -> bool {
        self.tls_entry_points.contains(entry_point)
    }
}
