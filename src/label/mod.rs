//! Label parsing subsystem.
//!
//! # Data Flow
//! ```text
//! raw labels (BTreeMap<String, String>, one map per backend unit)
//!     → parser.rs (dotted-key grammar)
//!     → RoutingIntent / ServiceTarget fragments
//!     → consumed by the graph builder
//! ```
//!
//! # Design Decisions
//! - Input maps are ordered (BTreeMap) so parse order, and therefore
//!   diagnostic order, is deterministic
//! - Malformed labels are skipped with a diagnostic, never fatal
//! - Empty rule value is a "route disabled" sentinel, not an error
//! - Raw strings do not leak past this boundary; later stages see
//!   typed intents only

pub mod intent;
pub mod parser;

use std::collections::BTreeMap;

/// Raw labels for one backend unit, as handed over by the caller.
pub type LabelSet = BTreeMap<String, String>;

pub use intent::{HealthCheck, Origin, RoutingIntent, ServiceTarget};
pub use parser::{parse_unit, ParsedUnit, ParserOptions};
