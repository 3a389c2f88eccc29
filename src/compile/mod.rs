//! Routing table compilation subsystem.
//!
//! # Data Flow
//! ```text
//! validated RuleGraph (zero errors)
//!     → compiler.rs (discard disabled, sort by specificity)
//!     → RoutingTable (immutable, rank-ordered entries)
//! ```
//!
//! # Design Decisions
//! - Runs only when validation produced zero errors
//! - Specificity: longest path prefix, then host label count, then
//!   router name, then declaration order (total, stable ordering)
//! - No regex in matcher introspection; linear scan only
//! - Identical inputs compile to byte-identical tables

pub mod compiler;
pub mod specificity;
pub mod table;

pub use compiler::compile;
pub use table::{RoutingTable, TableEntry};
