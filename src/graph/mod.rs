//! Rule graph construction subsystem.
//!
//! # Data Flow
//! ```text
//! ParsedUnit[] (fragments, one per backend unit)
//!     → builder.rs (group by name, resolve references)
//!     → RuleGraph (Router → Service, Router → Middleware edges)
//!     → consumed by validator and compiler
//! ```
//!
//! # Design Decisions
//! - Duplicate names across units are errors; first occurrence wins
//!   for reporting but compilation fails overall
//! - Middleware references are checked against the caller-supplied
//!   catalog here, so the compiler's chain expansion is total
//! - Disabled routers keep their service edge alive (no spurious
//!   orphan warnings) but emit no resolution errors

pub mod builder;
pub mod catalog;

pub use builder::{build_graph, RouterNode, RuleGraph};
pub use catalog::{MiddlewareCatalog, MiddlewareCategory};
