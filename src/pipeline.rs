//! The compile pipeline.
//!
//! # Data Flow
//! ```text
//! LabelSet[] (one per backend unit)
//!     → label::parse_unit        (fragments + MalformedLabel diags)
//!     → graph::build_graph       (RuleGraph + reference diags)
//!     → validate::validate       (conflict/completeness diags)
//!     → compile::compile         (RoutingTable, only if zero errors)
//!     → Report
//! ```
//!
//! # Design Decisions
//! - Full pass: every stage runs to completion and every diagnostic is
//!   collected before the outcome is produced, never fail-fast
//! - Errors gate the compiler stage only; warnings never block
//! - Pure computation over caller-materialized input; no I/O, so
//!   independent compile units can run in parallel with no coordination

use serde::Serialize;
use tracing::debug;

use crate::compile::{self, RoutingTable};
use crate::graph::{self, MiddlewareCatalog};
use crate::label::{self, LabelSet, ParserOptions};
use crate::report::Report;
use crate::validate::{self, ValidationPolicy};

/// Everything one compile invocation produces.
#[derive(Debug, Clone, Serialize)]
pub struct CompileOutcome {
    pub report: Report,
    /// Present iff the report has zero errors. Never partially built.
    pub table: Option<RoutingTable>,
}

/// Run the full pipeline over one compile unit with default parser options.
pub fn compile_unit(
    units: &[LabelSet],
    catalog: &MiddlewareCatalog,
    policy: &ValidationPolicy,
) -> CompileOutcome {
    compile_unit_with_options(units, catalog, policy, &ParserOptions::default())
}

/// Run the full pipeline with explicit parser options.
pub fn compile_unit_with_options(
    units: &[LabelSet],
    catalog: &MiddlewareCatalog,
    policy: &ValidationPolicy,
    options: &ParserOptions,
) -> CompileOutcome {
    let mut diagnostics = Vec::new();

    let parsed: Vec<_> = units
        .iter()
        .enumerate()
        .map(|(index, labels)| label::parse_unit(index, labels, options, &mut diagnostics))
        .collect();

    let rule_graph = graph::build_graph(parsed, catalog, &mut diagnostics);
    diagnostics.extend(validate::validate(&rule_graph, catalog, policy));

    let report = Report::from_diagnostics(diagnostics);
    let table = report.is_success().then(|| compile::compile(&rule_graph));

    debug!(
        errors = report.error_count,
        warnings = report.warning_count,
        compiled = table.is_some(),
        "compile pass finished"
    );
    CompileOutcome { report, table }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> LabelSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn fatal_error_means_no_table_at_all() {
        let unit = labels(&[
            ("proxy.router.app.rule", "Host(`app.local`)"),
            ("proxy.router.app.entrypoint", "web"),
            ("proxy.router.app.service", "ghost"),
        ]);
        let outcome = compile_unit(
            &[unit],
            &MiddlewareCatalog::new(),
            &ValidationPolicy::default(),
        );
        assert!(!outcome.report.is_success());
        assert!(outcome.table.is_none());
    }

    #[test]
    fn warnings_do_not_block_compilation() {
        let unit = labels(&[
            ("proxy.router.app.rule", "Host(`app.local`)"),
            ("proxy.router.app.entrypoint", "web"),
            ("proxy.router.app.service", "svc"),
            ("proxy.service.svc.port", "3000"),
            ("proxy.service.unused.port", "4000"),
        ]);
        let outcome = compile_unit(
            &[unit],
            &MiddlewareCatalog::new(),
            &ValidationPolicy::default(),
        );
        assert!(outcome.report.is_success());
        assert_eq!(outcome.report.warning_count, 1);
        assert!(outcome.table.is_some());
    }
}
