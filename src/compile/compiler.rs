//! Graph to routing-table compilation.
//!
//! # Responsibilities
//! - Discard disabled routers
//! - Sort by matcher specificity with a total, deterministic tie-break
//! - Expand middleware chains in declared order
//!
//! # Design Decisions
//! - The pipeline only invokes this after a zero-error validation, so
//!   incomplete routers cannot reach it; the filter below still guards
//!   instead of panicking
//! - Tie-break after specificity is router name, then declaration
//!   order, so the table is invariant under input-unit permutation

use std::cmp::Reverse;

use tracing::debug;

use crate::compile::specificity::{specificity, SpecificityKey};
use crate::compile::table::{RoutingTable, TableEntry};
use crate::graph::builder::RuleGraph;
use crate::label::intent::Origin;

/// Compile a validated graph into the final routing table.
pub fn compile(graph: &RuleGraph) -> RoutingTable {
    struct Candidate<'a> {
        key: SpecificityKey,
        rule: &'a str,
        entry_point: &'a str,
        service_name: &'a str,
        port: u16,
        middlewares: &'a [String],
        router_name: &'a str,
        origin: Origin,
    }

    let mut candidates: Vec<Candidate<'_>> = graph
        .routers
        .iter()
        .filter(|node| !node.intent.is_disabled())
        .filter_map(|node| {
            let intent = &node.intent;
            let rule = intent.rule_expression.as_deref()?;
            let entry_point = intent.entry_point.as_deref()?;
            let service_name = node.resolved_service.as_deref()?;
            let port = graph.service(service_name)?.load_balancer_port?;
            Some(Candidate {
                key: specificity(rule),
                rule,
                entry_point,
                service_name,
                port,
                middlewares: &intent.middleware_refs,
                router_name: &intent.router_name,
                origin: intent.origin,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        (
            Reverse(a.key.path_len),
            Reverse(a.key.host_labels),
            a.router_name,
            a.origin,
        )
            .cmp(&(
                Reverse(b.key.path_len),
                Reverse(b.key.host_labels),
                b.router_name,
                b.origin,
            ))
    });

    let entries = candidates
        .into_iter()
        .enumerate()
        .map(|(index, c)| TableEntry {
            priority_rank: index + 1,
            entry_point: c.entry_point.to_string(),
            rule_expression: c.rule.to_string(),
            service_name: c.service_name.to_string(),
            port: c.port,
            middlewares: c.middlewares.to_vec(),
        })
        .collect::<Vec<_>>();

    debug!(entries = entries.len(), "compiled routing table");
    RoutingTable::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::build_graph;
    use crate::graph::catalog::MiddlewareCatalog;
    use crate::label::parser::{parse_unit, ParserOptions};
    use crate::label::LabelSet;

    fn graph_from(pairs: &[(&str, &str)]) -> RuleGraph {
        let set: LabelSet = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut diagnostics = Vec::new();
        let unit = parse_unit(0, &set, &ParserOptions::default(), &mut diagnostics);
        let graph = build_graph(vec![unit], &MiddlewareCatalog::new(), &mut diagnostics);
        assert!(diagnostics.iter().all(|d| !d.is_error()), "{:?}", diagnostics);
        graph
    }

    #[test]
    fn longer_path_prefix_sorts_first() {
        let graph = graph_from(&[
            ("proxy.router.plain.rule", "Host(`x`)"),
            ("proxy.router.plain.entrypoint", "web"),
            ("proxy.router.plain.service", "svc"),
            ("proxy.router.api.rule", "Host(`x`) && PathPrefix(`/api`)"),
            ("proxy.router.api.entrypoint", "web"),
            ("proxy.router.api.service", "svc"),
            ("proxy.service.svc.port", "3000"),
        ]);
        let table = compile(&graph);

        assert_eq!(table.len(), 2);
        assert!(table.entries()[0].rule_expression.contains("PathPrefix"));
        assert_eq!(table.entries()[0].priority_rank, 1);
        assert_eq!(table.entries()[1].priority_rank, 2);
    }

    #[test]
    fn disabled_routers_are_discarded() {
        let graph = graph_from(&[
            ("proxy.router.app.rule", "Host(`x`)"),
            ("proxy.router.app.entrypoint", "web"),
            ("proxy.router.app.service", "svc"),
            ("proxy.router.dev.rule", ""),
            ("proxy.service.svc.port", "3000"),
        ]);
        let table = compile(&graph);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn deeper_host_breaks_path_ties() {
        let graph = graph_from(&[
            ("proxy.router.wide.rule", "Host(`example.com`)"),
            ("proxy.router.wide.entrypoint", "web"),
            ("proxy.router.wide.service", "svc"),
            ("proxy.router.deep.rule", "Host(`api.example.com`)"),
            ("proxy.router.deep.entrypoint", "web"),
            ("proxy.router.deep.service", "svc"),
            ("proxy.service.svc.port", "3000"),
        ]);
        let table = compile(&graph);
        assert!(table.entries()[0].rule_expression.contains("api.example.com"));
    }
}
