//! Router completeness and conflict checks.
//!
//! # Responsibilities
//! - Required fields: rule, entry point, resolved service, service port
//! - Route collisions: identical (rule, entry point) pairs
//! - Policy: security headers on TLS-facing routers
//!
//! # Design Decisions
//! - One IncompleteRouter diagnostic per router, listing every missing
//!   field, rather than one per field
//! - One RouteCollision diagnostic per colliding group, not per pair
//! - Disabled routers (empty rule sentinel) are skipped entirely

use std::collections::BTreeMap;

use tracing::debug;

use crate::graph::builder::{RouterNode, RuleGraph};
use crate::graph::catalog::{MiddlewareCatalog, MiddlewareCategory};
use crate::report::{Diagnostic, DiagnosticCode};
use crate::validate::policy::ValidationPolicy;

/// Run all completeness and conflict checks over the graph.
pub fn validate(
    graph: &RuleGraph,
    catalog: &MiddlewareCatalog,
    policy: &ValidationPolicy,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for node in &graph.routers {
        if node.intent.is_disabled() {
            continue;
        }
        check_completeness(graph, node, &mut diagnostics);
        check_security_headers(node, catalog, policy, &mut diagnostics);
    }

    check_collisions(graph, &mut diagnostics);

    debug!(count = diagnostics.len(), "validator finished");
    diagnostics
}

fn check_completeness(graph: &RuleGraph, node: &RouterNode, diagnostics: &mut Vec<Diagnostic>) {
    let intent = &node.intent;
    let mut missing: Vec<&str> = Vec::new();

    if intent.rule_expression.is_none() {
        missing.push("rule");
    }
    if intent.entry_point.is_none() {
        missing.push("entrypoint");
    }
    if intent.service_ref.is_none() {
        missing.push("service");
    }
    // Port completeness only applies once the service itself resolved;
    // an unresolved reference was already reported by the builder.
    if let Some(service_name) = &node.resolved_service {
        let has_port = graph
            .service(service_name)
            .and_then(|s| s.load_balancer_port)
            .is_some();
        if !has_port {
            missing.push("service port");
        }
    }

    if !missing.is_empty() {
        diagnostics.push(Diagnostic::for_router(
            DiagnosticCode::IncompleteRouter,
            intent.router_name.clone(),
            format!("missing required fields: {}", missing.join(", ")),
        ));
    }
}

fn check_security_headers(
    node: &RouterNode,
    catalog: &MiddlewareCatalog,
    policy: &ValidationPolicy,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !policy.require_security_headers_on_tls {
        return;
    }

    let intent = &node.intent;
    let tls_facing = intent.tls_enabled
        || intent
            .entry_point
            .as_deref()
            .is_some_and(|ep| policy.is_tls_entry_point(ep));
    if !tls_facing {
        return;
    }

    let has_security_headers = intent
        .middleware_refs
        .iter()
        .any(|name| catalog.category(name) == Some(MiddlewareCategory::SecurityHeaders));
    if !has_security_headers {
        diagnostics.push(Diagnostic::for_router(
            DiagnosticCode::MissingSecurityHeaders,
            intent.router_name.clone(),
            "TLS-facing router has no security-headers middleware",
        ));
    }
}

fn check_collisions(graph: &RuleGraph, diagnostics: &mut Vec<Diagnostic>) {
    // Key: (rule, entry_point). Values hold router indices in
    // declaration order because graph.routers is declaration-ordered.
    let mut claims: BTreeMap<(&str, &str), Vec<usize>> = BTreeMap::new();

    for (index, node) in graph.routers.iter().enumerate() {
        if node.intent.is_disabled() {
            continue;
        }
        if let (Some(rule), Some(entry_point)) = (
            node.intent.rule_expression.as_deref(),
            node.intent.entry_point.as_deref(),
        ) {
            claims.entry((rule, entry_point)).or_default().push(index);
        }
    }

    let mut groups: Vec<Vec<usize>> = claims
        .into_values()
        .filter(|members| members.len() > 1)
        .collect();
    // Report in declaration order of each group's first router.
    groups.sort_by_key(|members| members[0]);

    for members in groups {
        let names: Vec<&str> = members
            .iter()
            .map(|&i| graph.routers[i].intent.router_name.as_str())
            .collect();
        let first = &graph.routers[members[0]].intent;
        diagnostics.push(Diagnostic::for_router(
            DiagnosticCode::RouteCollision,
            first.router_name.clone(),
            format!(
                "routers {} claim the same rule and entry point: ambiguous dispatch",
                names.join(", ")
            ),
        ));
    }
}
