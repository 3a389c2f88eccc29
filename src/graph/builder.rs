//! Reference resolution across parsed units.
//!
//! # Responsibilities
//! - Merge per-unit fragments into one graph, detecting duplicate names
//! - Resolve Router → Service edges (UnresolvedService on failure)
//! - Check Router → Middleware edges against the catalog
//! - Flag services no router references (OrphanService)
//!
//! # Design Decisions
//! - Diagnostics come out in declaration order: duplicates as
//!   encountered, then per-router resolution, then orphans
//! - Disabled routers are suppressed routes: no resolution errors,
//!   but a resolvable service edge still counts as a reference

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::graph::catalog::MiddlewareCatalog;
use crate::label::intent::{RoutingIntent, ServiceTarget};
use crate::label::parser::ParsedUnit;
use crate::report::{Diagnostic, DiagnosticCode};

/// One router with its resolved service edge.
#[derive(Debug, Clone)]
pub struct RouterNode {
    pub intent: RoutingIntent,
    /// Present when `service_ref` matched a declared service.
    pub resolved_service: Option<String>,
}

/// The merged reference graph for one compile unit.
#[derive(Debug, Clone, Default)]
pub struct RuleGraph {
    /// Routers in declaration order.
    pub routers: Vec<RouterNode>,
    /// Services in declaration order.
    services: Vec<ServiceTarget>,
    service_index: BTreeMap<String, usize>,
}

impl RuleGraph {
    pub fn service(&self, name: &str) -> Option<&ServiceTarget> {
        self.service_index
            .get(name)
            .map(|&index| &self.services[index])
    }

    pub fn services(&self) -> &[ServiceTarget] {
        &self.services
    }
}

/// Merge parsed units into a RuleGraph, resolving all references.
pub fn build_graph(
    units: Vec<ParsedUnit>,
    catalog: &MiddlewareCatalog,
    diagnostics: &mut Vec<Diagnostic>,
) -> RuleGraph {
    let mut graph = RuleGraph::default();
    let mut intents: Vec<RoutingIntent> = Vec::new();
    let mut router_names: BTreeSet<String> = BTreeSet::new();

    for unit in units {
        for service in unit.services {
            if graph.service_index.contains_key(&service.service_name) {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::DuplicateService,
                    format!(
                        "service '{}' is declared by more than one unit",
                        service.service_name
                    ),
                ));
                continue;
            }
            graph
                .service_index
                .insert(service.service_name.clone(), graph.services.len());
            graph.services.push(service);
        }

        for intent in unit.intents {
            if !router_names.insert(intent.router_name.clone()) {
                diagnostics.push(Diagnostic::for_router(
                    DiagnosticCode::DuplicateRouter,
                    intent.router_name.clone(),
                    "router is declared by more than one unit",
                ));
                continue;
            }
            intents.push(intent);
        }
    }

    let mut referenced: BTreeSet<String> = BTreeSet::new();

    for intent in intents {
        let resolved_service = match &intent.service_ref {
            Some(service_ref) if graph.service_index.contains_key(service_ref) => {
                referenced.insert(service_ref.clone());
                Some(service_ref.clone())
            }
            Some(service_ref) => {
                if !intent.is_disabled() {
                    diagnostics.push(Diagnostic::for_router(
                        DiagnosticCode::UnresolvedService,
                        intent.router_name.clone(),
                        format!("references service '{}' which no unit declares", service_ref),
                    ));
                }
                None
            }
            // Missing reference is an IncompleteRouter concern, reported
            // by the validator; not doubled up here.
            None => None,
        };

        if !intent.is_disabled() {
            for middleware in &intent.middleware_refs {
                if !catalog.contains(middleware) {
                    diagnostics.push(Diagnostic::for_router(
                        DiagnosticCode::UnknownMiddlewareReference,
                        intent.router_name.clone(),
                        format!("middleware '{}' is not in the catalog", middleware),
                    ));
                }
            }
        }

        graph.routers.push(RouterNode {
            intent,
            resolved_service,
        });
    }

    for service in &graph.services {
        if !referenced.contains(&service.service_name) {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::OrphanService,
                format!(
                    "service '{}' is declared but no router references it",
                    service.service_name
                ),
            ));
        }
    }

    debug!(
        routers = graph.routers.len(),
        services = graph.services.len(),
        "built rule graph"
    );
    graph
}
