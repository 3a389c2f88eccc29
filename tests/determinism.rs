//! Idempotence and ordering-determinism guarantees.

use routeforge::{compile_unit, LabelSet, MiddlewareCatalog, ValidationPolicy};

fn labels(pairs: &[(&str, &str)]) -> LabelSet {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn fixture_units() -> Vec<LabelSet> {
    vec![
        labels(&[
            ("proxy.router.api.rule", "Host(app.local) && PathPrefix(/api/v1)"),
            ("proxy.router.api.entrypoint", "web"),
            ("proxy.router.api.service", "api-svc"),
            ("proxy.service.api-svc.port", "3000"),
        ]),
        labels(&[
            ("proxy.router.site.rule", "Host(app.local)"),
            ("proxy.router.site.entrypoint", "web"),
            ("proxy.router.site.service", "site-svc"),
            ("proxy.service.site-svc.port", "8080"),
        ]),
        labels(&[
            ("proxy.router.admin.rule", "Host(admin.app.local)"),
            ("proxy.router.admin.entrypoint", "web"),
            ("proxy.router.admin.service", "admin-svc"),
            ("proxy.service.admin-svc.port", "9000"),
        ]),
    ]
}

#[test]
fn compiling_twice_yields_byte_identical_tables() {
    let units = fixture_units();
    let catalog = MiddlewareCatalog::new();
    let policy = ValidationPolicy::default();

    let first = compile_unit(&units, &catalog, &policy);
    let second = compile_unit(&units, &catalog, &policy);

    let table_a = first.table.expect("table must be produced");
    let table_b = second.table.expect("table must be produced");
    assert_eq!(table_a, table_b);
    assert_eq!(table_a.render(), table_b.render());
}

#[test]
fn unit_order_permutation_yields_the_same_table() {
    let catalog = MiddlewareCatalog::new();
    let policy = ValidationPolicy::default();

    let units = fixture_units();
    let baseline = compile_unit(&units, &catalog, &policy)
        .table
        .expect("table must be produced");

    let mut reversed = fixture_units();
    reversed.reverse();
    let permuted = compile_unit(&reversed, &catalog, &policy)
        .table
        .expect("table must be produced");

    assert_eq!(baseline.render(), permuted.render());
}

#[test]
fn rank_order_is_specificity_then_name() {
    let units = fixture_units();
    let outcome = compile_unit(&units, &MiddlewareCatalog::new(), &ValidationPolicy::default());
    let table = outcome.table.expect("table must be produced");

    let rules: Vec<&str> = table
        .entries()
        .iter()
        .map(|e| e.rule_expression.as_str())
        .collect();
    // Longest path prefix first, then deeper host, then bare host.
    assert_eq!(
        rules,
        vec![
            "Host(app.local) && PathPrefix(/api/v1)",
            "Host(admin.app.local)",
            "Host(app.local)",
        ]
    );
    let ranks: Vec<usize> = table.entries().iter().map(|e| e.priority_rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn duplicate_detection_is_deterministic_under_permutation() {
    let first = labels(&[
        ("proxy.router.app.rule", "Host(a)"),
        ("proxy.router.app.entrypoint", "web"),
        ("proxy.router.app.service", "svc"),
        ("proxy.service.svc.port", "3000"),
    ]);
    let second = labels(&[
        ("proxy.router.app.rule", "Host(b)"),
        ("proxy.router.app.entrypoint", "web"),
        ("proxy.router.app.service", "svc"),
    ]);
    let catalog = MiddlewareCatalog::new();
    let policy = ValidationPolicy::default();

    let forward = compile_unit(&[first.clone(), second.clone()], &catalog, &policy);
    let backward = compile_unit(&[second, first], &catalog, &policy);

    // Both orders fail with the same code set; the surviving declaration
    // differs, but the verdict never does.
    assert!(!forward.report.is_success());
    assert!(!backward.report.is_success());
    let codes = |r: &routeforge::Report| {
        r.diagnostics.iter().map(|d| d.code).collect::<Vec<_>>()
    };
    assert_eq!(codes(&forward.report), codes(&backward.report));
}
