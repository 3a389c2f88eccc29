//! Routeforge CLI: validate and compile label-driven routing rules.
//!
//! A thin adapter over the library pipeline: loads label files and the
//! middleware catalog, runs one compile pass, prints the report and,
//! on success, the routing table.
//!
//! Exit codes: 0 success (warnings allowed), 1 validation errors,
//! 2 input could not be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use routeforge::input::{load_catalog, load_label_set};
use routeforge::{compile_unit, MiddlewareCatalog, ValidationPolicy};

#[derive(Parser)]
#[command(name = "routeforge")]
#[command(about = "Compile and validate label-driven routing rules", long_about = None)]
struct Cli {
    /// Label files, one per backend unit (TOML or JSON).
    #[arg(required = true)]
    units: Vec<PathBuf>,

    /// Middleware catalog file: map of name to category.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable the security-headers-on-TLS policy check.
    #[arg(long)]
    no_security_headers_check: bool,

    /// Additional entry point names that denote encrypted listeners.
    #[arg(long = "tls-entry-point")]
    tls_entry_points: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "routeforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                eprintln!("{}", error);
                return ExitCode::from(2);
            }
        },
        None => MiddlewareCatalog::new(),
    };

    let mut units = Vec::with_capacity(cli.units.len());
    for path in &cli.units {
        match load_label_set(path) {
            Ok(labels) => units.push(labels),
            Err(error) => {
                eprintln!("{}", error);
                return ExitCode::from(2);
            }
        }
    }

    let mut policy = ValidationPolicy::default();
    if cli.no_security_headers_check {
        policy.require_security_headers_on_tls = false;
    }
    policy.tls_entry_points.extend(cli.tls_entry_points);

    tracing::info!(
        units = units.len(),
        middlewares = catalog.len(),
        "running compile pass"
    );

    let outcome = compile_unit(&units, &catalog, &policy);

    match cli.format {
        OutputFormat::Text => {
            println!("{}", outcome.report);
            if let Some(table) = &outcome.table {
                if !table.is_empty() {
                    println!("{}", table);
                }
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("failed to serialize outcome: {}", error);
                return ExitCode::from(2);
            }
        },
    }

    if outcome.report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
