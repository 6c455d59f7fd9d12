//! Visual Test Runner
//!
//! Command-line tool for running visual regression tests for fixpaint.
//!
//! Usage:
//!   fixpaint-visual-tests                      # Run all tests
//!   fixpaint-visual-tests --filter dash        # Run tests matching "dash"
//!   fixpaint-visual-tests --list               # List all tests
//!   fixpaint-visual-tests --config suite.toml  # Use a harness config file

use anyhow::Result;
use clap::Parser;
use fixpaint_test_suite::{tests, TestHarness, TestHarnessConfig, TestRunner};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fixpaint-visual-tests")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Visual regression tests for the fixpaint rasterizer", long_about = None)]
struct Cli {
    /// List all tests without running them
    #[arg(long)]
    list: bool,

    /// Only run tests whose name or category contains this pattern
    #[arg(long)]
    filter: Option<String>,

    /// Harness configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if cli.list {
        println!("Available test suites:");
        for suite in tests::all_suites() {
            println!("\n  {}:", suite.name);
            for case in &suite.cases {
                println!("    - {}", case.name);
            }
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => TestHarnessConfig::load(path)?,
        None => TestHarnessConfig::default(),
    };

    println!("╔══════════════════════════════════════════╗");
    println!("║    FIXPAINT VISUAL REGRESSION TESTS      ║");
    println!("╚══════════════════════════════════════════╝\n");

    let mut runner = TestRunner::with_harness(TestHarness::with_config(config)?);
    for suite in tests::all_suites() {
        runner.add_suite(suite);
    }

    if let Some(ref pattern) = cli.filter {
        println!("Running tests matching: {}\n", pattern);
        runner.filter(pattern);
    }

    let result = runner.run();
    result.print_summary();

    if result.all_passed() {
        println!("\nAll tests passed!");
        Ok(())
    } else {
        std::process::exit(1);
    }
}
