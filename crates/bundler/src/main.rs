//! Prism bundler CLI.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prism_bundler::{check_features, validate_references, Pipeline};
use prism_registry::{ExportGraph, REGISTRY_FILE};

mod cli;

use cli::{BuildArgs, CheckArgs, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("prism_bundler=debug")
    } else {
        EnvFilter::new("prism_bundler=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Build(args) => build(args),
        Commands::Check(args) => check(args),
        Commands::Clean(args) => clean(args),
    }
}

fn load_graph(package: &std::path::Path) -> Result<ExportGraph> {
    let manifest = package.join(REGISTRY_FILE);
    ExportGraph::load(&manifest).with_context(|| format!("loading {}", manifest.display()))
}

fn build(args: BuildArgs) -> Result<()> {
    let graph = load_graph(&args.package)?;
    check_features(&graph, &args.package).context("feature table check")?;

    let out = args.out.unwrap_or_else(|| args.package.join("dist"));
    let report = Pipeline::new(&graph, &args.package, &out)
        .run()
        .context("pipeline")?;
    println!(
        "emitted {} files to {} (fingerprint {})",
        report.files.len(),
        out.display(),
        &report.fingerprint[..16]
    );
    Ok(())
}

fn check(args: CheckArgs) -> Result<()> {
    let graph = load_graph(&args.package)?;
    validate_references(&graph, &args.package).context("reference check")?;
    check_features(&graph, &args.package).context("feature table check")?;
    println!(
        "ok: {} modules, {} categories",
        graph.modules().count(),
        graph.categories().count()
    );
    Ok(())
}

fn clean(args: BuildArgs) -> Result<()> {
    let out = args.out.unwrap_or_else(|| args.package.join("dist"));
    if out.exists() {
        std::fs::remove_dir_all(&out).with_context(|| format!("removing {}", out.display()))?;
        println!("removed {}", out.display());
    }
    Ok(())
}
