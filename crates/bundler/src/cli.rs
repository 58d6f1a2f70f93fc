//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Prism bundler - builds the distributable artifact set from registry.toml
#[derive(Parser)]
#[command(name = "prism-bundler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the registry and emit all bundles
    Build(BuildArgs),

    /// Validate the registry, references and feature table without emitting
    Check(CheckArgs),

    /// Remove the output directory
    Clean(BuildArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Package root containing registry.toml
    #[arg(long, default_value = ".")]
    pub package: PathBuf,

    /// Output directory (defaults to <package>/dist)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Package root containing registry.toml
    #[arg(long, default_value = ".")]
    pub package: PathBuf,
}
