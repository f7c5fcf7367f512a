use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

#[derive(Parser)]
#[command(
    name = "stencil",
    about = "Stencil — compare site templates and pull their improvements into cloned sites",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides the config file).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML file with default settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show what changed between two config trees
    Diff(DiffArgs),
    /// Merge a template's additions into a user's config tree
    Apply(ApplyArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// The user's current tree (JSON)
    pub old: PathBuf,
    /// The newer template tree (JSON)
    pub new: PathBuf,
    #[arg(long, default_value = "current")]
    pub from: String,
    #[arg(long, default_value = "latest")]
    pub to: String,
}

#[derive(Args)]
pub struct ApplyArgs {
    /// The user's current tree (JSON)
    pub user: PathBuf,
    /// The newer template tree (JSON)
    pub template: PathBuf,
    /// Write the merged tree here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Do not flag merged pages and sections as new
    #[arg(long)]
    pub no_mark: bool,
}
