//! Command-line interface.

pub mod commands;
pub mod output;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::models::Category;
use crate::services::Selection;

/// Offline evaluation harness for the earnings chat service
#[derive(Parser, Debug)]
#[command(name = "earnings-eval", version, about)]
pub struct Cli {
    /// YAML config file (defaults to ./eval.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the golden QA dataset (overwrites the artifact)
    Generate(GenerateArgs),
    /// Replay the dataset against the chat service without a strategy label
    Run(RunArgs),
    /// Replay the dataset once per retrieval strategy
    Compare(CompareArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Write the dataset here instead of the configured path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Dataset slice flags shared by `run` and `compare`
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Run only the first 5 questions
    #[arg(long)]
    pub smoke: bool,

    /// Limit to the first N questions, N >= 1 (takes precedence over --smoke)
    #[arg(long, value_name = "N")]
    pub limit: Option<NonZeroUsize>,

    /// Only questions in these categories (applied before the limit)
    #[arg(long, num_args = 1.., value_name = "CATEGORY")]
    pub categories: Vec<Category>,
}

impl From<SelectionArgs> for Selection {
    fn from(args: SelectionArgs) -> Self {
        Self {
            categories: args.categories,
            limit: args.limit.map(NonZeroUsize::get),
            smoke: args.smoke,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CompareArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Strategies to compare (defaults to runner.default_strategies)
    #[arg(long, num_args = 1.., value_name = "STRATEGY")]
    pub strategies: Vec<String>,
}

/// Report a fatal error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        println!(
            "{}",
            serde_json::json!({ "error": err.to_string(), "causes": chain })
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
