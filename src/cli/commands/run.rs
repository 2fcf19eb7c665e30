use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::output::{format_summary_table, output, CommandOutput, ConsoleProgress};
use crate::cli::RunArgs;
use crate::domain::models::Config;
use crate::infrastructure::dataset::load_dataset;
use crate::infrastructure::http::HttpChatService;
use crate::infrastructure::sink::JsonlSink;
use crate::services::{plan, RunSummary, Selection, StrategyRunner};

/// Output file of a single-strategy run, inside `paths.results_dir`
pub const RUN_FILE: &str = "ragas-run.jsonl";

#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub output: PathBuf,
    pub summary: RunSummary,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        format!(
            "{}\nSaved results to {}",
            format_summary_table(&self.summary),
            self.output.display()
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Replay the selected questions without a strategy label.
pub async fn execute(args: RunArgs, config: &Config, json: bool) -> Result<()> {
    let result = run_strategies(config, &args.selection.into(), &[None], RUN_FILE).await?;
    output(&result, json);
    Ok(())
}

/// Load the dataset, select items, and replay them once per strategy into
/// `results_dir/file_name`.
///
/// A missing or malformed dataset, or a chat client that cannot be built,
/// aborts before the output file is touched or any request is sent.
pub async fn run_strategies(
    config: &Config,
    selection: &Selection,
    strategies: &[Option<String>],
    file_name: &str,
) -> Result<RunOutput> {
    let items = load_dataset(&config.paths.dataset).context("Cannot start run")?;
    let selected = selection.apply(&items);
    let cases = plan(selected.iter().copied(), strategies);
    info!(
        items = selected.len(),
        strategies = strategies.len(),
        cases = cases.len(),
        "run planned"
    );

    let service = HttpChatService::new(&config.service)?;
    info!(url = service.url(), "targeting chat service");

    let output_path = config.paths.results_dir.join(file_name);
    let mut sink = JsonlSink::create(&output_path).await?;
    let runner = StrategyRunner::new(Arc::new(service), config.runner.concurrency);

    let progress = ConsoleProgress::new(cases.len());
    let summary = runner.run(cases, &mut sink, &progress).await;
    progress.finish();

    Ok(RunOutput {
        output: output_path,
        summary: summary?,
    })
}
