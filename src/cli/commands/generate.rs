use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::GenerateArgs;
use crate::domain::models::Config;
use crate::services::dataset_builder;

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub path: PathBuf,
    pub items: usize,
}

impl CommandOutput for GenerateOutput {
    fn to_human(&self) -> String {
        format!("Wrote {} items to {}", self.items, self.path.display())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "path": self.path,
            "items": self.items,
        })
    }
}

/// Rebuild the golden dataset and overwrite the artifact.
pub async fn execute(args: GenerateArgs, config: &Config, json: bool) -> Result<()> {
    let path = args.output.unwrap_or_else(|| config.paths.dataset.clone());
    let items = dataset_builder::generate(&path).context("Failed to generate golden dataset")?;

    output(&GenerateOutput { path, items }, json);
    Ok(())
}
