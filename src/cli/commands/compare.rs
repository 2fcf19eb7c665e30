use std::collections::HashSet;

use anyhow::Result;

use crate::cli::output::output;
use crate::cli::CompareArgs;
use crate::domain::models::Config;

use super::run::run_strategies;

/// Output file of a strategy comparison, inside `paths.results_dir`
pub const COMPARE_FILE: &str = "strategy-compare.jsonl";

/// Strategy labels for a comparison: the CLI list when given, else the
/// configured defaults. Blank and repeated labels are dropped, so each
/// (item, strategy) pair is requested once.
pub fn resolve_strategies(requested: Vec<String>, config: &Config) -> Vec<Option<String>> {
    let labels = if requested.is_empty() {
        config.runner.default_strategies.clone()
    } else {
        requested
    };

    let mut seen = HashSet::new();
    labels
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .map(Some)
        .collect()
}

/// Replay the selected questions once per strategy.
pub async fn execute(args: CompareArgs, config: &Config, json: bool) -> Result<()> {
    let strategies = resolve_strategies(args.strategies, config);
    if strategies.is_empty() {
        anyhow::bail!("No strategies to compare");
    }

    let result = run_strategies(config, &args.selection.into(), &strategies, COMPARE_FILE).await?;
    output(&result, json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_used_when_none_requested() {
        let config = Config::default();
        let strategies = resolve_strategies(Vec::new(), &config);
        assert_eq!(
            strategies,
            vec![
                Some("baseline".to_string()),
                Some("dense-only".to_string()),
                Some("hybrid-0.6".to_string()),
            ]
        );
    }

    #[test]
    fn test_requested_strategies_keep_order() {
        let config = Config::default();
        let strategies = resolve_strategies(
            vec!["hybrid-0.6".to_string(), " ".to_string(), "baseline".to_string()],
            &config,
        );
        assert_eq!(
            strategies,
            vec![Some("hybrid-0.6".to_string()), Some("baseline".to_string())]
        );
    }

    #[test]
    fn test_repeated_strategies_collapse_to_first_occurrence() {
        let config = Config::default();
        let strategies = resolve_strategies(
            vec![
                "baseline".to_string(),
                "hybrid-0.6".to_string(),
                " baseline".to_string(),
                "hybrid-0.6".to_string(),
            ],
            &config,
        );
        assert_eq!(
            strategies,
            vec![Some("baseline".to_string()), Some("hybrid-0.6".to_string())]
        );
    }
}
