use clap::Parser;
use earnings_eval::cli::{Cli, Commands};
use earnings_eval::domain::models::Category;
use earnings_eval::services::Selection;

#[test]
fn test_parse_compare_defaults() {
    let cli = Cli::try_parse_from(["earnings-eval", "compare"]).unwrap();

    match cli.command {
        Commands::Compare(args) => {
            assert!(args.strategies.is_empty());
            assert!(!args.selection.smoke);
            assert!(args.selection.limit.is_none());
            assert!(args.selection.categories.is_empty());
        }
        _ => panic!("Wrong command"),
    }
    assert!(!cli.json);
    assert!(cli.config.is_none());
}

#[test]
fn test_parse_compare_with_strategies_and_smoke() {
    let cli = Cli::try_parse_from([
        "earnings-eval",
        "compare",
        "--smoke",
        "--strategies",
        "baseline",
        "hybrid-0.6",
    ])
    .unwrap();

    match cli.command {
        Commands::Compare(args) => {
            assert!(args.selection.smoke);
            assert_eq!(args.strategies, vec!["baseline", "hybrid-0.6"]);
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_run_with_categories_and_limit() {
    let cli = Cli::try_parse_from([
        "earnings-eval",
        "run",
        "--categories",
        "qualitative",
        "hybrid",
        "--limit",
        "3",
    ])
    .unwrap();

    match cli.command {
        Commands::Run(args) => {
            let selection: Selection = args.selection.into();
            assert_eq!(
                selection.categories,
                vec![Category::Qualitative, Category::Hybrid]
            );
            assert_eq!(selection.limit, Some(3));
            assert_eq!(selection.effective_limit(), Some(3));
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_limit_wins_over_smoke() {
    let cli =
        Cli::try_parse_from(["earnings-eval", "run", "--smoke", "--limit", "8"]).unwrap();

    match cli.command {
        Commands::Run(args) => {
            let selection: Selection = args.selection.into();
            assert_eq!(selection.effective_limit(), Some(8));
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_zero_limit_rejected() {
    assert!(Cli::try_parse_from(["earnings-eval", "run", "--limit", "0"]).is_err());
    assert!(
        Cli::try_parse_from(["earnings-eval", "compare", "--smoke", "--limit", "0"]).is_err()
    );
}

#[test]
fn test_unknown_category_rejected() {
    let result = Cli::try_parse_from(["earnings-eval", "run", "--categories", "sentiment"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "earnings-eval",
        "generate",
        "--json",
        "--config",
        "eval.ci.yaml",
        "--output",
        "/tmp/golden-qa.json",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config.unwrap().to_str(), Some("eval.ci.yaml"));
    match cli.command {
        Commands::Generate(args) => {
            assert_eq!(args.output.unwrap().to_str(), Some("/tmp/golden-qa.json"));
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["earnings-eval"]).is_err());
}
