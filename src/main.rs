//! Earnings Eval CLI entry point.

use clap::Parser;

use earnings_eval::cli::{Cli, Commands};
use earnings_eval::infrastructure::logging::LoggerImpl;
use earnings_eval::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => earnings_eval::cli::handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => earnings_eval::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Generate(args) => {
            earnings_eval::cli::commands::generate::execute(args, &config, cli.json).await
        }
        Commands::Run(args) => earnings_eval::cli::commands::run::execute(args, &config, cli.json).await,
        Commands::Compare(args) => {
            earnings_eval::cli::commands::compare::execute(args, &config, cli.json).await
        }
    };

    if let Err(err) = result {
        earnings_eval::cli::handle_error(err, cli.json);
    }
}
