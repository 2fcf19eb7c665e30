//! Service layer: dataset construction, selection and the strategy runner.

pub mod dataset_builder;
pub mod selection;
pub mod strategy_runner;

pub use selection::Selection;
pub use strategy_runner::{plan, RunCase, RunSummary, StrategyRunner, StrategyTally};
