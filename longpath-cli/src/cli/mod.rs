//! Command-line interface orchestration for the longpath estimator.
//!
//! Offers an `estimate` command that loads a textual edge list and runs one
//! of the three estimation strategies over its largest connected component,
//! and a `generate` command that produces calibrated random geometric test
//! instances.

mod commands;

pub use commands::{
    Cli, CliError, Command, EstimateCommand, EstimateSummary, ExecutionSummary, FormatArg,
    GenerateCommand, GenerateSummary, OutputFormatArg, StrategyArg, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
