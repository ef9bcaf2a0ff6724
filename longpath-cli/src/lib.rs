//! Command-line interface library for the longpath estimator.

pub mod cli;
pub mod logging;
