//! Restitch CLI library
//!
//! This library provides the command-line interface around the restitch
//! overlap-reconciliation core: segment input parsing, the reconcile
//! command, and output formatting.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
