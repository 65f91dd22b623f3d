//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod reconcile;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconcile a sequence of overlapping segments into labeled pieces
    Reconcile(reconcile::ReconcileArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported output formats
    Formats,

    /// List supported segment encodings
    Encodings,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Reconcile(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) -> CliResult<()> {
        match self {
            ListCommands::Formats => {
                println!("text      One piece per line, tagged with its role");
                println!("json      JSON array of piece objects");
                println!("markdown  Merged document with overlaps emphasized");
            }
            ListCommands::Encodings => {
                println!("json   JSON array of strings");
                println!("lines  One segment per line");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reconcile::{OutputFormat, ReconcileArgs, SegmentFormat};

    #[test]
    fn test_commands_debug_format() {
        let reconcile_cmd = Commands::Reconcile(ReconcileArgs {
            input: vec!["segments.json".to_string()],
            segments: SegmentFormat::Json,
            output: None,
            format: OutputFormat::Text,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", reconcile_cmd);
        assert!(debug_str.contains("Reconcile"));
        assert!(debug_str.contains("segments.json"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_list_commands_execute() {
        assert!(ListCommands::Formats.execute().is_ok());
        assert!(ListCommands::Encodings.execute().is_ok());
    }
}
