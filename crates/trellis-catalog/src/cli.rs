//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputMode;

/// Browse, resolve and check component variant tables.
#[derive(Debug, Parser)]
#[command(name = "trellis-catalog", version, about, long_about = None)]
pub struct Cli {
    /// Sheet file or directory adding components (repeatable)
    #[arg(long = "sheet", value_name = "PATH", global = true)]
    pub sheets: Vec<PathBuf>,

    /// Stories file replacing the built-in stories
    #[arg(long, value_name = "PATH", global = true)]
    pub stories: Option<PathBuf>,

    /// Output mode
    #[arg(long, value_enum, value_name = "MODE", default_value_t = OutputMode::Auto, global = true)]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List components with their axes, options and defaults
    List,

    /// Show each story with its resolved class string
    Stories {
        /// Only show stories of this component
        component: Option<String>,
    },

    /// Resolve one selection of a component
    Resolve {
        component: String,

        /// Option choices
        #[arg(value_name = "AXIS=OPTION", value_parser = parse_choice)]
        choices: Vec<(String, String)>,

        /// Extra classes appended after the resolved ones
        #[arg(long, value_name = "CLASSES")]
        class: Option<String>,

        /// Print the ordered tokens without merging
        #[arg(long)]
        raw: bool,
    },

    /// Resolve every combination of a component's options
    Matrix { component: String },

    /// Validate sheets and stories; fails if any story is invalid
    Check,
}

fn parse_choice(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((axis, option)) if !axis.is_empty() => Ok((axis.to_string(), option.to_string())),
        _ => Err(format!("expected AXIS=OPTION, got '{arg}'")),
    }
}
