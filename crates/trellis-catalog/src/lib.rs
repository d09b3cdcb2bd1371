//! Story catalog for trellis components.
//!
//! The catalog is the text-mode review tool for component variant tables. It
//! lists the available components, resolves stories (named selections) to
//! their class strings, enumerates every option combination of a component,
//! and checks that every story still resolves.
//!
//! # Commands
//!
//! - `list`: components with their axes, options and defaults
//! - `stories [COMPONENT]`: each story with its merged class string
//! - `resolve COMPONENT [AXIS=OPTION]... [--class CLASSES] [--raw]`
//! - `matrix COMPONENT`: every combination of options
//! - `check`: exits with status 1 if any story is invalid
//!
//! Components come from the built-in tables plus any `--sheet` files or
//! directories. Stories come from the built-in stories file unless
//! `--stories` names another.

pub mod catalog;
pub mod cli;
mod commands;
pub mod logging;
pub mod output;
pub mod render;
pub mod stories;

use std::ffi::OsString;

use clap::Parser;

pub use catalog::Catalog;
pub use cli::{Cli, Command};
pub use commands::Report;
pub use output::OutputMode;
pub use stories::{Story, StoryBook};

use render::{default_theme, Renderer};

/// Runs a parsed command line.
pub fn run(cli: &Cli) -> anyhow::Result<Report> {
    let catalog = Catalog::load(&cli.sheets)?;
    let renderer = Renderer::new(default_theme(), cli.output)?;

    match &cli.command {
        Command::List => commands::list(&catalog, &renderer),
        Command::Stories { component } => {
            let book = load_stories(cli)?;
            commands::stories(&catalog, &book, component.as_deref(), &renderer)
        }
        Command::Resolve {
            component,
            choices,
            class,
            raw,
        } => commands::resolve(&catalog, component, choices, class.as_deref(), *raw, &renderer),
        Command::Matrix { component } => commands::matrix(&catalog, component, &renderer),
        Command::Check => {
            let book = load_stories(cli)?;
            commands::check(&catalog, &book, &renderer)
        }
    }
}

/// Parses `args` (including the program name) and runs them.
pub fn run_from<I, T>(args: I) -> anyhow::Result<Report>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    run(&cli)
}

fn load_stories(cli: &Cli) -> anyhow::Result<StoryBook> {
    match &cli.stories {
        Some(path) => StoryBook::from_path(path),
        None => StoryBook::builtin(),
    }
}
