//! Command-line interface definition and argument parsing.
//!
//! This module defines the command-line arguments using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI flags can override (layered config).

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::{ArgGroup, Parser};

use path_size::config::{FileConfig, OutputOptions, TraversalOptions};

/// Config file actions selected by the `--config-*` flags.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

// Command-line interface. Every positional value is a path to measure, so
// config file management lives behind mutually exclusive flags instead of
// subcommands. Helper methods take the loaded `FileConfig` so file values act
// as defaults for flags that were not given.
#[derive(Parser, Debug)]
#[command(name = "path-size")]
#[command(
    about = "Print size of a file or directory; supports -r (recursive), -H (human-readable), -a (include hidden)"
)]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(group(ArgGroup::new("config_action").multiple(false)))]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// File or directory to measure
    path: Option<PathBuf>,

    /// Recursive size of directories
    ///
    /// Without this flag, subdirectories contribute nothing to the total.
    #[arg(short = 'r', long, overrides_with = "no_recursive")]
    recursive: bool,

    /// Do not descend into subdirectories, even if the config file enables it
    #[arg(long, overrides_with = "recursive")]
    no_recursive: bool,

    /// Human-readable sizes (auto-select unit)
    ///
    /// Scales by powers of 1024 up to EB and prints one decimal digit,
    /// e.g. `1.2MB`.
    #[arg(short = 'H', long, overrides_with = "no_human")]
    human: bool,

    /// Print raw byte counts, even if the config file enables --human
    #[arg(long, overrides_with = "human")]
    no_human: bool,

    /// Include hidden files and directories
    ///
    /// Entries whose name starts with `.` are skipped unless this is set.
    #[arg(short = 'a', long, overrides_with = "no_all")]
    all: bool,

    /// Skip hidden entries, even if the config file enables --all
    #[arg(long, overrides_with = "all")]
    no_all: bool,

    /// Output the result as a JSON object
    #[arg(long, overrides_with = "no_json")]
    json: bool,

    /// Print the tab-separated line, even if the config file enables --json
    #[arg(long, overrides_with = "json")]
    no_json: bool,

    /// Log traversal details to stderr
    ///
    /// Equivalent to `RUST_LOG=debug`; an explicit `RUST_LOG` takes priority.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print the effective configuration (file values + defaults for unset keys)
    #[arg(long, group = "config_action")]
    config_show: bool,

    /// Write a default config.toml if none exists yet
    #[arg(long, group = "config_action")]
    config_init: bool,

    /// Print the path to the config file
    #[arg(long, group = "config_action")]
    config_path: bool,
}

/// Resolve a `--flag` / `--no-flag` pair against a config default.
const fn layered(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

impl Cli {
    /// The config file action requested, if any.
    #[must_use]
    pub const fn config_command(&self) -> Option<ConfigCommand> {
        if self.config_show {
            Some(ConfigCommand::Show)
        } else if self.config_init {
            Some(ConfigCommand::Init)
        } else if self.config_path {
            Some(ConfigCommand::Path)
        } else {
            None
        }
    }

    /// The path to measure.
    ///
    /// # Errors
    ///
    /// Fails with `path is required` when no positional argument was given.
    pub fn path(&self) -> Result<&Path> {
        self.path
            .as_deref()
            .ok_or_else(|| anyhow!("path is required"))
    }

    /// Whether `--verbose` was passed.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Extract traversal options from CLI flags and config file.
    ///
    /// `--flag` or `--no-flag` on the command line wins (the last one given
    /// if both appear); otherwise the config file value, otherwise `false`.
    #[must_use]
    pub fn traversal_options(&self, config: &FileConfig) -> TraversalOptions {
        let defaults = config.traversal_options();

        TraversalOptions {
            include_hidden: layered(self.all, self.no_all, defaults.include_hidden),
            recursive: layered(self.recursive, self.no_recursive, defaults.recursive),
        }
    }

    /// Extract output options from CLI flags and config file.
    #[must_use]
    pub fn output_options(&self, config: &FileConfig) -> OutputOptions {
        let defaults = config.output_options();

        OutputOptions {
            human: layered(self.human, self.no_human, defaults.human),
            json: layered(self.json, self.no_json, defaults.json),
        }
    }
}
