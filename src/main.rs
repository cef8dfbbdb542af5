//! # path-size
//!
//! Print the disk usage of a file or directory.
//!
//! ## Usage
//!
//! ```bash
//! # Size of a file, or of a directory's immediate non-hidden files
//! path-size ./data
//!
//! # Recursive, including hidden entries, human-readable
//! path-size -r -a -H ./data
//!
//! # Machine-readable output
//! path-size -r --json ./data
//!
//! # Inspect the config file
//! path-size --config-show
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, ConfigCommand};
use colored::Colorize;
use path_size::{
    config::FileConfig,
    output::{JsonOutput, render_line},
    resolve_size,
};
use std::process::exit;

/// Entry point for the path-size application.
///
/// Errors from [`inner_main`] are printed to stderr and turned into a
/// non-zero exit status. Nothing is written to stdout on failure.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors for a missing path, from size resolution, and from
/// config actions or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    init_logging(args.verbose());

    if let Some(command) = args.config_command() {
        return handle_config_command(command);
    }

    let path = args.path()?;
    let config = load_config();
    let traversal = args.traversal_options(&config);
    let output = args.output_options(&config);

    log::debug!("Measuring {} with {traversal:?}", path.display());

    let size = resolve_size(path, traversal)?;

    if output.json {
        let document = JsonOutput::new(path, size, traversal, output.human);
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!("{}", render_line(path, size, output.human));
    }

    Ok(())
}

/// Initialize `env_logger`; `RUST_LOG` overrides the level chosen here.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

// ── Config actions ───────────────────────────────────────────────────

/// Default config file template written by `--config-init`.
const CONFIG_TEMPLATE: &str = r"# path-size configuration
# All values shown are their defaults. Uncomment and change as needed.
# Command-line flags always win over these values.

[traversal]
# Include entries whose name starts with '.' (same as -a/--all)
# all = false

# Descend into subdirectories (same as -r/--recursive)
# recursive = false

[output]
# Human-readable sizes such as 1.2MB (same as -H/--human)
# human = false

# Print a JSON object instead of '<size>\t<path>' (same as --json)
# json = false
";

/// Dispatch a `--config-*` action.
fn handle_config_command(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as TOML-like text, marking values that fall back to defaults.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>) -> String {
        val.map_or_else(|| "false  (default)".to_string(), |v| v.to_string())
    }

    format!(
        "\
[traversal]
all       = {all}
recursive = {recursive}

[output]
human     = {human}
json      = {json}",
        all = show_bool(config.traversal.all),
        recursive = show_bool(config.traversal.recursive),
        human = show_bool(config.output.human),
        json = show_bool(config.output.json),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config = FileConfig::parse(CONFIG_TEMPLATE).unwrap();

        assert!(config.traversal.all.is_none());
        assert!(config.traversal.recursive.is_none());
        assert!(config.output.human.is_none());
        assert!(config.output.json.is_none());
    }

    #[test]
    fn test_format_config_marks_defaults() {
        let config = FileConfig::parse("[traversal]\nrecursive = true\n").unwrap();
        let text = format_config(&config);

        assert!(text.contains("recursive = true\n"));
        assert!(text.contains("all       = false  (default)"));
        assert!(text.contains("json      = false  (default)"));
    }
}
