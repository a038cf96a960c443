//! Dylext CLI - command-line front end for the dylex Dylan classifier.
//!
//! This is the main entry point for the dylext CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{
    run_highlight, run_init_config, run_modes, HighlightArgs, InitConfigArgs, ModesArgs,
};
use config::Config;
use error::{DylextError, Result};

/// Dylext - syntax classification for Dylan source files
///
/// Dylext runs the dylex line-at-a-time classifier over Dylan files and
/// prints the resulting tokens as text, JSON, or colored source.
#[derive(Parser, Debug)]
#[command(name = "dylext")]
#[command(author = "Dylex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Syntax classification for Dylan source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "DYLEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DYLEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "DYLEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dylext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify Dylan source files
    ///
    /// Runs the classifier over each file and prints its tokens. Use `-` to
    /// read from standard input.
    Highlight(HighlightCommand),

    /// List registered syntax modes
    Modes(ModesCommand),

    /// Write a default configuration file
    InitConfig(InitConfigCommand),
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also list uncolored tokens (whitespace, punctuation)
    #[arg(short, long)]
    all: bool,
}

/// Arguments for the modes subcommand.
#[derive(Parser, Debug)]
struct ModesCommand {
    /// Print the registry as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the init-config subcommand.
#[derive(Parser, Debug)]
struct InitConfigCommand {
    /// File or directory to write (default: ./dylext.toml)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the dylext CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    init_logging(verbose_enabled(cli.verbose, &config), cli.no_color)?;

    execute_command(cli.command, config, cli.no_color)
}

/// Debug logging is on when either the flag or the config file asks for it.
///
/// A config that failed to load counts as not verbose; the error surfaces
/// later from the command that needs the config.
fn verbose_enabled(flag: bool, config: &Result<Config>) -> bool {
    flag || config.as_ref().is_ok_and(|config| config.verbose)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that command output on stdout stays machine
/// readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DylextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
///
/// Only `highlight` requires the configuration, so a broken config file does
/// not stop `modes` or `init-config` from running.
fn execute_command(command: Commands, config: Result<Config>, no_color: bool) -> Result<()> {
    match command {
        Commands::Highlight(args) => execute_highlight(args, config?, no_color),
        Commands::Modes(args) => run_modes(ModesArgs { json: args.json }),
        Commands::InitConfig(args) => execute_init_config(args),
    }
}

/// Execute the highlight command.
fn execute_highlight(args: HighlightCommand, config: Config, no_color: bool) -> Result<()> {
    let highlight_args = HighlightArgs {
        files: args.files,
        format: args.format,
        all: args.all,
        no_color,
        config,
    };
    run_highlight(highlight_args)
}

/// Execute the init-config command.
fn execute_init_config(args: InitConfigCommand) -> Result<()> {
    let written = run_init_config(InitConfigArgs {
        path: args.path,
        force: args.force,
    })?;
    println!("{}", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_highlight() {
        let cli = Cli::parse_from(["dylext", "highlight", "a.dylan"]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("a.dylan")]);
            assert_eq!(args.format, None);
            assert!(!args.all);
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_parse_highlight_requires_files() {
        assert!(Cli::try_parse_from(["dylext", "highlight"]).is_err());
    }

    #[test]
    fn test_cli_parse_highlight_with_format() {
        let cli = Cli::parse_from(["dylext", "highlight", "a.dylan", "--format", "json"]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_parse_highlight_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["dylext", "highlight", "a.dylan", "-F", "html"]).is_err());
    }

    #[test]
    fn test_cli_parse_highlight_many_files_and_all() {
        let cli = Cli::parse_from(["dylext", "highlight", "-a", "a.dylan", "-"]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert!(args.all);
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_parse_modes() {
        let cli = Cli::parse_from(["dylext", "modes"]);
        assert!(matches!(cli.command, Commands::Modes(ModesCommand { json: false })));
    }

    #[test]
    fn test_cli_parse_init_config() {
        let cli = Cli::parse_from(["dylext", "init-config", "--path", "/tmp/x", "--force"]);
        if let Commands::InitConfig(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/x")));
            assert!(args.force);
        } else {
            panic!("Expected InitConfig command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["dylext", "--verbose", "modes"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["dylext", "modes", "--config", "/path/to/dylext.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/dylext.toml")));
    }

    #[test]
    fn test_verbose_from_flag_or_config() {
        let quiet = Config::default();
        let loud = Config {
            verbose: true,
            ..Config::default()
        };
        let broken: Result<Config> = Err(DylextError::Config("bad".to_string()));

        assert!(!verbose_enabled(false, &Ok(quiet.clone())));
        assert!(verbose_enabled(true, &Ok(quiet)));
        assert!(verbose_enabled(false, &Ok(loud)));
        assert!(!verbose_enabled(false, &broken));
        assert!(verbose_enabled(true, &broken));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["dylext", "--no-color", "modes"]);
        assert!(cli.no_color);
    }
}
