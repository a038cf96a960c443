//! Init-config command implementation.
//!
//! Writes a `dylext.toml` holding the default settings, ready to be edited.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::commands::common::error_messages;
use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{DylextError, Result};

/// Arguments for the init-config command.
#[derive(Debug, Clone, Default)]
pub struct InitConfigArgs {
    /// File or directory to write to (default: `./dylext.toml`).
    pub path: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
}

/// Init-config command handler.
pub struct InitConfigCommand {
    args: InitConfigArgs,
}

impl InitConfigCommand {
    /// Execute the command. Returns the path written.
    pub fn run(&self) -> Result<PathBuf> {
        let config_path = self.target_path();

        if config_path.exists() && !self.args.force {
            return Err(DylextError::Validation(format!(
                "{} {} (use --force to overwrite)",
                error_messages::OUTPUT_FILE_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        info!(path = %config_path.display(), "configuration written");
        Ok(config_path)
    }

    /// Resolve the file to write; a directory gets `dylext.toml` appended.
    fn target_path(&self) -> PathBuf {
        match &self.args.path {
            Some(path) if path.is_dir() => path.join(CONFIG_FILE_NAME),
            Some(path) => path.clone(),
            None => Path::new(CONFIG_FILE_NAME).to_path_buf(),
        }
    }
}

impl Command for InitConfigCommand {
    type Args = InitConfigArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init-config"
    }
}

/// Run the init-config command.
pub fn run_init_config(args: InitConfigArgs) -> Result<PathBuf> {
    InitConfigCommand::new(args).execute()
}
