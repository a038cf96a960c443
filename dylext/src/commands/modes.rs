//! Modes command implementation.
//!
//! Lists the registered syntax modes, one per line:
//! `name<TAB>mime<TAB>extensions`.

use std::io::Write;

use dylex_lex::{all_modes, ModeInfo};

use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the modes command.
#[derive(Debug, Clone, Default)]
pub struct ModesArgs {
    /// Print the registry as JSON instead of a table.
    pub json: bool,
}

/// Modes command handler.
pub struct ModesCommand {
    args: ModesArgs,
}

impl ModesCommand {
    /// Execute the command, writing to standard output.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Execute the command, writing to `out`.
    pub fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let modes: &[ModeInfo] = all_modes();
        if self.args.json {
            serde_json::to_writer_pretty(&mut *out, modes)?;
            writeln!(out)?;
            return Ok(());
        }
        for mode in modes {
            writeln!(
                out,
                "{}\t{}\t{}",
                mode.name,
                mode.mime,
                mode.extensions.join(",")
            )?;
        }
        Ok(())
    }
}

impl Command for ModesCommand {
    type Args = ModesArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "modes"
    }
}

/// Run the modes command.
pub fn run_modes(args: ModesArgs) -> Result<()> {
    ModesCommand::new(args).execute()
}
