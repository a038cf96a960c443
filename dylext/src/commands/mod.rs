//! Command modules for the dylext CLI.
//!
//! Each subcommand is implemented in its own file following the same
//! pattern: an `*Args` struct, a command type implementing
//! [`traits::Command`], and a `run_*` convenience function.

pub mod common;
pub mod traits;

pub mod highlight;
pub mod init_config;
pub mod modes;

// Re-export command types and functions
pub use highlight::{run_highlight, HighlightArgs};
pub use init_config::{run_init_config, InitConfigArgs};
pub use modes::{run_modes, ModesArgs};
