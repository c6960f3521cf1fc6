//! # Advisor CLI
//!
//! Interactive console for the major advisor: a numbered menu for running
//! consultations and maintaining the rule base.

pub mod cli;
pub mod error;
pub mod menu;
pub mod prompt;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use menu::{Menu, MenuChoice};
pub use prompt::Prompter;
