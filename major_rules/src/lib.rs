//! # Major Rules
//!
//! The rule book crate - contains the rule, condition, subject and fact-set
//! definitions used by the major advisor, plus its configuration file format.
//! This crate is the single source of truth for what a rule means and does
//! not contain any storage or console logic.

pub mod config;
pub mod error;
pub mod facts;
pub mod rule;
pub mod subjects;

pub use config::*;
pub use error::*;
pub use facts::*;
pub use rule::*;
pub use subjects::*;
