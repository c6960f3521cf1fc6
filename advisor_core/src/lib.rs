//! # Advisor Core
//!
//! The engine of the major advisor. This crate interfaces with `major_rules`,
//! keeps the rule base on disk, and runs forward-chaining consultations.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Rule store and CRUD editor over the ordered rule list
//! - **consultation**: Single-pass matching of a student's facts against every rule
//! - **presentation**: Text rendering of rule tables and consultation results

pub mod consultation;
pub mod error;
pub mod knowledge_base;
pub mod presentation;

pub use consultation::*;
pub use error::*;
pub use knowledge_base::*;
pub use presentation::*;
