//! Knowledge Base module - the ordered list of recommendation rules.
//!
//! The knowledge base consists of:
//! - **RuleStore**: Reads and writes the rule list as a JSON file
//! - **RuleEditor**: Add, view, update and delete operations, persisted after every change

mod editor;
mod store;

pub use editor::*;
pub use store::*;
