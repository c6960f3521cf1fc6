//! Rule store - the JSON file behind the knowledge base.

use major_rules::{LegacyRule, Rule};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{AdvisorError, Result};

/// Reads and writes the ordered rule list.
///
/// The whole list is rewritten on every save; there is no index and no
/// validation beyond what the rule types enforce while deserializing.
#[derive(Debug, Clone)]
pub struct RuleStore {
    path: PathBuf,
}

impl RuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all rules in file order.
    ///
    /// A missing file is an empty knowledge base. A file that exists but does
    /// not parse is an error. Files in the older `jurusan`/`syarat` layout are
    /// converted; the next save rewrites them in the current layout.
    pub fn load(&self) -> Result<Vec<Rule>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "rule file not found, starting empty");
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| AdvisorError::io(&self.path, e))?;
        let rules = match serde_json::from_str::<Vec<Rule>>(&content) {
            Ok(rules) => rules,
            Err(source) => match serde_json::from_str::<Vec<LegacyRule>>(&content) {
                Ok(legacy) => {
                    info!(
                        path = %self.path.display(),
                        "converting rules from the older file layout"
                    );
                    legacy.into_iter().map(Rule::from).collect()
                }
                Err(_) => {
                    return Err(AdvisorError::Parse {
                        path: self.path.clone(),
                        source,
                    })
                }
            },
        };

        debug!(path = %self.path.display(), count = rules.len(), "loaded rules");
        Ok(rules)
    }

    /// Overwrite the file with the given rules.
    pub fn save(&self, rules: &[Rule]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| AdvisorError::io(parent, e))?;
            }
        }

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        rules
            .serialize(&mut serializer)
            .map_err(AdvisorError::Serialize)?;
        buf.push(b'\n');

        fs::write(&self.path, buf).map_err(|e| AdvisorError::io(&self.path, e))?;
        debug!(path = %self.path.display(), count = rules.len(), "saved rules");
        Ok(())
    }
}
