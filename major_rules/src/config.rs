//! Advisor configuration, read from a TOML file.
//!
//! Every section is optional; a missing file yields the defaults.
//!
//! ```toml
//! [storage]
//! rules_path = "rules.json"
//! log_path = "consultations.log"
//!
//! [matching]
//! interest_mode = "exact"
//!
//! [[subjects]]
//! key = "mtk"
//! label = "Matematika"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RuleError, RuleResult};
use crate::rule::InterestMatch;
use crate::subjects::{default_subjects, SubjectCatalog, SubjectSpec};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "advisor.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub storage: StorageConfig,
    pub matching: MatchingConfig,
    pub subjects: Vec<SubjectSpec>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            matching: MatchingConfig::default(),
            subjects: default_subjects(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding the rule list.
    pub rules_path: PathBuf,
    /// Append-only consultation log.
    pub log_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::from("rules.json"),
            log_path: PathBuf::from("consultations.log"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub interest_mode: InterestMatch,
}

impl AdvisorConfig {
    /// Load the config at `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> RuleResult<Self> {
        let config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| RuleError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml(&content).map_err(|source| RuleError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validate configuration values for consistency.
    pub fn validate(&self) -> RuleResult<()> {
        if self.subjects.is_empty() {
            return Err(RuleError::InvalidConfig(
                "at least one subject must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for subject in &self.subjects {
            if !seen.insert(&subject.key) {
                return Err(RuleError::InvalidConfig(format!(
                    "subject '{}' is listed more than once",
                    subject.key
                )));
            }
        }

        if self.storage.rules_path.as_os_str().is_empty() {
            return Err(RuleError::InvalidConfig("storage.rules_path is empty".to_string()));
        }
        if self.storage.log_path.as_os_str().is_empty() {
            return Err(RuleError::InvalidConfig("storage.log_path is empty".to_string()));
        }

        Ok(())
    }

    /// The subjects asked about during consultations and rule editing.
    pub fn catalog(&self) -> SubjectCatalog {
        SubjectCatalog::new(self.subjects.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AdvisorConfig::load(&temp_dir.path().join("advisor.toml")).unwrap();

        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.storage.rules_path, PathBuf::from("rules.json"));
        assert_eq!(config.matching.interest_mode, InterestMatch::Exact);
        assert_eq!(config.catalog().len(), 7);
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("advisor.toml");
        fs::write(
            &path,
            "[matching]\ninterest_mode = \"contains\"\n\n[storage]\nrules_path = \"kb/rules.json\"\n",
        )
        .unwrap();

        let config = AdvisorConfig::load(&path).unwrap();
        assert_eq!(config.matching.interest_mode, InterestMatch::Contains);
        assert_eq!(config.storage.rules_path, PathBuf::from("kb/rules.json"));
        assert_eq!(config.storage.log_path, PathBuf::from("consultations.log"));
        assert_eq!(config.subjects.len(), 7);
    }

    #[test]
    fn test_custom_subjects() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("advisor.toml");
        fs::write(
            &path,
            "[[subjects]]\nkey = \"sejarah\"\n\n[[subjects]]\nkey = \"MTK\"\nlabel = \"Math\"\n",
        )
        .unwrap();

        let catalog = AdvisorConfig::load(&path).unwrap().catalog();
        let labels: Vec<_> = catalog.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Sejarah", "Math"]);
    }

    #[test]
    fn test_duplicate_subjects_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("advisor.toml");
        fs::write(&path, "[[subjects]]\nkey = \"mtk\"\n\n[[subjects]]\nkey = \"mtk\"\n").unwrap();

        assert!(matches!(
            AdvisorConfig::load(&path),
            Err(RuleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("advisor.toml");
        fs::write(&path, "[matching]\ninterest_mode = \"fuzzy\"\n").unwrap();

        assert!(matches!(
            AdvisorConfig::load(&path),
            Err(RuleError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_empty_subject_list_rejected() {
        let config = AdvisorConfig {
            subjects: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
