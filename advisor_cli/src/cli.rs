use std::path::PathBuf;

use clap::Parser;
use major_rules::{AdvisorConfig, InterestMatch, RuleResult, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "advisor")]
#[command(author, version, about = "Recommends a field of study from interests and report scores", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Rule file, overriding storage.rules_path
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Consultation log, overriding storage.log_path
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Match a rule's interest anywhere inside the stated interest
    #[arg(long)]
    pub partial_interest: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> RuleResult<AdvisorConfig> {
        let mut config = AdvisorConfig::load(&self.config)?;
        if let Some(rules) = &self.rules {
            config.storage.rules_path = rules.clone();
        }
        if let Some(log) = &self.log {
            config.storage.log_path = log.clone();
        }
        if self.partial_interest {
            config.matching.interest_mode = InterestMatch::Contains;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["advisor"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(cli.rules.is_none());
        assert!(!cli.partial_interest);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("advisor.toml");
        fs::write(
            &config_path,
            "[storage]\nrules_path = \"from_file.json\"\nlog_path = \"from_file.log\"\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "advisor",
            "--config",
            config_path.to_str().unwrap(),
            "--rules",
            "override.json",
            "--partial-interest",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();

        assert_eq!(config.storage.rules_path, PathBuf::from("override.json"));
        assert_eq!(config.storage.log_path, PathBuf::from("from_file.log"));
        assert_eq!(config.matching.interest_mode, InterestMatch::Contains);
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["advisor", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
