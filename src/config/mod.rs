pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, ReportFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "passes-counter")]
#[command(about = "Operator console for a two-tier (general / VIP) service counter")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Run commands from a file instead of the interactive prompt
    #[arg(short, long)]
    pub script: Option<String>,

    /// Start with both lines empty
    #[arg(long)]
    pub no_seed: bool,

    /// General customers loaded at start-up, in arrival order
    #[arg(long, value_delimiter = ',', default_values = ["Alex", "Brian", "Ron"])]
    pub seed_general: Vec<String>,

    /// VIP customers loaded at start-up, in push order
    #[arg(long, value_delimiter = ',', default_values = ["Roll", "Charlie", "Dan"])]
    pub seed_vip: Vec<String>,

    /// Directory that `export` writes reports into
    #[arg(long)]
    pub output_path: Option<String>,

    /// Report format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Prefix each event line with the time it was recorded
    #[arg(long)]
    pub timestamps: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub const DEFAULT_OUTPUT_PATH: &'static str = "./reports";
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn seed_enabled(&self) -> bool {
        !self.no_seed
    }

    fn seed_general(&self) -> &[String] {
        &self.seed_general
    }

    fn seed_vip(&self) -> &[String] {
        &self.seed_vip
    }

    fn report_format(&self) -> ReportFormat {
        self.format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        self.output_path
            .as_deref()
            .unwrap_or(Self::DEFAULT_OUTPUT_PATH)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            validation::validate_one_of("format", format, &ReportFormat::NAMES)?;
        }
        validation::validate_path("output_path", ConfigProvider::output_path(self))?;
        if self.seed_enabled() {
            validation::validate_names("seed_general", &self.seed_general)?;
            validation::validate_names("seed_vip", &self.seed_vip)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_sample_data() {
        let config = CliConfig::parse_from(["passes-counter"]);
        assert!(config.seed_enabled());
        assert_eq!(config.seed_general, vec!["Alex", "Brian", "Ron"]);
        assert_eq!(config.seed_vip, vec!["Roll", "Charlie", "Dan"]);
        assert_eq!(ConfigProvider::output_path(&config), "./reports");
        assert_eq!(config.report_format(), ReportFormat::Text);
        assert!(!config.timestamps);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "passes-counter",
            "--no-seed",
            "--format",
            "json",
            "--seed-vip",
            "Ann,Bob",
            "--timestamps",
        ]);
        assert!(!config.seed_enabled());
        assert!(config.timestamps);
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert_eq!(config.seed_vip, vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_invalid_format_fails_validation() {
        let config = CliConfig::parse_from(["passes-counter", "--format", "xml"]);
        assert!(config.validate().is_err());
    }
}
