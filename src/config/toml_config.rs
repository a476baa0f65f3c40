use crate::core::service::{DEFAULT_GENERAL_SEED, DEFAULT_VIP_SEED};
use crate::core::{ConfigProvider, ReportFormat};
use crate::utils::error::{PassesError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub seed: SeedConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub general: Vec<String>,
    pub vip: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            general: DEFAULT_GENERAL_SEED.iter().map(|s| s.to_string()).collect(),
            vip: DEFAULT_VIP_SEED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: String,
    pub output_path: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            output_path: "./reports".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// "compact" or "json"
    pub format: String,
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "compact".to_string(),
            verbose: false,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PassesError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PassesError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COUNTER_OUTPUT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PassesError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if cli.no_seed {
            self.seed.enabled = false;
        }
        if let Some(format) = &cli.format {
            self.report.format = format.clone();
        }
        if let Some(output_path) = &cli.output_path {
            self.report.output_path = output_path.clone();
        }
        if cli.verbose {
            self.logging.verbose = true;
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_one_of("report.format", &self.report.format, &ReportFormat::NAMES)?;
        validation::validate_path("report.output_path", &self.report.output_path)?;
        validation::validate_one_of("logging.format", &self.logging.format, &["compact", "json"])?;

        if self.seed.enabled {
            validation::validate_names("seed.general", &self.seed.general)?;
            validation::validate_names("seed.vip", &self.seed.vip)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn seed_enabled(&self) -> bool {
        self.seed.enabled
    }

    fn seed_general(&self) -> &[String] {
        &self.seed.general
    }

    fn seed_vip(&self) -> &[String] {
        &self.seed.vip
    }

    fn report_format(&self) -> ReportFormat {
        self.report.format.parse().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_sample_data() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.seed_enabled());
        assert_eq!(config.seed_general(), ["Alex", "Brian", "Ron"]);
        assert_eq!(config.seed_vip(), ["Roll", "Charlie", "Dan"]);
        assert_eq!(config.report_format(), ReportFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[seed]
general = ["Ann"]
vip = ["Zoe", "Yan"]

[report]
format = "json"
output_path = "./out"

[logging]
format = "json"
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.seed_general(), ["Ann"]);
        assert_eq!(config.seed_vip(), ["Zoe", "Yan"]);
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert_eq!(config.output_path(), "./out");
        assert!(config.logging.is_json());
        assert!(config.logging.verbose);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PASSES_TEST_OUTPUT", "/tmp/passes-reports");

        let toml_content = r#"
[report]
output_path = "${PASSES_TEST_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/passes-reports");

        std::env::remove_var("PASSES_TEST_OUTPUT");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[report]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[seed]\ngeneral = [\"  \"]\n").unwrap();
        assert!(config.validate().is_err());

        let config =
            TomlConfig::from_toml_str("[seed]\nenabled = false\ngeneral = [\"  \"]\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[seed\n").unwrap_err();
        assert!(matches!(err, PassesError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[seed]\nenabled = false\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(!config.seed_enabled());
    }
}
