pub mod cli;
pub mod credentials;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_OUTPUT_FILE: &str = "investment_news.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "market-news"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Fetch investment news from a generative model and save it as text")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_API_BASE))]
    pub api_base: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_MODEL))]
    pub model: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub output_dir: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_OUTPUT_FILE))]
    pub output_file: String,

    /// Env file holding GOOGLE_API_KEY (defaults to ./.env when present)
    #[cfg_attr(feature = "cli", arg(long))]
    pub env_file: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log process CPU and memory per stage"))]
    pub monitor: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            output_dir: ".".to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            env_file: None,
            verbose: false,
            json_logs: false,
            monitor: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_non_empty_string("model", &self.model)?;
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_file_name("output_file", &self.output_file)?;
        if let Some(env_file) = &self.env_file {
            validation::validate_path("env_file", env_file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_file(), "investment_news.txt");
        assert_eq!(config.model(), "gemini-pro");
    }

    #[test]
    fn test_invalid_api_base_is_rejected() {
        let config = CliConfig {
            api_base: "not a url".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_file_with_directory_is_rejected() {
        let config = CliConfig {
            output_file: "out/news.txt".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_cli_flags() {
        let config = CliConfig::parse_from([
            "market-news",
            "--model",
            "gemini-1.5-flash",
            "--output-dir",
            "/tmp/news",
            "--verbose",
        ]);
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.output_dir, "/tmp/news");
        assert_eq!(config.output_file, DEFAULT_OUTPUT_FILE);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(config.verbose);
        assert!(!config.monitor);
    }
}
