use crate::config::{DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_OUTPUT_FILE};
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub load: LoadConfig,
    pub credentials: Option<CredentialsConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub env_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            output_file: default_output_file(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_url("source.api_base", &self.source.api_base)?;
        validation::validate_non_empty_string("source.model", &self.source.model)?;
        validation::validate_path("load.output_dir", &self.load.output_dir)?;
        validation::validate_file_name("load.output_file", &self.load.output_file)?;

        if let Some(env_file) = self.env_file() {
            validation::validate_path("credentials.env_file", env_file)?;
        }

        // 未替換的 ${VAR} 代表環境變數缺漏
        for (field, value) in [
            ("source.api_base", &self.source.api_base),
            ("load.output_dir", &self.load.output_dir),
        ] {
            if value.contains("${") {
                return Err(EtlError::MissingConfigError {
                    field: format!("{} ({})", field, value),
                });
            }
        }

        Ok(())
    }

    pub fn env_file(&self) -> Option<&str> {
        self.credentials.as_ref().and_then(|c| c.env_file.as_deref())
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base(&self) -> &str {
        &self.source.api_base
    }

    fn model(&self) -> &str {
        &self.source.model
    }

    fn output_dir(&self) -> &str {
        &self.load.output_dir
    }

    fn output_file(&self) -> &str {
        &self.load.output_file
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
