use crate::utils::error::{EtlError, Result};
use std::fmt;
use std::path::Path;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// API credential. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// 讀取 API 金鑰：行程環境變數優先，其次是 env 檔
pub fn load_api_key(env_file: Option<&Path>) -> Result<ApiKey> {
    resolve_api_key(std::env::var(API_KEY_VAR).ok(), env_file)
}

pub fn resolve_api_key(from_env: Option<String>, env_file: Option<&Path>) -> Result<ApiKey> {
    if let Some(value) = from_env.filter(|v| !v.trim().is_empty()) {
        tracing::debug!("Using {} from process environment", API_KEY_VAR);
        return Ok(ApiKey::new(value.trim()));
    }

    let from_file = match env_file {
        Some(path) => {
            let iter = dotenvy::from_path_iter(path).map_err(|e| EtlError::ConfigError {
                message: format!("Cannot read env file {}: {}", path.display(), e),
            })?;
            find_key(iter)?
        }
        // 預設的 .env 可有可無
        None => match dotenvy::dotenv_iter() {
            Ok(iter) => find_key(iter)?,
            Err(e) if e.not_found() => None,
            Err(e) => {
                return Err(EtlError::ConfigError {
                    message: format!("Cannot read .env file: {}", e),
                })
            }
        },
    };

    match from_file.filter(|v| !v.trim().is_empty()) {
        Some(value) => {
            tracing::debug!("Using {} from env file", API_KEY_VAR);
            Ok(ApiKey::new(value.trim()))
        }
        None => Err(EtlError::MissingCredential {
            var: API_KEY_VAR.to_string(),
        }),
    }
}

fn find_key<I>(iter: I) -> Result<Option<String>>
where
    I: Iterator<Item = std::result::Result<(String, String), dotenvy::Error>>,
{
    for item in iter {
        let (key, value) = item.map_err(|e| EtlError::ConfigError {
            message: format!("Malformed env file: {}", e),
        })?;
        if key == API_KEY_VAR {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_process_environment_wins() {
        let file = env_file("GOOGLE_API_KEY=from-file\n");
        let key = resolve_api_key(Some("from-env".to_string()), Some(file.path())).unwrap();
        assert_eq!(key.expose(), "from-env");
    }

    #[test]
    fn test_falls_back_to_env_file() {
        let file = env_file("OTHER=1\nGOOGLE_API_KEY=from-file\n");
        let key = resolve_api_key(None, Some(file.path())).unwrap();
        assert_eq!(key.expose(), "from-file");
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let file = env_file("GOOGLE_API_KEY=\n");
        let err = resolve_api_key(Some("   ".to_string()), Some(file.path())).unwrap_err();
        assert!(matches!(err, EtlError::MissingCredential { ref var } if var == API_KEY_VAR));
    }

    #[test]
    fn test_env_file_without_key_is_missing_credential() {
        let file = env_file("SOMETHING_ELSE=abc\n");
        let err = resolve_api_key(None, Some(file.path())).unwrap_err();
        assert!(matches!(err, EtlError::MissingCredential { .. }));
    }

    #[test]
    fn test_explicit_env_file_must_exist() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.env");
        let err = resolve_api_key(None, Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, EtlError::ConfigError { .. }));
    }

    #[test]
    fn test_debug_output_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(****)");
    }
}
