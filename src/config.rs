use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

pub const BASE_URL_ENV: &str = "TICKETFORM_API_BASE_URL";
const CONFIG_DIR_NAME: &str = "ticketform";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
}

impl AppConfig {
    /// Resolves the API base URL: explicit override, then the environment,
    /// then the stored config file. The file is only read when needed.
    pub fn load(base_url_override: Option<String>) -> AppResult<Self> {
        Self::resolve(
            base_url_override,
            env::var(BASE_URL_ENV).ok(),
            StoredConfig::load,
        )
    }

    fn resolve(
        base_url_override: Option<String>,
        from_env: Option<String>,
        stored: impl FnOnce() -> AppResult<StoredConfig>,
    ) -> AppResult<Self> {
        let (source, raw) = match [
            ("command line", base_url_override),
            ("environment", from_env),
        ]
        .into_iter()
        .find_map(|(source, value)| non_blank(value).map(|v| (source, v)))
        {
            Some(found) => found,
            None => non_blank(stored()?.api_base_url)
                .map(|v| ("config file", v))
                .ok_or_else(|| {
                    AppError::Configuration(format!(
                        "API base URL not configured; pass --base-url, set {BASE_URL_ENV} or run `ticketform config init`"
                    ))
                })?,
        };

        let base_url = parse_base_url(&raw)?;
        debug!(%base_url, source, "resolved API base URL");
        Ok(Self { base_url })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_base_url(raw: &str) -> AppResult<String> {
    let url = Url::parse(raw.trim())
        .map_err(|err| AppError::Configuration(format!("invalid API base URL '{raw}': {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url.as_str().trim_end_matches('/').to_string()),
        other => Err(AppError::Configuration(format!(
            "API base URL must use http or https, got '{other}'"
        ))),
    }
}

/// Settings persisted by `ticketform config init`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredConfig {
    pub api_base_url: Option<String>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|err| {
                AppError::Configuration(format!("invalid config file {}: {err}", path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to write config: {err}")))?;
        fs::write(path, data)?;
        Ok(())
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            AppError::Configuration("could not determine the user config directory".to_string())
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(url: &str) -> StoredConfig {
        StoredConfig {
            api_base_url: Some(url.to_string()),
        }
    }

    #[test]
    fn override_wins_over_env_and_file() {
        let config = AppConfig::resolve(
            Some("https://cli.example.com".to_string()),
            Some("https://env.example.com".to_string()),
            || Ok(stored("https://file.example.com")),
        )
        .unwrap();
        assert_eq!(config.base_url, "https://cli.example.com");
    }

    #[test]
    fn falls_back_to_env_then_file() {
        let config = AppConfig::resolve(
            None,
            Some("https://env.example.com/api/".to_string()),
            || Ok(stored("https://file.example.com")),
        )
        .unwrap();
        assert_eq!(config.base_url, "https://env.example.com/api");

        let config = AppConfig::resolve(None, Some("  ".to_string()), || {
            Ok(stored("https://file.example.com"))
        })
        .unwrap();
        assert_eq!(config.base_url, "https://file.example.com");
    }

    #[test]
    fn missing_base_url_is_configuration_error() {
        let err = AppConfig::resolve(None, None, || Ok(StoredConfig::default())).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn corrupt_config_file_is_ignored_when_url_given() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let config = AppConfig::resolve(
            Some("http://127.0.0.1:1".to_string()),
            None,
            || StoredConfig::load_from(&path),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:1");

        let config = AppConfig::resolve(
            None,
            Some("https://env.example.com".to_string()),
            || StoredConfig::load_from(&path),
        )
        .unwrap();
        assert_eq!(config.base_url, "https://env.example.com");

        let err = AppConfig::resolve(None, None, || StoredConfig::load_from(&path)).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn rejects_unusable_urls() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("ftp://example.com").is_err());
        assert_eq!(
            parse_base_url("http://localhost:8080/").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn stored_config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        assert!(StoredConfig::load_from(&path).unwrap().api_base_url.is_none());

        stored("https://api.example.com").save_to(&path).unwrap();
        let loaded = StoredConfig::load_from(&path).unwrap();
        assert_eq!(loaded.api_base_url.as_deref(), Some("https://api.example.com"));
    }

    #[test]
    fn corrupt_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let err = StoredConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
