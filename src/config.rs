use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Organization this deployment aggregates when nothing else is configured.
const DEFAULT_ORG: &str = "why-it-works";

/// Default GitHub REST API base URL.
const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .org-issues.toml.
/// All fields are optional — the tool works with zero config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// GitHub-specific settings
    #[serde(default)]
    pub github: GitHubConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of the GitHub REST API (override for GitHub Enterprise).
    pub api_url: Option<String>,

    /// Organization whose issues are aggregated. If None, falls back to the
    /// GITHUB_ORG env var, then to the built-in default.
    pub organization: Option<String>,
}

impl Config {
    /// Load configuration from .org-issues.toml in the current directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Path::new(".org-issues.toml");
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load from a specific path (useful for testing).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the organization: config file value takes precedence,
    /// falls back to the GITHUB_ORG env var, then the built-in default.
    pub fn organization(&self) -> String {
        self.github
            .organization
            .clone()
            .or_else(|| std::env::var("GITHUB_ORG").ok())
            .unwrap_or_else(|| DEFAULT_ORG.to_string())
    }

    /// Resolve the API base URL.
    pub fn api_url(&self) -> String {
        self.github
            .api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.github.api_url.is_none());
        assert!(config.github.organization.is_none());
        assert_eq!(config.api_url(), "https://api.github.com");
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
[github]
api_url = "https://github.example.com/api/v3"
organization = "acme"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_url(), "https://github.example.com/api/v3");
        assert_eq!(config.organization(), "acme");
    }

    #[test]
    fn test_config_file_value_wins_over_env() {
        let config = Config {
            github: GitHubConfig {
                api_url: None,
                organization: Some("acme".to_string()),
            },
        };
        std::env::set_var("GITHUB_ORG", "other-org");
        assert_eq!(config.organization(), "acme");
        std::env::remove_var("GITHUB_ORG");
    }
}
