use crate::utils::error::{ResolverError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OPENBD_BASE_URL: &str = "https://api.openbd.jp/v1";
pub const DEFAULT_GOOGLE_BOOKS_BASE_URL: &str = "https://www.googleapis.com/books/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_MAX_RESULTS: usize = 10;
/// Upper bound Google Books accepts for `maxResults`.
pub const GOOGLE_BOOKS_MAX_RESULTS: usize = 40;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub sources: SourcesConfig,
    pub http: HttpConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub openbd_base_url: String,
    pub google_books_base_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            openbd_base_url: DEFAULT_OPENBD_BASE_URL.to_string(),
            google_books_base_url: DEFAULT_GOOGLE_BOOKS_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Applies to each request, connect through body.
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl ResolverConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ResolverError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ResolverError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ResolverError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<()> {
        validate_url("sources.openbd_base_url", &self.sources.openbd_base_url)?;
        validate_url(
            "sources.google_books_base_url",
            &self.sources.google_books_base_url,
        )?;
        validate_range("http.timeout_seconds", self.http.timeout_seconds, 1, 300)?;
        if let Some(user_agent) = &self.http.user_agent {
            validate_non_empty_string("http.user_agent", user_agent)?;
            if user_agent.chars().any(char::is_control) {
                return Err(ResolverError::InvalidConfigValueError {
                    field: "http.user_agent".to_string(),
                    value: user_agent.clone(),
                    reason: "must not contain control characters".to_string(),
                });
            }
        }
        validate_range(
            "search.max_results",
            self.search.max_results,
            1,
            GOOGLE_BOOKS_MAX_RESULTS,
        )?;
        Ok(())
    }
}
