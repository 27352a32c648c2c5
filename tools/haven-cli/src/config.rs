//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use haven_commerce::Currency;
use haven_data::{
    CatalogClient, FetchClient, FetchPolicy, GoogleBooksSource, RecommendationConfig,
    RetryPolicy, TimeoutConfig, DEFAULT_CATALOG_URL, DEFAULT_SHELF_SIZE,
};
use haven_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["haven.toml", ".haven.toml", "haven.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HavenConfig {
    /// Catalog access.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HavenConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Check the config, returning `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let base_url = self.catalog.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!(
                "catalog.base_url '{}' must be an http(s) URL",
                self.catalog.base_url
            ));
        }

        if self.catalog.shelf_size == 0 || self.catalog.shelf_size > 40 {
            errors.push("catalog.shelf_size must be 1-40".to_string());
        }
        if self.catalog.recommendation_pool == 0 || self.catalog.recommendation_pool > 40 {
            errors.push("catalog.recommendation_pool must be 1-40".to_string());
        }
        if self.catalog.recommendation_count as u32 > self.catalog.recommendation_pool {
            warnings.push(
                "catalog.recommendation_count exceeds recommendation_pool; fewer books will be shown"
                    .to_string(),
            );
        }

        if self.catalog.timeout_secs == Some(0) {
            errors.push("catalog.timeout_secs must be greater than 0".to_string());
        }
        if self.catalog.max_retries > 5 {
            warnings.push(format!(
                "catalog.max_retries = {} may make failing shelves very slow",
                self.catalog.max_retries
            ));
        }

        if let Err(e) = self.store.currency() {
            errors.push(format!("store.currency: {}", e));
        }

        (errors, warnings)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog access settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the book-search API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Books requested per home page shelf.
    #[serde(default = "default_shelf_size")]
    pub shelf_size: u32,

    /// Books fetched for cart suggestions.
    #[serde(default = "default_recommendation_pool")]
    pub recommendation_pool: u32,

    /// Suggestions shown on the cart page.
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Per-request timeout. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Automatic retries for transient failures.
    #[serde(default)]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_shelf_size() -> u32 {
    DEFAULT_SHELF_SIZE
}

fn default_recommendation_pool() -> u32 {
    RecommendationConfig::default().pool
}

fn default_recommendation_count() -> usize {
    RecommendationConfig::default().count
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            shelf_size: default_shelf_size(),
            recommendation_pool: default_recommendation_pool(),
            recommendation_count: default_recommendation_count(),
            timeout_secs: None,
            max_retries: 0,
        }
    }
}

impl CatalogConfig {
    /// Fetch policy for the HTTP client.
    pub fn fetch_policy(&self) -> FetchPolicy {
        let timeout = match self.timeout_secs {
            Some(secs) => TimeoutConfig::from_total(Duration::from_secs(secs)),
            None => TimeoutConfig::none(),
        };
        let retry = if self.max_retries == 0 {
            RetryPolicy::none()
        } else {
            RetryPolicy::new(self.max_retries)
        };
        FetchPolicy::new(timeout, retry)
    }

    pub fn recommendations(&self) -> RecommendationConfig {
        RecommendationConfig {
            pool: self.recommendation_pool,
            count: self.recommendation_count,
        }
    }

    /// Build a catalog client against the configured API.
    pub fn client(&self) -> Result<CatalogClient> {
        let fetch = FetchClient::new(self.fetch_policy()).context("Failed to build HTTP client")?;
        let source = GoogleBooksSource::new(fetch, self.base_url.clone());
        Ok(CatalogClient::new(source).with_shelf_size(self.shelf_size))
    }
}

/// Store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// ISO currency code for prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl StoreConfig {
    pub fn currency(&self) -> Result<Currency, haven_commerce::CommerceError> {
        self.currency.parse()
    }
}

/// Generate a default haven.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# MindHaven storefront configuration

[catalog]
base_url = "{base_url}"
shelf_size = {shelf_size}
recommendation_pool = {pool}
recommendation_count = {count}
# timeout_secs = 10
max_retries = 0

[store]
currency = "{currency}"

[logging]
level = "warn"
format = "human"
"#,
        base_url = DEFAULT_CATALOG_URL,
        shelf_size = DEFAULT_SHELF_SIZE,
        pool = default_recommendation_pool(),
        count = default_recommendation_count(),
        currency = default_currency()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_observability::{LogFormat, LogLevel};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generated_config_matches_defaults() {
        let config: HavenConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, HavenConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: HavenConfig = toml::from_str(
            r#"
            [catalog]
            shelf_size = 6

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.shelf_size, 6);
        assert_eq!(config.catalog.base_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.catalog.recommendation_count, 4);
        assert_eq!(config.store.currency().unwrap(), Currency::INR);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_fetch_policy() {
        let mut catalog = CatalogConfig::default();
        assert_eq!(catalog.fetch_policy(), FetchPolicy::default());

        catalog.timeout_secs = Some(8);
        catalog.max_retries = 2;
        let policy = catalog.fetch_policy();
        assert_eq!(policy.timeout.total, Some(Duration::from_secs(8)));
        assert_eq!(policy.retry.max_attempts, 2);
    }

    #[test]
    fn test_validate() {
        let (errors, warnings) = HavenConfig::default().validate();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        let mut config = HavenConfig::default();
        config.catalog.base_url = "ftp://books".into();
        config.catalog.shelf_size = 0;
        config.catalog.recommendation_count = 10;
        config.store.currency = "XYZ".into();

        let (errors, warnings) = config.validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haven.json");

        let mut config = HavenConfig::default();
        config.store.currency = "USD".into();
        config.save(&path).unwrap();

        assert_eq!(HavenConfig::load(&path).unwrap(), config);
    }
}
