use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::SortKey;
use crate::checkout::DEFAULT_TAX_RATE;
use crate::cli::output::OutputFormat;
use crate::error::{LhError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("LH_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                LhError::MissingConfig(format!("config file not found: {}", path.display()))
            })?;
            config.merge_patch(patch);
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;
        config.validate()?;

        debug!(target: "config", ?config, "configuration loaded");
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = dirs::config_dir()
            .ok_or_else(|| LhError::MissingConfig("config directory not found".to_string()))?
            .join("learnhub/config.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| LhError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| LhError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.catalog {
            self.catalog.merge(patch);
        }
        if let Some(patch) = patch.checkout {
            self.checkout.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("LH_CATALOG_PATH") {
            self.catalog.data_path = Some(PathBuf::from(value));
        }
        if let Some(value) = env_string("LH_DEFAULT_SORT") {
            self.catalog.default_sort = value.parse()?;
        }
        if let Some(value) = env_usize("LH_FEATURED_COUNT")? {
            self.catalog.featured_count = value;
        }
        if let Some(value) = env_usize("LH_RELATED_COUNT")? {
            self.catalog.related_count = value;
        }

        if let Some(value) = env_f64("LH_TAX_RATE")? {
            self.checkout.tax_rate = value;
        }

        if let Some(value) = env_string("LH_OUTPUT_FORMAT") {
            self.output.format = value.parse()?;
        }
        if env_bool("LH_ROBOT").unwrap_or(false) {
            self.output.format = OutputFormat::Json;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.checkout.tax_rate) {
            return Err(LhError::Config(format!(
                "checkout.tax_rate {} must be within [0, 1)",
                self.checkout.tax_rate
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// External catalog TOML replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
    #[serde(default)]
    pub default_sort: SortKey,
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    #[serde(default = "default_related_count")]
    pub related_count: usize,
}

const fn default_featured_count() -> usize {
    3
}

const fn default_related_count() -> usize {
    3
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            default_sort: SortKey::Popularity,
            featured_count: default_featured_count(),
            related_count: default_related_count(),
        }
    }
}

impl CatalogConfig {
    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(value) = patch.data_path {
            self.data_path = Some(value);
        }
        if let Some(value) = patch.default_sort {
            self.default_sort = value;
        }
        if let Some(value) = patch.featured_count {
            self.featured_count = value;
        }
        if let Some(value) = patch.related_count {
            self.related_count = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

const fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl CheckoutConfig {
    fn merge(&mut self, patch: CheckoutPatch) {
        if let Some(value) = patch.tax_rate {
            self.tax_rate = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub catalog: Option<CatalogPatch>,
    pub checkout: Option<CheckoutPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogPatch {
    pub data_path: Option<PathBuf>,
    pub default_sort: Option<SortKey>,
    pub featured_count: Option<usize>,
    pub related_count: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CheckoutPatch {
    pub tax_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<OutputFormat>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<usize>().map(Some).map_err(|err| {
            LhError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<f64>().map(Some).map_err(|err| {
            LhError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
