use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for trustbuilds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub budget: BudgetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root directory holding `parts/`, `builds.json` and `retailers.json`
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,

    /// Refuse to load a catalog with any audit issue
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    #[serde(default = "default_build_budget")]
    pub default_build: f64,

    #[serde(default = "default_upgrade_budget")]
    pub default_upgrade: f64,

    #[serde(default = "default_min")]
    pub min: f64,

    #[serde(default = "default_max")]
    pub max: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            strict: false,
        }
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            default_build: default_build_budget(),
            default_upgrade: default_upgrade_budget(),
            min: default_min(),
            max: default_max(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data")
}

fn default_build_budget() -> f64 {
    1500.0
}

fn default_upgrade_budget() -> f64 {
    500.0
}

fn default_min() -> f64 {
    500.0
}

fn default_max() -> f64 {
    10_000.0
}

impl BudgetConfig {
    /// Clamp a requested build budget into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        // non-finite bounds would make f64::clamp panic
        let min = if self.min.is_finite() { self.min } else { default_min() };
        let max = if self.max.is_finite() { self.max } else { default_max() };
        // tolerate a hand-edited file with the bounds swapped
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        value.clamp(lo, hi)
    }

    /// Reject amounts that are not finite
    pub fn validate(&self) -> anyhow::Result<()> {
        for (key, value) in [
            ("default_build", self.default_build),
            ("default_upgrade", self.default_upgrade),
            ("min", self.min),
            ("max", self.max),
        ] {
            anyhow::ensure!(value.is_finite(), "budget.{key} must be a finite amount, got {value}");
        }
        Ok(())
    }
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config
            .budget
            .validate()
            .map_err(|e| e.context(format!("invalid config {}", path.display())))?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "trustbuilds", "trustbuilds") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.trustbuilds/config.toml")
        }
    }
}
