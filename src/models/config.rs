use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use slic_superpixels::engine::{DEFAULT_COMPACTNESS, DEFAULT_NUM_SUPERPIXELS};
use slic_superpixels::SlicOptions;

use crate::error::ConfigFileError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "SUPERPIX_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Clustering parameters
    #[serde(default)]
    pub segmentation: SegmentationConfig,
}

/// Clustering parameters as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Requested number of superpixels (K)
    #[serde(default = "default_num_superpixels")]
    pub num_superpixels: u32,

    /// Weight of the color term in the distance metric
    #[serde(default = "default_compactness")]
    pub compactness: f32,

    /// Sweep cap; zero or negative means no cap
    #[serde(default = "default_max_iterations")]
    pub max_iterations: i64,
}

fn default_num_superpixels() -> u32 {
    DEFAULT_NUM_SUPERPIXELS
}

fn default_compactness() -> f32 {
    DEFAULT_COMPACTNESS
}

fn default_max_iterations() -> i64 {
    -1 // no cap
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            num_superpixels: default_num_superpixels(),
            compactness: default_compactness(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl SegmentationConfig {
    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        num_superpixels: Option<u32>,
        compactness: Option<f32>,
        max_iterations: Option<i64>,
    ) -> Self {
        if let Some(k) = num_superpixels {
            self.num_superpixels = k;
        }
        if let Some(m) = compactness {
            self.compactness = m;
        }
        if let Some(n) = max_iterations {
            self.max_iterations = n;
        }
        self
    }

    /// Convert to engine options. Validation happens in the engine.
    pub fn to_options(&self) -> SlicOptions {
        let cap = if self.max_iterations <= 0 {
            0
        } else {
            u32::try_from(self.max_iterations).unwrap_or(u32::MAX)
        };

        SlicOptions::new()
            .num_superpixels(self.num_superpixels)
            .compactness(self.compactness)
            .max_iterations(cap)
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;

        tracing::info!(
            path = %path.display(),
            num_superpixels = config.segmentation.num_superpixels,
            compactness = config.segmentation.compactness,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigFileError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Pick the config file: an explicit path wins over `SUPERPIX_CONFIG`.
    pub fn locate(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| {
            std::env::var_os(CONFIG_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigFileError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
