use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{HarvestError, Result};

pub const DEFAULT_LIST_URL: &str = "https://api.weather.gov/products/types/lsr";
pub const DEFAULT_OUTPUT_PATH: &str = "lsrs.txt";
pub const DEFAULT_SUMMARY_MARKER: &str = "STORM REPORT...SUMMARY";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub harvest: HarvestConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub list_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            list_url: DEFAULT_LIST_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HarvestConfig {
    pub poll_delay_ms: u64,      // pause after every product, including the last
    pub summary_marker: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            poll_delay_ms: 1000,
            summary_marker: DEFAULT_SUMMARY_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub file_path: String,
    pub create_dirs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_path: DEFAULT_OUTPUT_PATH.to_string(),
            create_dirs: true,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| HarvestError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let cfg: AppConfig = serde_yaml::from_str(&content)
        .map_err(|e| HarvestError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
    Ok(cfg)
}
