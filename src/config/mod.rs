use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::StoreError;

const CONFIG_FILE: &str = "studio.json";
const DEFAULT_DATA_DIR: &str = "data";

/// Site-level settings that are not editable page content: who the provider
/// is and where the data file lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    pub provider_name: String,
    pub provider_title: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            provider_name: "Emily Lacey".into(),
            provider_title: "Licensed Massage Therapist".into(),
            timezone: "America/Denver".into(),
            data_dir: None,
        }
    }
}

impl SiteConfig {
    /// The directory the JSON site store lives in.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}

/// Loads and saves the site configuration file, falling back to defaults
/// when none exists yet.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    pub fn load(&self) -> Result<SiteConfig, StoreError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(SiteConfig::default())
        }
    }

    pub fn save(&self, config: &SiteConfig) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
