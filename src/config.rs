use std::{fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::overrides::SpacingTables;
use crate::error::Result;
use crate::logic::succession::DEFAULT_SEASON_LENGTH_DAYS;

fn default_season_length_days() -> u32 {
    DEFAULT_SEASON_LENGTH_DAYS
}

/// Engine configuration. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Spacing overrides. Omitted → built-in tables.
    #[serde(default)]
    pub tables: SpacingTables,
    #[serde(default = "default_season_length_days")]
    pub season_length_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tables: SpacingTables::default(),
            season_length_days: DEFAULT_SEASON_LENGTH_DAYS,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.tables.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading engine configuration from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
