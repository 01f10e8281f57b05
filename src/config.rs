use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{NormalizerError, Result};

/// Per-agency processing profile consumed by the orchestrator. Only the
/// agency name is mandatory in the file; the toggles default to the values
/// a plain surface feed uses.
#[derive(Debug, Clone, Deserialize)]
pub struct AgencyConfig {
    pub agency_name: String,
    #[serde(default = "enabled")]
    pub direction_finder_enabled: bool,
    #[serde(default = "enabled")]
    pub default_route_id_enabled: bool,
    #[serde(default = "enabled")]
    pub use_route_short_name_for_route_id: bool,
    #[serde(default = "enabled")]
    pub default_route_long_name_enabled: bool,
}

fn enabled() -> bool {
    true
}

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            agency_name: "Agency".to_string(),
            direction_finder_enabled: true,
            default_route_id_enabled: true,
            use_route_short_name_for_route_id: true,
            default_route_long_name_enabled: true,
        }
    }
}

impl AgencyConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            NormalizerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: AgencyConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
