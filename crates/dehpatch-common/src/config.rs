// config.rs — patch output settings loaded from TOML

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PatchError, PatchResult};
use crate::feature_level::FeatureLevel;

/// Slot 0 plus the 137 stock things.
pub const STOCK_THING_COUNT: usize = 138;
pub const STOCK_FRAME_COUNT: usize = 967;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    pub feature_level: FeatureLevel,
    pub force_output: bool,
    pub comment: String,
    pub thing_count: usize,
    pub frame_count: usize,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            feature_level: FeatureLevel::default(),
            force_output: false,
            comment: "Created with dehpatch".to_string(),
            thing_count: STOCK_THING_COUNT,
            frame_count: STOCK_FRAME_COUNT,
        }
    }
}

impl PatchConfig {
    pub fn from_toml_str(text: &str) -> PatchResult<Self> {
        toml::from_str(text).map_err(|e| PatchError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> PatchResult<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!(
            "loaded {} (feature level {}, force output {})",
            path.display(),
            config.feature_level,
            config.force_output
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> PatchResult<String> {
        toml::to_string(self).map_err(|e| PatchError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_keys() {
        let config = PatchConfig::from_toml_str("").unwrap();
        assert_eq!(config, PatchConfig::default());
        assert_eq!(config.feature_level, FeatureLevel::Mbf21);
    }

    #[test]
    fn test_parse_values() {
        let config = PatchConfig::from_toml_str(
            "feature_level = \"id24\"\nforce_output = true\ncomment = \"hello\"\nframe_count = 4000\n",
        )
        .unwrap();
        assert_eq!(config.feature_level, FeatureLevel::Id24);
        assert!(config.force_output);
        assert_eq!(config.comment, "hello");
        assert_eq!(config.frame_count, 4000);
        assert_eq!(config.thing_count, STOCK_THING_COUNT);
    }

    #[test]
    fn test_boom_alias() {
        let config = PatchConfig::from_toml_str("feature_level = \"boom\"").unwrap();
        assert_eq!(config.feature_level, FeatureLevel::Mbf);
    }

    #[test]
    fn test_unknown_level_is_config_error() {
        assert!(matches!(
            PatchConfig::from_toml_str("feature_level = \"strife\""),
            Err(PatchError::Config(_))
        ));
    }

    #[test]
    fn test_round_trip_text() {
        let config = PatchConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(PatchConfig::from_toml_str(&text).unwrap(), config);
    }
}
