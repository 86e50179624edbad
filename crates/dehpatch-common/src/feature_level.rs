// feature_level.rs — engine compatibility tiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatchError;

/// Compatibility tier a patch is written for. Ordered oldest to newest;
/// every tier understands everything the tiers below it understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureLevel {
    Doom19,
    #[serde(alias = "boom")]
    Mbf,
    #[default]
    Mbf21,
    Id24,
}

impl FeatureLevel {
    pub const ALL: [FeatureLevel; 4] = [
        FeatureLevel::Doom19,
        FeatureLevel::Mbf,
        FeatureLevel::Mbf21,
        FeatureLevel::Id24,
    ];

    /// True if a patch targeting `self` may carry content gated at `level`.
    pub fn supports(self, level: FeatureLevel) -> bool {
        level <= self
    }

    /// Value of the "Doom version" header line.
    pub fn doom_version(self) -> i32 {
        match self {
            FeatureLevel::Doom19 => 19,
            _ => 21,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FeatureLevel::Doom19 => "DOOM19",
            FeatureLevel::Mbf => "MBF",
            FeatureLevel::Mbf21 => "MBF21",
            FeatureLevel::Id24 => "ID24",
        }
    }
}

impl fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureLevel {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "doom19" => Ok(FeatureLevel::Doom19),
            "mbf" | "boom" => Ok(FeatureLevel::Mbf),
            "mbf21" => Ok(FeatureLevel::Mbf21),
            "id24" => Ok(FeatureLevel::Id24),
            _ => Err(PatchError::UnknownFeatureLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(FeatureLevel::Doom19 < FeatureLevel::Mbf);
        assert!(FeatureLevel::Mbf < FeatureLevel::Mbf21);
        assert!(FeatureLevel::Mbf21 < FeatureLevel::Id24);
    }

    #[test]
    fn test_supports() {
        assert!(FeatureLevel::Id24.supports(FeatureLevel::Doom19));
        assert!(FeatureLevel::Mbf21.supports(FeatureLevel::Mbf21));
        assert!(!FeatureLevel::Mbf.supports(FeatureLevel::Mbf21));
        assert!(!FeatureLevel::Doom19.supports(FeatureLevel::Id24));
    }

    #[test]
    fn test_doom_version() {
        assert_eq!(FeatureLevel::Doom19.doom_version(), 19);
        assert_eq!(FeatureLevel::Mbf.doom_version(), 21);
        assert_eq!(FeatureLevel::Id24.doom_version(), 21);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("MBF21".parse::<FeatureLevel>().unwrap(), FeatureLevel::Mbf21);
        assert_eq!("boom".parse::<FeatureLevel>().unwrap(), FeatureLevel::Mbf);
        assert!("heretic".parse::<FeatureLevel>().is_err());
    }
}
