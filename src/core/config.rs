//! Game configuration
//!
//! A config can come from a TOML scenario file, from command-line flags, or
//! both (flags win). Everything is optional: an empty config means "ask the
//! player for everything and seed the dice from the clock".

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, WarError};
use crate::core::types::{Faction, TerritoryName};

/// Fewest territories a game can be played with
pub const MIN_TERRITORIES: usize = 2;

/// Territory count used by the classic fixed-size game
pub const CLASSIC_TERRITORY_COUNT: usize = 5;

/// One preset territory from a scenario file
///
/// `troops` is signed so that nonsense values in a hand-written file go
/// through the same coercion as typed input instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritorySpec {
    pub name: TerritoryName,
    pub owner: Faction,
    #[serde(default = "default_troops")]
    pub troops: i64,
}

fn default_troops() -> i64 {
    1
}

/// Configuration for one game session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Number of territories to register (skips the count prompt)
    #[serde(default)]
    pub territories: Option<usize>,

    /// Dice seed for a reproducible game
    #[serde(default)]
    pub seed: Option<u64>,

    /// Preset territories (skips registration entirely)
    #[serde(default, rename = "territory")]
    pub presets: Vec<TerritorySpec>,
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| WarError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(
            "Loaded config from {:?} ({} preset territories)",
            path,
            config.presets.len()
        );
        Ok(config)
    }

    /// Apply command-line values on top of file values
    pub fn override_with(&mut self, territories: Option<usize>, seed: Option<u64>) {
        if territories.is_some() {
            self.territories = territories;
        }
        if seed.is_some() {
            self.seed = seed;
        }
    }

    /// Territory count implied by this config, if any
    pub fn territory_count(&self) -> Option<usize> {
        match (self.territories, self.presets.len()) {
            (Some(n), _) => Some(n),
            (None, 0) => None,
            (None, n) => Some(n),
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(n) = self.territory_count() {
            if n < MIN_TERRITORIES {
                return Err(WarError::InvalidTerritoryCount {
                    given: n.to_string(),
                    min: MIN_TERRITORIES,
                });
            }
        }

        if let Some(n) = self.territories {
            if !self.presets.is_empty() && n != self.presets.len() {
                return Err(WarError::InvalidConfig(format!(
                    "territories = {} but {} preset territories are listed",
                    n,
                    self.presets.len()
                )));
            }
        }

        for (i, spec) in self.presets.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(WarError::InvalidConfig(format!(
                    "preset territory {} has an empty name",
                    i
                )));
            }
            if spec.owner.is_empty() {
                return Err(WarError::InvalidConfig(format!(
                    "preset territory {} ({}) has an empty owner",
                    i, spec.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_valid() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::new());
        assert!(config.validate().is_ok());
        assert_eq!(config.territory_count(), None);
    }

    #[test]
    fn test_parse_presets() {
        let config = GameConfig::from_toml_str(
            r#"
            seed = 7

            [[territory]]
            name = "Brazil"
            owner = "Green"
            troops = 4

            [[territory]]
            name = "Argentina"
            owner = "Blue"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.presets.len(), 2);
        assert_eq!(config.presets[0].name, "Brazil");
        assert_eq!(config.presets[0].troops, 4);
        assert_eq!(config.presets[1].troops, 1);
        assert_eq!(config.territory_count(), Some(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_long_preset_text_truncated() {
        let config = GameConfig::from_toml_str(
            r#"
            [[territory]]
            name = "A"
            owner = "Infrared-Red"
            "#,
        )
        .unwrap();
        assert_eq!(config.presets[0].owner, "Infrared-");
    }

    #[test]
    fn test_overrides_win() {
        let mut config = GameConfig::from_toml_str("territories = 4\nseed = 1").unwrap();
        config.override_with(Some(CLASSIC_TERRITORY_COUNT), None);
        assert_eq!(config.territories, Some(5));
        assert_eq!(config.seed, Some(1));

        config.override_with(None, Some(99));
        assert_eq!(config.territories, Some(5));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_too_few_territories_rejected() {
        let config = GameConfig::from_toml_str("territories = 1").unwrap();
        assert!(matches!(
            config.validate(),
            Err(WarError::InvalidTerritoryCount { min: 2, .. })
        ));
    }

    #[test]
    fn test_single_preset_rejected() {
        let config = GameConfig::from_toml_str(
            r#"
            [[territory]]
            name = "Alone"
            owner = "Red"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let config = GameConfig::from_toml_str(
            r#"
            territories = 3
            [[territory]]
            name = "A"
            owner = "Red"
            [[territory]]
            name = "B"
            owner = "Blue"
            "#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(WarError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_owner_rejected() {
        let config = GameConfig::from_toml_str(
            r#"
            [[territory]]
            name = "A"
            owner = "   "
            [[territory]]
            name = "B"
            owner = "Blue"
            "#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(WarError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            GameConfig::from_toml_str("teritories = 3"),
            Err(WarError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = GameConfig::load(Path::new("/nonexistent/territory-war.toml"));
        assert!(matches!(result, Err(WarError::ConfigRead { .. })));
    }
}
