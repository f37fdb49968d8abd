//! Spawn and orbit tuning
//!
//! Read once at start-up from JSON. Every section has defaults matching the
//! shipped game, so a file only needs the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{BodyKind, SpawnBand, SpawnError};

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid spawn settings: {0}")]
    Spawn(#[from] SpawnError),

    #[error("Invalid value for {field}: {value}")]
    Invalid { field: &'static str, value: f32 },
}

fn default_value() -> u32 {
    1
}

/// One spawnable category and the template its pool is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub kind: BodyKind,
    /// Relative selection weight (0 = never spawned)
    pub weight: u32,
    pub pool_size: u32,
    /// Points awarded when collected
    #[serde(default = "default_value")]
    pub value: u32,
}

impl CategoryConfig {
    pub fn new(name: &str, kind: BodyKind, weight: u32, pool_size: u32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            weight,
            pool_size,
            value: default_value(),
        }
    }
}

/// Spawn director settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub min_radius: f32,
    pub max_radius: f32,
    /// Minimum distance between two live placements
    pub safe_radius: f32,
    pub initial_spawn_count: u32,
    /// Rejection-sampling attempts per spawn
    pub max_attempts: u32,
    pub categories: Vec<CategoryConfig>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            safe_radius: DEFAULT_SAFE_RADIUS,
            initial_spawn_count: DEFAULT_INITIAL_SPAWN_COUNT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            categories: vec![
                CategoryConfig::new("obstacle", BodyKind::Comet, 60, DEFAULT_POOL_SIZE),
                CategoryConfig::new("carrot", BodyKind::Carrot, 20, DEFAULT_POOL_SIZE),
                CategoryConfig::new("cabbage", BodyKind::Cabbage, 10, DEFAULT_POOL_SIZE),
                CategoryConfig::new("coin", BodyKind::Coin, 10, DEFAULT_POOL_SIZE),
            ],
        }
    }
}

impl SpawnConfig {
    /// Band described by the radii
    pub fn band(&self) -> Result<SpawnBand, SpawnError> {
        SpawnBand::new(self.min_radius, self.max_radius)
    }

    /// Sum of category weights, `None` if it overflows
    pub fn total_weight(&self) -> Option<u32> {
        self.categories
            .iter()
            .try_fold(0u32, |acc, c| acc.checked_add(c.weight))
    }

    pub fn validate(&self) -> Result<(), SpawnError> {
        self.band()?;
        if !(self.safe_radius > 0.0 && self.safe_radius.is_finite()) {
            return Err(SpawnError::InvalidSafeRadius(self.safe_radius));
        }
        if self.max_attempts == 0 {
            return Err(SpawnError::ZeroAttemptBudget);
        }
        if self.categories.is_empty() {
            return Err(SpawnError::NoCategories);
        }
        if self.categories.len() > u16::MAX as usize {
            return Err(SpawnError::TooManyCategories(self.categories.len()));
        }
        match self.total_weight() {
            None => return Err(SpawnError::WeightOverflow),
            Some(0) => return Err(SpawnError::ZeroTotalWeight),
            Some(_) => {}
        }
        Ok(())
    }
}

/// Player orbit settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub orbit_radius: f32,
    /// Radians per second
    pub orbit_speed: f32,
    pub lane_width: f32,
    pub lane_change_speed: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            orbit_radius: ORBIT_RADIUS,
            orbit_speed: ORBIT_SPEED,
            lane_width: LANE_WIDTH,
            lane_change_speed: LANE_CHANGE_SPEED,
        }
    }
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run seed for reproducibility
    pub seed: u64,
    pub spawn: SpawnConfig,
    pub orbit: OrbitConfig,
    /// Seconds between timed spawns
    pub spawn_interval: f32,
    /// Player pickup/collision reach
    pub contact_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            spawn: SpawnConfig::default(),
            orbit: OrbitConfig::default(),
            spawn_interval: SPAWN_INTERVAL,
            contact_radius: CONTACT_RADIUS,
        }
    }
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::info!(
            "Loaded config from {} ({} categories)",
            path.display(),
            config.spawn.categories.len()
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spawn.validate()?;

        let positive = [
            ("spawn_interval", self.spawn_interval),
            ("contact_radius", self.contact_radius),
            ("orbit.orbit_radius", self.orbit.orbit_radius),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid { field, value });
            }
        }

        let non_negative = [
            ("orbit.lane_width", self.orbit.lane_width),
            ("orbit.lane_change_speed", self.orbit.lane_change_speed),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid { field, value });
            }
        }

        let speed = self.orbit.orbit_speed;
        if !(speed.is_finite() && speed.abs() <= MAX_ORBIT_SPEED) {
            return Err(ConfigError::Invalid {
                field: "orbit.orbit_speed",
                value: speed,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spawn.total_weight(), Some(100));
        assert_eq!(config.spawn.max_attempts, 30);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "seed": 7, "spawn": { "safe_radius": 2.0 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.spawn.safe_radius, 2.0);
        assert_eq!(config.spawn.min_radius, DEFAULT_MIN_RADIUS);
        assert_eq!(config.spawn.categories.len(), 4);
        assert_eq!(config.orbit, OrbitConfig::default());
    }

    #[test]
    fn test_category_value_defaults_to_one() {
        let json = r#"{ "spawn": { "categories": [
            { "name": "rock", "kind": "Comet", "weight": 3, "pool_size": 2 }
        ] } }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.spawn.categories[0].value, 1);
        assert_eq!(config.spawn.categories[0].kind, BodyKind::Comet);
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero_weight = r#"{ "spawn": { "categories": [
            { "name": "rock", "kind": "Comet", "weight": 0, "pool_size": 2 }
        ] } }"#;
        assert!(matches!(
            Config::from_json(zero_weight),
            Err(ConfigError::Spawn(SpawnError::ZeroTotalWeight))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "spawn": { "min_radius": 30.0 } }"#),
            Err(ConfigError::Spawn(SpawnError::InvalidBand { .. }))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "spawn": { "max_attempts": 0 } }"#),
            Err(ConfigError::Spawn(SpawnError::ZeroAttemptBudget))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "spawn_interval": 0.0 }"#),
            Err(ConfigError::Invalid { field: "spawn_interval", .. })
        ));
        assert!(matches!(Config::from_json("{ not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_overflowing_weights() {
        let config = SpawnConfig {
            categories: vec![
                CategoryConfig::new("rock", BodyKind::Comet, u32::MAX, 2),
                CategoryConfig::new("carrot", BodyKind::Carrot, 5, 2),
            ],
            ..SpawnConfig::default()
        };
        assert_eq!(config.total_weight(), None);
        assert_eq!(config.validate(), Err(SpawnError::WeightOverflow));
    }

    #[test]
    fn test_rejects_runaway_orbit_speed() {
        assert!(matches!(
            Config::from_json(r#"{ "orbit": { "orbit_speed": 1e30 } }"#),
            Err(ConfigError::Invalid { field: "orbit.orbit_speed", .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{ "orbit": { "orbit_speed": -1e30 } }"#),
            Err(ConfigError::Invalid { field: "orbit.orbit_speed", .. })
        ));
        // Reverse orbits are fine
        assert!(Config::from_json(r#"{ "orbit": { "orbit_speed": -2.0 } }"#).is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::default();
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/orbit-spawn.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
