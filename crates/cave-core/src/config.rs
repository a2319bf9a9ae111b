//! Run configuration
//!
//! The four scalar run parameters plus an optional seed, validated
//! before any generation happens.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_STEPS, DEFAULT_WALL_FRACTION, DEFAULT_WIDTH};
use crate::errors::ConfigError;

/// Parameters for one cave-generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaveConfig {
    /// Grid width in cells, at least 3
    pub width: usize,

    /// Grid height in cells, at least 3
    pub height: usize,

    /// Probability that an interior cell starts as wall, in [0, 1]
    pub wall_fraction: f64,

    /// Number of smoothing timesteps to run
    pub steps: u32,

    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            wall_fraction: DEFAULT_WALL_FRACTION,
            steps: DEFAULT_STEPS,
            seed: None,
        }
    }
}

impl CaveConfig {
    /// Check the run parameters.
    ///
    /// A NaN wall fraction fails the range check like any other value
    /// outside [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 3 || self.height < 3 {
            return Err(ConfigError::DimensionsTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.wall_fraction) {
            return Err(ConfigError::WallFractionOutOfRange(self.wall_fraction));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CaveConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 40);
        assert_eq!(config.height, 40);
        assert_eq!(config.steps, 15);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_rejects_small_dimensions() {
        let config = CaveConfig {
            width: 2,
            ..CaveConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DimensionsTooSmall {
                width: 2,
                height: 40
            })
        );

        let config = CaveConfig {
            height: 0,
            ..CaveConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_wall_fraction_outside_unit_interval() {
        for bad in [-0.1, 1.01, f64::NAN] {
            let config = CaveConfig {
                wall_fraction: bad,
                ..CaveConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_accepts_fraction_endpoints() {
        for ok in [0.0, 1.0] {
            let config = CaveConfig {
                wall_fraction: ok,
                ..CaveConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_minimal_dimensions_are_valid() {
        let config = CaveConfig {
            width: 3,
            height: 3,
            ..CaveConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CaveConfig {
            seed: Some(77),
            ..CaveConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: CaveConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.width, config.width);
        assert_eq!(restored.wall_fraction, config.wall_fraction);
        assert_eq!(restored.seed, Some(77));
    }
}
