//! Generation parameters shared by the route planner and its callers.

use std::fmt;

use hexroute_core::{Coord, DEFAULT_DIMENSION};
use hexroute_paths::{
    BACKTRACK_LIMIT, BORDER_WEIGHT, ChunkSearch, HexLayout, MAX_STEP_WEIGHT, RandomPather,
};
use rand::Rng;

use crate::walk::DEFAULT_WALK_ATTEMPTS;

/// Parameters for map generation.
///
/// With the `serde` feature enabled, missing fields fall back to their
/// defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    /// Tiles per chunk edge. At least 3, so every side has a non-corner tile.
    pub dimension: i32,
    /// Hex offset convention of the map.
    pub layout: HexLayout,
    /// Upper bound (inclusive) of a random interior step weight.
    pub max_step_weight: i32,
    /// Weight of stepping onto a chunk border tile.
    pub border_weight: i32,
    /// Bound on predecessor steps when reconstructing a chunk path.
    pub backtrack_limit: usize,
    /// Dimerization retries per recursion level.
    pub walk_attempts: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            layout: HexLayout::MAP,
            max_step_weight: MAX_STEP_WEIGHT,
            border_weight: BORDER_WEIGHT,
            backtrack_limit: BACKTRACK_LIMIT,
            walk_attempts: DEFAULT_WALK_ATTEMPTS,
        }
    }
}

impl GenConfig {
    /// Check that the parameters can produce a route.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension < 3 {
            return Err(ConfigError::DimensionTooSmall(self.dimension));
        }
        if self.max_step_weight < 0 {
            return Err(ConfigError::NegativeWeight {
                field: "max_step_weight",
                value: self.max_step_weight,
            });
        }
        if self.border_weight < 0 {
            return Err(ConfigError::NegativeWeight {
                field: "border_weight",
                value: self.border_weight,
            });
        }
        if self.backtrack_limit == 0 {
            return Err(ConfigError::Zero("backtrack_limit"));
        }
        if self.walk_attempts == 0 {
            return Err(ConfigError::Zero("walk_attempts"));
        }
        Ok(())
    }

    /// A [`RandomPather`] inside `chunk` towards chunk-local `end` with
    /// these weights.
    pub fn pather<'r, R: Rng + ?Sized>(
        &self,
        rng: &'r mut R,
        chunk: Coord,
        end: Coord,
    ) -> RandomPather<'r, R> {
        RandomPather::new(rng, self.dimension, end)
            .with_layout(self.layout)
            .with_origin(chunk * self.dimension)
            .with_weights(self.max_step_weight, self.border_weight)
    }

    /// Search state sized for one chunk.
    pub fn search(&self) -> ChunkSearch {
        ChunkSearch::new(self.dimension).with_backtrack_limit(self.backtrack_limit)
    }
}

/// Invalid [`GenConfig`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    DimensionTooSmall(i32),
    NegativeWeight { field: &'static str, value: i32 },
    Zero(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionTooSmall(d) => {
                write!(f, "chunk dimension {d} is too small, need at least 3")
            }
            Self::NegativeWeight { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::Zero(field) => write!(f, "{field} must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = GenConfig::default();
        assert_eq!(cfg.dimension, 8);
        assert_eq!(cfg.layout, HexLayout::OddR);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = GenConfig {
            dimension: 2,
            ..GenConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::DimensionTooSmall(2)));

        let cfg = GenConfig {
            border_weight: -1,
            ..GenConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NegativeWeight {
                field: "border_weight",
                ..
            })
        ));

        let cfg = GenConfig {
            walk_attempts: 0,
            ..GenConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Zero("walk_attempts")));
    }

    #[test]
    fn search_uses_dimension() {
        let cfg = GenConfig {
            dimension: 5,
            ..GenConfig::default()
        };
        assert_eq!(cfg.search().dim(), 5);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: GenConfig = serde_json::from_str(r#"{"dimension": 12, "layout": "EvenQ"}"#).unwrap();
        assert_eq!(cfg.dimension, 12);
        assert_eq!(cfg.layout, HexLayout::EvenQ);
        assert_eq!(cfg.border_weight, BORDER_WEIGHT);
        assert_eq!(cfg.walk_attempts, DEFAULT_WALK_ATTEMPTS);
    }

    #[test]
    fn config_round_trip() {
        let cfg = GenConfig {
            max_step_weight: 7,
            ..GenConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
