//! Configuration management

use crate::error::{RankError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default probability of following a link rather than teleporting.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of random-walk transitions.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default per-page convergence tolerance for iteration.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Smallest accepted tolerance. Below this, last-bit rounding noise in the
/// rank updates can keep a round from ever settling.
pub const MIN_TOLERANCE: f64 = 1e-12;

/// Parameters for both estimators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following an outgoing link
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of random-walk transitions for the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Per-page change below which iteration stops
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Seed for a reproducible random walk
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
        }
    }
}

impl RankConfig {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from the default path, falling back to defaults if absent
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check every field against what both estimators accept.
    pub fn validate(&self) -> Result<()> {
        check_iteration_damping(self.damping)?;
        check_tolerance(self.tolerance)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount(self.samples));
        }
        Ok(())
    }
}

/// Damping accepted by the transition model and the random walk: (0, 1].
pub(crate) fn check_sampling_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidDamping {
            value: damping,
            range: "(0, 1]",
        })
    }
}

/// Damping accepted by the iterative estimator: (0, 1).
pub(crate) fn check_iteration_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidDamping {
            value: damping,
            range: "(0, 1)",
        })
    }
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance >= MIN_TOLERANCE {
        Ok(())
    } else {
        Err(RankError::InvalidTolerance(tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let cfg = RankConfig::default();
        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.samples, 10_000);
        assert_eq!(cfg.tolerance, 0.001);
        assert!(cfg.seed.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_load_partial_yaml_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "damping: 0.5\nseed: 7\n").unwrap();

        let cfg = RankConfig::load(&path).unwrap();
        assert_eq!(cfg.damping, 0.5);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.samples, DEFAULT_SAMPLES);
        assert_eq!(cfg.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "damping: [not, a, number]\n").unwrap();

        assert!(matches!(RankConfig::load(&path), Err(RankError::Yaml(_))));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let cfg = RankConfig {
            damping: 1.5,
            ..RankConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(RankError::InvalidDamping { .. })));

        let cfg = RankConfig {
            samples: 0,
            ..RankConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(RankError::InvalidSampleCount(0))));

        let cfg = RankConfig {
            tolerance: f64::NAN,
            ..RankConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(RankError::InvalidTolerance(_))));
    }

    #[test]
    fn test_damping_ranges() {
        assert!(check_sampling_damping(1.0).is_ok());
        assert!(check_iteration_damping(1.0).is_err());
        assert!(check_sampling_damping(0.0).is_err());
        assert!(check_iteration_damping(f64::NAN).is_err());
        assert!(check_iteration_damping(0.85).is_ok());
    }

    #[test]
    fn test_tolerance_floor() {
        assert!(check_tolerance(MIN_TOLERANCE).is_ok());
        assert!(check_tolerance(0.001).is_ok());
        assert!(matches!(check_tolerance(1e-13), Err(RankError::InvalidTolerance(_))));
        assert!(matches!(check_tolerance(1e-300), Err(RankError::InvalidTolerance(_))));
        assert!(check_tolerance(f64::INFINITY).is_err());
    }
}
