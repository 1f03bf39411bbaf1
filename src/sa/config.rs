//! SA configuration.

use super::schedule::CoolingSchedule;
use crate::error::{AnnealError, AnnealResult};

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use u_anneal_tsp::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_termination_threshold(0.0)
///     .with_cooling(CoolingSchedule::Linear { rate: 0.001 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// The run stops once the temperature is at or below this value.
    pub termination_threshold: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Best cost is sampled into the history every this many iterations.
    pub history_interval: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            termination_threshold: 0.05,
            cooling: CoolingSchedule::default(),
            max_iterations: 0,
            seed: None,
            history_interval: 100,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_termination_threshold(mut self, t: f64) -> Self {
        self.termination_threshold = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Validates the configuration.
    ///
    /// Rejects anything that would divide by a non-positive temperature,
    /// run zero iterations, or never terminate.
    pub fn validate(&self) -> AnnealResult<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(AnnealError::invalid(
                "initial_temperature",
                format!("must be positive and finite, got {}", self.initial_temperature),
            ));
        }
        if !self.termination_threshold.is_finite() || self.termination_threshold < 0.0 {
            return Err(AnnealError::invalid(
                "termination_threshold",
                format!(
                    "must be non-negative and finite, got {}",
                    self.termination_threshold
                ),
            ));
        }
        if self.termination_threshold >= self.initial_temperature {
            return Err(AnnealError::invalid(
                "termination_threshold",
                format!(
                    "must be less than initial_temperature ({}), got {}",
                    self.initial_temperature, self.termination_threshold
                ),
            ));
        }
        if self.history_interval == 0 {
            return Err(AnnealError::invalid("history_interval", "must be at least 1"));
        }

        match self.cooling {
            CoolingSchedule::Linear { rate } => {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(AnnealError::invalid(
                        "cooling",
                        format!("linear rate must be positive and finite, got {rate}"),
                    ));
                }
            }
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(AnnealError::invalid(
                        "cooling",
                        format!("geometric alpha must be in (0, 1), got {alpha}"),
                    ));
                }
            }
            CoolingSchedule::Reciprocal | CoolingSchedule::Constant => {}
        }

        let bounded = self.max_iterations > 0;
        if !self.cooling.decays() && !bounded {
            return Err(AnnealError::invalid(
                "max_iterations",
                "constant temperature requires an iteration budget",
            ));
        }
        if !self.cooling.reaches_zero() && self.termination_threshold == 0.0 && !bounded {
            return Err(AnnealError::invalid(
                "termination_threshold",
                format!(
                    "{:?} cooling never reaches zero; set a positive threshold or max_iterations",
                    self.cooling
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.termination_threshold - 0.05).abs() < 1e-15);
        assert_eq!(config.cooling, CoolingSchedule::Reciprocal);
        assert_eq!(config.max_iterations, 0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
        let linear = SaConfig::default()
            .with_termination_threshold(0.0)
            .with_cooling(CoolingSchedule::Linear { rate: 1.0 });
        assert!(linear.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SaConfig::default().with_initial_temperature(t);
            assert!(config.validate().is_err(), "accepted T0 = {t}");
        }
    }

    #[test]
    fn test_validate_threshold_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_termination_threshold(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_threshold() {
        let config = SaConfig::default().with_termination_threshold(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_linear_rate() {
        for rate in [0.0, -1.0, f64::NAN] {
            let config = SaConfig::default().with_cooling(CoolingSchedule::Linear { rate });
            let err = config.validate().unwrap_err();
            assert!(matches!(
                err,
                AnnealError::InvalidParameter {
                    parameter: "cooling",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_reciprocal_needs_floor() {
        let config = SaConfig::default()
            .with_cooling(CoolingSchedule::Reciprocal)
            .with_termination_threshold(0.0);
        assert!(config.validate().is_err());
        assert!(config.with_max_iterations(1000).validate().is_ok());
    }

    #[test]
    fn test_validate_constant_needs_budget() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Constant);
        assert!(config.validate().is_err());
        assert!(config.with_max_iterations(500).validate().is_ok());
    }

    #[test]
    fn test_validate_history_interval() {
        let config = SaConfig::default().with_history_interval(0);
        assert!(config.validate().is_err());
    }
}
