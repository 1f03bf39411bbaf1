//! Cooling schedules.

/// Maps the number of completed iterations to a temperature.
///
/// The runner evaluates the schedule once before the first iteration
/// (`iteration == 0`) and again after every iteration. Implementations
/// must be non-increasing in `iteration` and never negative.
///
/// # Examples
///
/// A custom schedule that holds the temperature for 10 steps, then halves it:
///
/// ```
/// use u_anneal_tsp::sa::Schedule;
///
/// struct Stepped;
///
/// impl Schedule for Stepped {
///     fn temperature_at(&self, initial: f64, iteration: usize) -> f64 {
///         initial * 0.5f64.powi((iteration / 10) as i32)
///     }
/// }
///
/// assert_eq!(Stepped.temperature_at(8.0, 25), 2.0);
/// ```
pub trait Schedule {
    /// Temperature after `iteration` completed iterations.
    fn temperature_at(&self, initial: f64, iteration: usize) -> f64;

    /// Short label used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Built-in cooling schedules.
///
/// # References
///
/// - Linear: fixed decrement, terminates at zero
/// - Reciprocal: `T_0 / (1 + k)`, cools fast then slow
/// - Geometric: standard textbook approach
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CoolingSchedule {
    /// Linear decay: `T_k = max(T_0 - k * rate, 0)`.
    ///
    /// Reaches zero after `T_0 / rate` iterations.
    Linear {
        /// Temperature removed per iteration. Must be positive.
        rate: f64,
    },

    /// Reciprocal decay: `T_k = T_0 / (1 + k)`.
    ///
    /// Approaches but never reaches zero, so it needs a positive
    /// termination threshold or an iteration budget.
    #[default]
    Reciprocal,

    /// Geometric (exponential) decay: `T_k = T_0 * alpha^k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// No cooling: `T_k = T_0`. Only terminates through an iteration budget.
    Constant,
}

impl Schedule for CoolingSchedule {
    fn temperature_at(&self, initial: f64, iteration: usize) -> f64 {
        let k = iteration as f64;
        match *self {
            CoolingSchedule::Linear { rate } => (initial - k * rate).max(0.0),
            CoolingSchedule::Reciprocal => initial / (1.0 + k),
            CoolingSchedule::Geometric { alpha } => initial * alpha.powf(k),
            CoolingSchedule::Constant => initial,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            CoolingSchedule::Linear { .. } => "linear",
            CoolingSchedule::Reciprocal => "reciprocal",
            CoolingSchedule::Geometric { .. } => "geometric",
            CoolingSchedule::Constant => "constant",
        }
    }
}

impl CoolingSchedule {
    /// `true` if the temperature reaches exactly zero after finitely many
    /// iterations.
    pub fn reaches_zero(&self) -> bool {
        matches!(self, CoolingSchedule::Linear { .. })
    }

    /// `true` if the temperature keeps decreasing towards zero.
    pub fn decays(&self) -> bool {
        !matches!(self, CoolingSchedule::Constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_non_increasing(schedule: CoolingSchedule) {
        let mut prev = schedule.temperature_at(100.0, 0);
        for k in 1..5000 {
            let t = schedule.temperature_at(100.0, k);
            assert!(t <= prev, "{} rose at step {k}: {prev} -> {t}", schedule.name());
            assert!(t >= 0.0);
            prev = t;
        }
    }

    #[test]
    fn test_all_schedules_non_increasing() {
        assert_non_increasing(CoolingSchedule::Linear { rate: 0.3 });
        assert_non_increasing(CoolingSchedule::Reciprocal);
        assert_non_increasing(CoolingSchedule::Geometric { alpha: 0.99 });
        assert_non_increasing(CoolingSchedule::Constant);
    }

    #[test]
    fn test_initial_temperature_at_step_zero() {
        for s in [
            CoolingSchedule::Linear { rate: 1.0 },
            CoolingSchedule::Reciprocal,
            CoolingSchedule::Geometric { alpha: 0.9 },
            CoolingSchedule::Constant,
        ] {
            assert_eq!(s.temperature_at(42.0, 0), 42.0);
        }
    }

    #[test]
    fn test_linear_hits_zero_and_clamps() {
        let s = CoolingSchedule::Linear { rate: 1.0 };
        assert_eq!(s.temperature_at(100.0, 99), 1.0);
        assert_eq!(s.temperature_at(100.0, 100), 0.0);
        assert_eq!(s.temperature_at(100.0, 250), 0.0);
    }

    #[test]
    fn test_reciprocal_values() {
        let s = CoolingSchedule::Reciprocal;
        assert_eq!(s.temperature_at(5000.0, 1), 2500.0);
        assert_eq!(s.temperature_at(5000.0, 4), 1000.0);
        assert!(s.temperature_at(5000.0, 1_000_000) > 0.0);
    }

    #[test]
    fn test_geometric_values() {
        let s = CoolingSchedule::Geometric { alpha: 0.5 };
        assert!((s.temperature_at(8.0, 3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_is_reciprocal() {
        assert_eq!(CoolingSchedule::default(), CoolingSchedule::Reciprocal);
    }
}
