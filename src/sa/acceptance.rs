//! Metropolis acceptance criterion.

use rand::Rng;

/// Probability of moving to a candidate whose cost differs by `delta`.
///
/// - `delta < 0`: 1 (improvements are always taken).
/// - `temperature > 0`: `exp(-delta / temperature)`.
/// - `temperature <= 0` or a NaN `delta`: 0, i.e. pure descent.
///
/// # Examples
///
/// ```
/// use u_anneal_tsp::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(-3.0, 1.0), 1.0);
/// assert!((acceptance_probability(1.0, 1.0) - (-1.0f64).exp()).abs() < 1e-12);
/// assert_eq!(acceptance_probability(1.0, 0.0), 0.0);
/// ```
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        return 1.0;
    }
    if temperature <= 0.0 {
        return 0.0;
    }
    let p = (-delta / temperature).exp();
    if p.is_finite() {
        p
    } else {
        0.0
    }
}

/// Decides whether to accept a candidate with cost change `delta`.
///
/// Improving moves return `true` without consuming randomness. Otherwise a
/// single uniform draw in `[0, 1)` is compared against
/// [`acceptance_probability`].
pub fn metropolis<R: Rng + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    let probability = acceptance_probability(delta, temperature);
    if probability <= 0.0 {
        return false;
    }
    rng.random_range(0.0..1.0) < probability
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_improvement_always_accepted() {
        let mut rng = StdRng::seed_from_u64(1);
        for &t in &[1e-12, 0.5, 1.0, 1e9] {
            assert!(metropolis(-1e-9, t, &mut rng));
            assert!(metropolis(-1e6, t, &mut rng));
        }
    }

    #[test]
    fn test_improvement_accepted_when_frozen() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(metropolis(-0.5, 0.0, &mut rng));
        assert!(!metropolis(0.5, 0.0, &mut rng));
        assert!(!metropolis(0.5, -1.0, &mut rng));
    }

    #[test]
    fn test_zero_delta_accepted_when_warm() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(metropolis(0.0, 0.01, &mut rng));
        }
    }

    #[test]
    fn test_probability_limits() {
        assert!(acceptance_probability(1.0, 1e-6) < 1e-100);
        assert!(acceptance_probability(1.0, 1e12) > 0.999_999);
    }

    #[test]
    fn test_probability_monotone_in_temperature() {
        let temps = [0.1, 0.5, 1.0, 5.0, 50.0];
        for w in temps.windows(2) {
            assert!(acceptance_probability(2.0, w[0]) < acceptance_probability(2.0, w[1]));
        }
    }

    #[test]
    fn test_nan_delta_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(acceptance_probability(f64::NAN, 1.0), 0.0);
        assert!(!metropolis(f64::NAN, 1.0, &mut rng));
    }

    #[test]
    fn test_empirical_rate_matches_probability() {
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 20_000;
        let accepted = (0..trials)
            .filter(|_| metropolis(1.0, 1.0, &mut rng))
            .count();
        let rate = accepted as f64 / trials as f64;
        let expected = (-1.0f64).exp();
        assert!(
            (rate - expected).abs() < 0.02,
            "acceptance rate {rate} far from {expected}"
        );
    }
}
