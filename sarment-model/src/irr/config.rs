/// Configuration for the Newton–Raphson IRR solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum Newton iterations before returning the best-effort rate.
    pub max_iters: usize,
    /// Convergence threshold on the absolute NPV residual, in euros.
    /// Also used as the threshold below which the derivative is treated
    /// as vanishing.
    pub residual_tol: f64,
    /// Bounds the rate is clamped to after each Newton step.
    pub rate_bounds: [f64; 2],
    /// Scale applied to the cash-on-cash return to form the initial guess.
    pub initial_guess_scale: f64,
    /// Floor on the initial guess.
    pub initial_guess_floor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-4,
            rate_bounds: [0.001, 0.5],
            initial_guess_scale: 0.8,
            initial_guess_floor: 0.01,
        }
    }
}

impl Config {
    /// Validates tolerances, bounds, and guess parameters.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.residual_tol.is_finite() || self.residual_tol <= 0.0 {
            return Err("residual_tol must be finite and positive");
        }
        let [lower, upper] = self.rate_bounds;
        if !lower.is_finite() || !upper.is_finite() {
            return Err("rate_bounds must be finite");
        }
        if lower <= -1.0 {
            return Err("rate_bounds lower bound must exceed -1");
        }
        if lower >= upper {
            return Err("rate_bounds must satisfy lower < upper");
        }
        if !self.initial_guess_scale.is_finite() || self.initial_guess_scale <= 0.0 {
            return Err("initial_guess_scale must be finite and positive");
        }
        if !self.initial_guess_floor.is_finite() || self.initial_guess_floor <= -1.0 {
            return Err("initial_guess_floor must be finite and exceed -1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_tolerance() {
        let config = Config {
            residual_tol: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = Config {
            rate_bounds: [0.5, 0.001],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bounds_at_or_below_negative_one() {
        let config = Config {
            rate_bounds: [-1.0, 0.5],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
