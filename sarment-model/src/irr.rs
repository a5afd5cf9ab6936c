//! Newton–Raphson approximation of the internal rate of return.
//!
//! The IRR is the discount rate at which the net present value of a
//! cash-flow profile reaches zero. There is no closed form for the profiles
//! this crate models (a constant annuity plus a terminal value), so the
//! rate is approximated iteratively: each Newton step divides the NPV
//! residual by its analytic derivative with respect to the rate, and the
//! iterate is clamped to a configured bracket.
//!
//! Failing to converge is not an error. After the iteration limit, or when
//! the derivative vanishes, the solver reports the last clamped rate as a
//! best-effort answer with a [`Status`] saying how it finished.

mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

/// The cash-flow profile whose internal rate of return is sought.
///
/// An upfront capital outflow, a constant annual cash flow over the
/// horizon, and a terminal value recovered in the final year. The capital
/// investment is assumed positive; the model layer guarantees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    pub capital_investment_euro: f64,
    pub annual_cash_flow_euro: f64,
    pub horizon_years: u32,
    pub terminal_value_euro: f64,
}

/// Approximates the IRR of `problem` by Newton–Raphson.
///
/// The initial guess scales the cash-on-cash return
/// (`annual_cash_flow / capital`) by `config.initial_guess_scale`, floored
/// at `config.initial_guess_floor`. After each step the rate is clamped to
/// `config.rate_bounds`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the problem
/// contains a non-finite value. Non-convergence is reported through
/// [`Solution::status`], never as an error.
pub fn solve(problem: &Problem, config: &Config) -> Result<Solution, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;
    validate_problem(problem)?;

    let [lower, upper] = config.rate_bounds;

    let cash_on_cash = problem.annual_cash_flow_euro / problem.capital_investment_euro;
    let mut rate = (cash_on_cash * config.initial_guess_scale).max(config.initial_guess_floor);

    for iter in 1..=config.max_iters {
        let (npv, derivative) = residual(problem, rate);

        if npv.abs() < config.residual_tol {
            return Ok(Solution {
                rate,
                status: Status::Converged,
                iters: iter,
            });
        }

        if derivative.abs() > config.residual_tol {
            rate -= npv / derivative;
        } else {
            return Ok(Solution {
                rate,
                status: Status::StalledDerivative,
                iters: iter,
            });
        }

        rate = rate.clamp(lower, upper);
    }

    Ok(Solution {
        rate,
        status: Status::MaxIters,
        iters: config.max_iters,
    })
}

/// NPV of the profile at `rate`, and its derivative with respect to the rate.
fn residual(problem: &Problem, rate: f64) -> (f64, f64) {
    let mut npv = -problem.capital_investment_euro;
    let mut derivative = 0.0;

    for year in 1..=problem.horizon_years {
        let discount_factor = (1.0 + rate).powi(year as i32);
        npv += problem.annual_cash_flow_euro / discount_factor;
        derivative -=
            (f64::from(year) * problem.annual_cash_flow_euro) / (discount_factor * (1.0 + rate));
    }

    let horizon = problem.horizon_years;
    let terminal_discount_factor = (1.0 + rate).powi(horizon as i32);
    npv += problem.terminal_value_euro / terminal_discount_factor;
    derivative -= (f64::from(horizon) * problem.terminal_value_euro)
        / (terminal_discount_factor * (1.0 + rate));

    (npv, derivative)
}

fn validate_problem(problem: &Problem) -> Result<(), Error> {
    for (name, value) in [
        ("capital_investment_euro", problem.capital_investment_euro),
        ("annual_cash_flow_euro", problem.annual_cash_flow_euro),
        ("terminal_value_euro", problem.terminal_value_euro),
    ] {
        if !value.is_finite() {
            return Err(Error::NonFiniteProblem { name, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::net_present_value;

    /// The Languedoc realistic scenario's cash-flow profile.
    fn languedoc_profile() -> Problem {
        Problem {
            capital_investment_euro: 95_000_000.0,
            annual_cash_flow_euro: 9_865_975.0,
            horizon_years: 15,
            terminal_value_euro: 28_500_000.0,
        }
    }

    #[test]
    fn converges_on_a_realistic_profile() {
        let solution = solve(&languedoc_profile(), &Config::default()).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.rate > 0.05 && solution.rate < 0.10, "{solution:?}");
    }

    #[test]
    fn converged_rate_zeroes_the_npv() {
        let problem = languedoc_profile();
        let solution = solve(&problem, &Config::default()).unwrap();

        let npv_at_root = net_present_value(
            problem.capital_investment_euro,
            problem.annual_cash_flow_euro,
            solution.rate,
            problem.horizon_years,
            problem.terminal_value_euro,
        );
        assert!(npv_at_root.abs() < 1.0, "residual {npv_at_root}");
    }

    #[test]
    fn higher_cash_flow_raises_the_rate() {
        let base = languedoc_profile();
        let richer = Problem {
            annual_cash_flow_euro: base.annual_cash_flow_euro * 1.5,
            ..base
        };

        let base_rate = solve(&base, &Config::default()).unwrap().rate;
        let richer_rate = solve(&richer, &Config::default()).unwrap().rate;
        assert!(richer_rate > base_rate);
    }

    #[test]
    fn zero_cash_flow_stalls_at_the_initial_guess() {
        let problem = Problem {
            capital_investment_euro: 1e6,
            annual_cash_flow_euro: 0.0,
            horizon_years: 15,
            terminal_value_euro: 0.0,
        };
        let solution = solve(&problem, &Config::default()).unwrap();

        assert_eq!(solution.status, Status::StalledDerivative);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.rate, Config::default().initial_guess_floor);
    }

    #[test]
    fn unreachable_tolerance_reports_max_iters_with_best_effort_rate() {
        let config = Config {
            residual_tol: 1e-30,
            ..Config::default()
        };
        let solution = solve(&languedoc_profile(), &config).unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, config.max_iters);
        // The iterate still sits at the root, only the tolerance is absurd.
        assert!(solution.rate > 0.05 && solution.rate < 0.10);
    }

    #[test]
    fn very_profitable_profile_pins_to_the_upper_bound() {
        let problem = Problem {
            capital_investment_euro: 100.0,
            annual_cash_flow_euro: 100.0,
            horizon_years: 15,
            terminal_value_euro: 30.0,
        };
        let solution = solve(&problem, &Config::default()).unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.rate, Config::default().rate_bounds[1]);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = Config {
            residual_tol: -1.0,
            ..Config::default()
        };
        let result = solve(&languedoc_profile(), &config);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_non_finite_problem() {
        let problem = Problem {
            annual_cash_flow_euro: f64::NAN,
            ..languedoc_profile()
        };
        let result = solve(&problem, &Config::default());

        assert!(matches!(
            result,
            Err(Error::NonFiniteProblem {
                name: "annual_cash_flow_euro",
                ..
            })
        ));
    }
}
