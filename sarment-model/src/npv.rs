/// Computes the net present value of a constant annual cash flow.
///
/// The cash flow is discounted at `discount_rate` over `horizon_years`,
/// starting one year after the upfront capital outflow. The terminal value
/// is discounted at the final year:
///
/// ```text
/// npv = -capital + Σ cf / (1 + r)^y  +  terminal / (1 + r)^H
///                 y=1..=H
/// ```
///
/// A scenario that never generates cash (`annual_cash_flow_euro <= 0`)
/// is reported as the full loss of the capital: the function returns
/// exactly `-capital_investment_euro`. This is deliberate clamping, not an
/// error; the terminal value is not credited to a plant that never runs.
#[must_use]
pub fn net_present_value(
    capital_investment_euro: f64,
    annual_cash_flow_euro: f64,
    discount_rate: f64,
    horizon_years: u32,
    terminal_value_euro: f64,
) -> f64 {
    if annual_cash_flow_euro <= 0.0 {
        return -capital_investment_euro;
    }

    let mut npv = -capital_investment_euro;
    for year in 1..=horizon_years {
        npv += annual_cash_flow_euro / (1.0 + discount_rate).powi(year as i32);
    }

    npv + terminal_value_euro / (1.0 + discount_rate).powi(horizon_years as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn non_positive_cash_flow_loses_the_capital_exactly() {
        assert_eq!(net_present_value(95e6, 0.0, 0.08, 15, 47.5e6), -95e6);
        assert_eq!(net_present_value(95e6, -1.0e6, 0.08, 15, 47.5e6), -95e6);
    }

    #[test]
    fn zero_discount_rate_sums_undiscounted() {
        // 10 years of 1 M plus a 5 M terminal against 8 M of capital.
        let npv = net_present_value(8e6, 1e6, 0.0, 10, 5e6);
        assert_relative_eq!(npv, -8e6 + 10e6 + 5e6);
    }

    #[test]
    fn single_year_horizon() {
        let npv = net_present_value(100.0, 60.0, 0.10, 1, 55.0);
        assert_relative_eq!(npv, -100.0 + 60.0 / 1.10 + 55.0 / 1.10, epsilon = 1e-9);
    }

    #[test]
    fn npv_decreases_as_discount_rate_rises() {
        let at = |rate| net_present_value(95e6, 9_865_975.0, rate, 15, 47.5e6);
        assert!(at(0.04) > at(0.08));
        assert!(at(0.08) > at(0.12));
    }

    #[test]
    fn terminal_value_is_discounted_at_the_horizon() {
        let without = net_present_value(1e6, 2e5, 0.05, 10, 0.0);
        let with = net_present_value(1e6, 2e5, 0.05, 10, 3e5);
        assert_relative_eq!(with - without, 3e5 / 1.05_f64.powi(10), epsilon = 1e-6);
    }
}
