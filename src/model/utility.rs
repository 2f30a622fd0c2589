//! Per-period utility, optimal stopping time and existential risk
//!
//! Utility of consumption `c` with risk aversion `γ` and baseline constant `ū`:
//! - `γ = 1`: `u(c) = ū + ln c`
//! - `γ ≠ 1`: `u(c) = ū·c^(γ-1) + 1/(1-γ)`
//!
//! The logarithmic case is an exact branch, not a numerical limit of the general formula.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Utility of consumption `c`
pub fn utility(c: f64, gamma: f64, u_bar: f64) -> Result<f64> {
    if c <= 0.0 || !c.is_finite() {
        return Err(ModelError::InvalidUtilityDomain(format!(
            "consumption must be positive and finite, got {}",
            c
        )));
    }

    if gamma == 1.0 {
        Ok(u_bar + c.ln())
    } else {
        Ok(u_bar * c.powf(gamma - 1.0) + 1.0 / (1.0 - gamma))
    }
}

/// Value of a year of life at consumption `c`
///
/// Same closed form as [`utility`]; used for the value-of-life curve.
pub fn value_of_life(c: f64, gamma: f64, u_bar: f64) -> Result<f64> {
    utility(c, gamma, u_bar)
}

/// Growth, discounting and preference inputs for the stopping problem
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilityParameters {
    /// Consumption growth rate g
    pub growth_rate: f64,
    /// Hazard / discount rate δ
    pub discount_rate: f64,
    /// Risk aversion γ
    pub risk_aversion: f64,
    /// Baseline utility constant ū
    pub baseline_utility: f64,
    /// Consumption at time zero
    pub initial_consumption: f64,
}

/// Optimal stopping time with the consumption and cumulative risk it implies
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalPath {
    pub t_star: f64,
    pub c_star: f64,
    pub risk: f64,
}

impl UtilityParameters {
    pub fn new(
        growth_rate: f64,
        discount_rate: f64,
        risk_aversion: f64,
        baseline_utility: f64,
        initial_consumption: f64,
    ) -> Self {
        Self {
            growth_rate,
            discount_rate,
            risk_aversion,
            baseline_utility,
            initial_consumption,
        }
    }

    /// Solve for T*, c* and the existential risk accumulated up to T*
    pub fn solve(&self) -> Result<OptimalPath> {
        let t_star = optimal_time(self)?;
        let c_star = self.initial_consumption * (self.growth_rate * t_star).exp();
        let risk = existential_risk(self.discount_rate, t_star);
        Ok(OptimalPath { t_star, c_star, risk })
    }
}

/// Time at which the marginal benefit of further growth equals the discounted utility at stake
///
/// # Clamping
/// The result is clamped at zero (`max(0, ·)`). In the `γ ≠ 1` branch the log argument is
/// additionally floored at 1 before taking the logarithm.
pub fn optimal_time(params: &UtilityParameters) -> Result<f64> {
    let g = params.growth_rate;
    let delta = params.discount_rate;
    let gamma = params.risk_aversion;

    if g == 0.0 {
        return Err(ModelError::InvalidUtilityDomain(
            "growth rate must be non-zero".to_string(),
        ));
    }
    if delta == 0.0 {
        return Err(ModelError::InvalidUtilityDomain(
            "discount rate must be non-zero".to_string(),
        ));
    }

    let u0 = utility(params.initial_consumption, gamma, params.baseline_utility)?;

    if gamma == 1.0 {
        Ok(((g / delta - u0) / g).max(0.0))
    } else {
        let denominator = delta * u0;
        if denominator == 0.0 {
            return Err(ModelError::InvalidUtilityDomain(
                "utility at initial consumption is zero".to_string(),
            ));
        }
        let ratio = (g / denominator).max(1.0);
        Ok((ratio.ln() / (g * (gamma - 1.0))).max(0.0))
    }
}

/// Consumption reached at the optimal stopping time: `c0·e^(g·T*)`
pub fn optimal_consumption(params: &UtilityParameters) -> Result<f64> {
    let t_star = optimal_time(params)?;
    Ok(params.initial_consumption * (params.growth_rate * t_star).exp())
}

/// Cumulative probability of an existential event under constant hazard `delta` over `t`
pub fn existential_risk(delta: f64, t: f64) -> f64 {
    (1.0 - (-delta * t).exp()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_log_utility_branch() {
        let u = utility(std::f64::consts::E, 1.0, 2.0).unwrap();
        assert_abs_diff_eq!(u, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_power_utility_branch() {
        // u = 5 * 2^(2-1) + 1/(1-2) = 9
        let u = utility(2.0, 2.0, 5.0).unwrap();
        assert_abs_diff_eq!(u, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_consumption_is_rejected() {
        assert!(matches!(
            utility(0.0, 2.0, 1.0),
            Err(ModelError::InvalidUtilityDomain(_))
        ));
        assert!(matches!(
            utility(-1.0, 1.0, 1.0),
            Err(ModelError::InvalidUtilityDomain(_))
        ));
        assert!(utility(f64::NAN, 2.0, 1.0).is_err());
    }

    #[test]
    fn test_utility_continuous_through_log_case() {
        // Calibrated so that u(1) = 6 for every gamma; limit gamma -> 1 is 6 + ln c
        let target = 6.0;
        for &c in &[0.5, 1.0, 1.5, 2.0] {
            let log_case = utility(c, 1.0, target).unwrap();
            for &gamma in &[0.999, 1.001] {
                let u_bar = target - 1.0 / (1.0 - gamma);
                let u = utility(c, gamma, u_bar).unwrap();
                assert!(
                    (u - log_case).abs() < 1e-2,
                    "gamma={} c={}: {} vs {}",
                    gamma,
                    c,
                    u,
                    log_case
                );
            }
        }
    }

    #[test]
    fn test_optimal_time_log_case() {
        // (0.1/0.01 - 8) / 0.1 = 20
        let params = UtilityParameters::new(0.10, 0.01, 1.0, 8.0, 1.0);
        assert_abs_diff_eq!(optimal_time(&params).unwrap(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_optimal_time_clamped_at_zero() {
        // g/delta - u0 < 0 for the log case
        let params = UtilityParameters::new(0.10, 0.05, 1.0, 8.0, 1.0);
        assert_eq!(optimal_time(&params).unwrap(), 0.0);

        // g / (delta * u0) < 1 floors the log argument at one
        let params = UtilityParameters::new(0.10, 0.05, 2.0, 9.0, 1.0);
        assert_eq!(optimal_time(&params).unwrap(), 0.0);

        // gamma < 1 turns the time negative before the outer clamp
        let params = UtilityParameters::new(0.10, 0.01, 0.5, 1.0, 1.0);
        assert_eq!(optimal_time(&params).unwrap(), 0.0);
    }

    #[test]
    fn test_optimal_time_zero_denominators() {
        let params = UtilityParameters::new(0.0, 0.01, 2.0, 9.0, 1.0);
        assert!(matches!(
            optimal_time(&params),
            Err(ModelError::InvalidUtilityDomain(_))
        ));

        let params = UtilityParameters::new(0.10, 0.0, 1.0, 8.0, 1.0);
        assert!(optimal_time(&params).is_err());

        // u(1) = 1 * 1 + 1/(1-2) = 0
        let params = UtilityParameters::new(0.10, 0.01, 2.0, 1.0, 1.0);
        assert!(optimal_time(&params).is_err());
    }

    #[test]
    fn test_optimal_consumption_grows_from_c0() {
        let params = UtilityParameters::new(0.10, 0.01, 1.0, 8.0, 1.0);
        let c_star = optimal_consumption(&params).unwrap();
        assert_abs_diff_eq!(c_star, (2.0_f64).exp(), epsilon = 1e-9);

        let path = params.solve().unwrap();
        assert_abs_diff_eq!(path.c_star, c_star, epsilon = 1e-12);
        assert_abs_diff_eq!(path.risk, existential_risk(0.01, 20.0), epsilon = 1e-12);
    }

    #[test]
    fn test_existential_risk_boundaries() {
        assert_eq!(existential_risk(0.0, 50.0), 0.0);
        assert_eq!(existential_risk(0.03, 0.0), 0.0);
        assert_abs_diff_eq!(existential_risk(0.01, 100.0), 1.0 - (-1.0_f64).exp(), epsilon = 1e-12);
        assert_eq!(existential_risk(1e6, 1e6), 1.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_existential_risk_in_unit_interval(delta in 0.0f64..5.0, t in 0.0f64..500.0) {
            let risk = existential_risk(delta, t);
            prop_assert!((0.0..=1.0).contains(&risk));
        }

        #[test]
        fn prop_existential_risk_monotone(
            delta in 0.0f64..1.0,
            t in 0.0f64..100.0,
            d_delta in 0.0f64..0.5,
            d_t in 0.0f64..50.0
        ) {
            let base = existential_risk(delta, t);
            prop_assert!(existential_risk(delta + d_delta, t) >= base);
            prop_assert!(existential_risk(delta, t + d_t) >= base);
        }

        #[test]
        fn prop_optimal_time_never_negative(
            g in prop_oneof![-1.0f64..-0.001, 0.001f64..1.0],
            delta in prop_oneof![-0.2f64..-0.001, 0.001f64..0.2],
            gamma in prop_oneof![Just(1.0f64), 0.1f64..5.0],
            u_bar in -20.0f64..20.0,
            c0 in 0.1f64..10.0
        ) {
            let params = UtilityParameters::new(g, delta, gamma, u_bar, c0);
            if let Ok(t) = optimal_time(&params) {
                prop_assert!(t >= 0.0);
            }
        }
    }
}
