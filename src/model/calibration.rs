//! Calibration of the baseline utility constant ū
//!
//! ū is fixed so that utility at initial consumption `c0` equals a target value of a
//! year of life, expressed in units of annual consumption. The inversion here must stay
//! consistent with [`super::utility::utility`].
//!
//! Three call sites use different targets and are kept as separate functions:
//! - Table 1: the country's statistical-life based value of a life-year
//! - Value-of-life curve: a fixed target of 6
//! - Tables 2 and 3: the welfare parameters' reference life value

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Target value of a life-year used for the value-of-life curve
pub const LIFE_VALUE_TARGET: f64 = 6.0;

/// Country-level inputs for the value of a life-year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationInputs {
    /// Value of a statistical life (currency units)
    pub statistical_life_value: f64,
    /// Average remaining life expectancy (years)
    pub life_expectancy_years: f64,
    /// Annual consumption per capita (currency units)
    pub consumption_per_capita: f64,
}

impl CalibrationInputs {
    /// Create validated calibration inputs
    pub fn new(
        statistical_life_value: f64,
        life_expectancy_years: f64,
        consumption_per_capita: f64,
    ) -> Result<Self> {
        if !statistical_life_value.is_finite() {
            return Err(ModelError::InvalidCalibration(format!(
                "statistical life value must be finite, got {}",
                statistical_life_value
            )));
        }
        if life_expectancy_years <= 0.0 || !life_expectancy_years.is_finite() {
            return Err(ModelError::InvalidCalibration(format!(
                "life expectancy must be positive, got {}",
                life_expectancy_years
            )));
        }
        if consumption_per_capita <= 0.0 || !consumption_per_capita.is_finite() {
            return Err(ModelError::InvalidCalibration(format!(
                "consumption per capita must be positive, got {}",
                consumption_per_capita
            )));
        }

        Ok(Self {
            statistical_life_value,
            life_expectancy_years,
            consumption_per_capita,
        })
    }

    /// Value of a life-year relative to annual consumption
    pub fn value_of_life_year(&self) -> f64 {
        value_of_life_year(
            self.statistical_life_value,
            self.life_expectancy_years,
            self.consumption_per_capita,
        )
    }
}

/// `(VSL / life expectancy) / consumption per capita`
pub fn value_of_life_year(vsl: f64, life_expectancy: f64, consumption_per_capita: f64) -> f64 {
    (vsl / life_expectancy) / consumption_per_capita
}

/// Solve `utility(c0, γ, ū) = target` for ū
pub fn calibrate_baseline_utility(gamma: f64, target: f64, c0: f64) -> Result<f64> {
    if c0 <= 0.0 || !c0.is_finite() {
        return Err(ModelError::InvalidUtilityDomain(format!(
            "initial consumption must be positive and finite, got {}",
            c0
        )));
    }

    if gamma == 1.0 {
        Ok(target - c0.ln())
    } else {
        Ok((target - 1.0 / (1.0 - gamma)) / c0.powf(gamma - 1.0))
    }
}

/// ū for the consumption/risk table, targeting the country's value of a life-year
pub fn calibrate_for_consumption_table(
    gamma: f64,
    inputs: &CalibrationInputs,
    c0: f64,
) -> Result<f64> {
    calibrate_baseline_utility(gamma, inputs.value_of_life_year(), c0)
}

/// ū for the value-of-life curve, targeting v(c0) = 6
pub fn calibrate_for_life_value_plot(gamma: f64, c0: f64) -> Result<f64> {
    calibrate_baseline_utility(gamma, LIFE_VALUE_TARGET, c0)
}

/// ū for the existential-risk cutoff tables, targeting the reference life value
pub fn calibrate_for_risk_cutoff(gamma: f64, reference_life_value: f64, c0: f64) -> Result<f64> {
    calibrate_baseline_utility(gamma, reference_life_value, c0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::utility::utility;
    use approx::assert_abs_diff_eq;

    fn uk() -> CalibrationInputs {
        CalibrationInputs::new(8_590_000.0, 41.0, 25_373.0).unwrap()
    }

    #[test]
    fn test_value_of_life_year_uk() {
        // (8,590,000 / 41) / 25,373 ≈ 8.2573
        let v = uk().value_of_life_year();
        assert_abs_diff_eq!(v, 8_590_000.0 / 41.0 / 25_373.0, epsilon = 1e-12);
        assert!((v - 8.2573).abs() < 1e-3);
    }

    #[test]
    fn test_calibration_inverts_utility() {
        for &c0 in &[1.0, 2.5] {
            for &gamma in &[1.0, 2.0, 3.0] {
                for &target in &[1.0, 6.0, 10.0] {
                    let u_bar = calibrate_baseline_utility(gamma, target, c0).unwrap();
                    let u = utility(c0, gamma, u_bar).unwrap();
                    assert!(
                        (u - target).abs() < 1e-9,
                        "gamma={} target={} c0={}: got {}",
                        gamma,
                        target,
                        c0,
                        u
                    );
                }
            }
        }
    }

    #[test]
    fn test_calibration_known_values() {
        // gamma = 2, target 6: u_bar = 6 + 1 = 7
        assert_abs_diff_eq!(calibrate_for_life_value_plot(2.0, 1.0).unwrap(), 7.0, epsilon = 1e-12);
        // gamma = 3, target 6: u_bar = 6 + 0.5 = 6.5
        assert_abs_diff_eq!(calibrate_for_risk_cutoff(3.0, 6.0, 1.0).unwrap(), 6.5, epsilon = 1e-12);
        // gamma just above 1 takes the general branch
        let u_bar = calibrate_for_risk_cutoff(1.00001, 6.0, 1.0).unwrap();
        assert!((u_bar - 100_006.0).abs() < 1e-4);
    }

    #[test]
    fn test_consumption_table_uses_country_target() {
        let inputs = uk();
        let u_bar = calibrate_for_consumption_table(1.0, &inputs, 1.0).unwrap();
        assert_abs_diff_eq!(u_bar, inputs.value_of_life_year(), epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            CalibrationInputs::new(1.0, 0.0, 1.0),
            Err(ModelError::InvalidCalibration(_))
        ));
        assert!(CalibrationInputs::new(1.0, 40.0, -5.0).is_err());
        assert!(CalibrationInputs::new(f64::INFINITY, 40.0, 5.0).is_err());
        assert!(matches!(
            calibrate_baseline_utility(2.0, 6.0, 0.0),
            Err(ModelError::InvalidUtilityDomain(_))
        ));
    }
}
