//! Expected social welfare under a growth/mortality regime and the existential-risk cutoff
//!
//! Welfare combines a life-value term discounted at `ρ + m` over the social horizon `ρs`
//! with a consumption-growth term discounted at the growth-adjusted rates:
//!
//! `W(g, m) = ū/((ρ+m)·ρs) + c0^(1-γ) / ((1-γ)(ρ+m+(γ-1)g)(ρs+(γ-1)g))`
//!
//! The cutoff δ* compares an accelerated regime against a baseline regime.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Welfares closer than this are treated as equal
pub const WELFARE_TIE_TOLERANCE: f64 = 1e-10;

/// Growth and mortality rates describing one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Regime {
    pub growth_rate: f64,
    pub mortality_rate: f64,
}

impl Regime {
    pub fn new(growth_rate: f64, mortality_rate: f64) -> Self {
        Self {
            growth_rate,
            mortality_rate,
        }
    }
}

/// Discounting and preference parameters shared by both regimes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WelfareParameters {
    /// Private discount rate ρ
    pub discount_rate: f64,
    /// Social discount rate ρs
    pub social_discount_rate: f64,
    /// Risk aversion γ (must differ from 1)
    pub risk_aversion: f64,
    /// Baseline utility constant ū
    pub baseline_utility: f64,
    /// Consumption at time zero
    pub initial_consumption: f64,
    /// Value of a life-year at c0 that ū was calibrated against
    pub reference_life_value: f64,
}

/// Outcome of comparing an accelerated regime with a baseline
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskCutoff {
    pub welfare_accelerated: f64,
    pub welfare_baseline: f64,
    /// Hazard rate below which the accelerated regime stays preferable.
    /// NaN when the accelerated regime is dominated.
    pub delta_star: f64,
}

impl RiskCutoff {
    /// Evaluate both regimes and derive δ*
    pub fn evaluate(
        accelerated: Regime,
        baseline: Regime,
        params: &WelfareParameters,
    ) -> Result<Self> {
        let welfare_accelerated = social_welfare(accelerated, params)?;
        let welfare_baseline = social_welfare(baseline, params)?;

        let delta_star = if (welfare_accelerated - welfare_baseline).abs() < WELFARE_TIE_TOLERANCE
        {
            0.0
        } else if welfare_accelerated < welfare_baseline {
            f64::NAN
        } else {
            (welfare_accelerated - welfare_baseline) / welfare_accelerated
        };

        Ok(Self {
            welfare_accelerated,
            welfare_baseline,
            delta_star,
        })
    }

    /// Accelerated regime is worse than baseline for every hazard rate
    pub fn is_dominated(&self) -> bool {
        self.delta_star.is_nan()
    }
}

/// Expected present value of social welfare for one regime
pub fn social_welfare(regime: Regime, params: &WelfareParameters) -> Result<f64> {
    let gamma = params.risk_aversion;
    if gamma == 1.0 {
        return Err(ModelError::InvalidWelfareDomain(
            "risk aversion of exactly 1 has no closed form here".to_string(),
        ));
    }

    let rho = params.discount_rate;
    let rho_s = params.social_discount_rate;
    let g = regime.growth_rate;
    let m = regime.mortality_rate;

    let life_denominator = (rho + m) * rho_s;
    if life_denominator == 0.0 {
        return Err(ModelError::InvalidWelfareDomain(format!(
            "life-value discount (ρ+m)·ρs vanishes for ρ={}, m={}, ρs={}",
            rho, m, rho_s
        )));
    }

    let growth_denominator =
        (1.0 - gamma) * (rho + m + (gamma - 1.0) * g) * (rho_s + (gamma - 1.0) * g);
    if growth_denominator == 0.0 {
        return Err(ModelError::InvalidWelfareDomain(format!(
            "growth-adjusted discount vanishes for g={}, m={}, γ={}",
            g, m, gamma
        )));
    }

    Ok(params.baseline_utility / life_denominator
        + params.initial_consumption.powf(1.0 - gamma) / growth_denominator)
}

/// Hazard rate δ* equalising welfare between the accelerated and baseline regimes
///
/// Returns 0 on a tie, NaN when the accelerated regime is worse, otherwise
/// `(W_AI - W0) / W_AI`.
pub fn existential_risk_cutoff(
    accelerated: Regime,
    baseline: Regime,
    params: &WelfareParameters,
) -> Result<f64> {
    RiskCutoff::evaluate(accelerated, baseline, params).map(|cutoff| cutoff.delta_star)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::calibration::calibrate_for_risk_cutoff;
    use approx::assert_abs_diff_eq;

    fn params(gamma: f64) -> WelfareParameters {
        WelfareParameters {
            discount_rate: 0.01,
            social_discount_rate: 0.01,
            risk_aversion: gamma,
            baseline_utility: calibrate_for_risk_cutoff(gamma, 6.0, 1.0).unwrap(),
            initial_consumption: 1.0,
            reference_life_value: 6.0,
        }
    }

    #[test]
    fn test_social_welfare_closed_form() {
        // gamma = 2, u_bar = 7: 7/(0.02*0.01) + 1/((-1)(0.02+0.02)(0.01+0.02))
        let w = social_welfare(Regime::new(0.02, 0.01), &params(2.0)).unwrap();
        let expected = 7.0 / (0.02 * 0.01) + 1.0 / (-1.0 * 0.04 * 0.03);
        assert_abs_diff_eq!(w, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_social_welfare_domain_errors() {
        let mut p = params(2.0);
        p.risk_aversion = 1.0;
        assert!(matches!(
            social_welfare(Regime::new(0.02, 0.01), &p),
            Err(ModelError::InvalidWelfareDomain(_))
        ));

        // rho + m = 0
        assert!(social_welfare(Regime::new(0.02, -0.01), &params(2.0)).is_err());

        // rho_s + (gamma - 1) g = 0
        assert!(social_welfare(Regime::new(-0.01, 0.01), &params(2.0)).is_err());
    }

    #[test]
    fn test_cutoff_identical_regimes_is_zero() {
        for &gamma in &[1.00001, 2.0, 3.0] {
            let regime = Regime::new(0.02, 0.01);
            let delta = existential_risk_cutoff(regime, regime, &params(gamma)).unwrap();
            assert_eq!(delta, 0.0);
        }
    }

    #[test]
    fn test_cutoff_dominated_is_nan() {
        // Higher mortality and slower growth than baseline
        let accelerated = Regime::new(0.01, 0.02);
        let baseline = Regime::new(0.02, 0.01);
        let cutoff = RiskCutoff::evaluate(accelerated, baseline, &params(2.0)).unwrap();
        assert!(cutoff.welfare_accelerated < cutoff.welfare_baseline);
        assert!(cutoff.is_dominated());
        assert!(cutoff.delta_star.is_nan());
    }

    #[test]
    fn test_cutoff_improvement_is_finite_ratio() {
        let accelerated = Regime::new(0.10, 0.005);
        let baseline = Regime::new(0.02, 0.01);
        let cutoff = RiskCutoff::evaluate(accelerated, baseline, &params(2.0)).unwrap();
        assert!(cutoff.delta_star.is_finite());
        assert!(cutoff.delta_star > 0.0);
        let expected = (cutoff.welfare_accelerated - cutoff.welfare_baseline)
            / cutoff.welfare_accelerated;
        assert_eq!(cutoff.delta_star, expected);
    }
}
