//! Grid evaluation over the configured parameter enumerations
//!
//! Each grid is a cartesian product evaluated in enumeration order. Rows are
//! immutable and looked up later by exact key.

use log::{debug, info};
use serde::Serialize;

use super::params::{ConsumptionGridConfig, CutoffGridConfig, ModelConfig};
use crate::error::Result;
use crate::model::{
    calibrate_for_consumption_table, calibrate_for_risk_cutoff, CalibrationInputs, Regime,
    RiskCutoff, UtilityParameters, WelfareParameters,
};

/// One cell of the consumption/risk grid (Table 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConsumptionRow {
    pub delta: f64,
    pub gamma: f64,
    pub c_star: f64,
    pub t_star: f64,
    pub risk: f64,
}

/// One cell of the existential-risk cutoff grid (Tables 2 and 3)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutoffRow {
    pub g_ai: f64,
    pub m_ai: f64,
    pub gamma: f64,
    pub rho_s: f64,
    pub delta_star: f64,
}

/// Evaluate δ × γ at a fixed growth rate, δ outermost
pub fn evaluate_consumption_grid(
    grid: &ConsumptionGridConfig,
    inputs: &CalibrationInputs,
    c0: f64,
) -> Result<Vec<ConsumptionRow>> {
    let mut rows = Vec::with_capacity(grid.deltas.len() * grid.gammas.len());

    for &delta in &grid.deltas {
        for &gamma in &grid.gammas {
            let u_bar = calibrate_for_consumption_table(gamma, inputs, c0)?;
            let path = UtilityParameters::new(grid.growth_rate, delta, gamma, u_bar, c0).solve()?;

            debug!(
                "consumption cell delta={} gamma={} u_bar={:.6} T*={:.6} c*={:.6} risk={:.6}",
                delta, gamma, u_bar, path.t_star, path.c_star, path.risk
            );

            rows.push(ConsumptionRow {
                delta,
                gamma,
                c_star: path.c_star,
                t_star: path.t_star,
                risk: path.risk,
            });
        }
    }

    Ok(rows)
}

/// Evaluate g_AI × m_AI × γ against the baseline regime, g_AI outermost
pub fn evaluate_cutoff_grid(
    grid: &CutoffGridConfig,
    g_ai_values: &[f64],
    rho_s: f64,
    c0: f64,
) -> Result<Vec<CutoffRow>> {
    let baseline = Regime::new(grid.baseline_growth, grid.baseline_mortality);
    let mut rows = Vec::with_capacity(g_ai_values.len() * grid.m_ai_values.len() * grid.gammas.len());

    for &g_ai in g_ai_values {
        for &m_ai in &grid.m_ai_values {
            for &gamma in &grid.gammas {
                let params = WelfareParameters {
                    discount_rate: grid.discount_rate,
                    social_discount_rate: rho_s,
                    risk_aversion: gamma,
                    baseline_utility: calibrate_for_risk_cutoff(
                        gamma,
                        grid.reference_life_value,
                        c0,
                    )?,
                    initial_consumption: c0,
                    reference_life_value: grid.reference_life_value,
                };
                let cutoff = RiskCutoff::evaluate(Regime::new(g_ai, m_ai), baseline, &params)?;

                debug!(
                    "cutoff cell g_ai={} m_ai={} gamma={} rho_s={} W_ai={:.6} W0={:.6} delta*={}",
                    g_ai,
                    m_ai,
                    gamma,
                    rho_s,
                    cutoff.welfare_accelerated,
                    cutoff.welfare_baseline,
                    cutoff.delta_star
                );

                rows.push(CutoffRow {
                    g_ai,
                    m_ai,
                    gamma,
                    rho_s,
                    delta_star: cutoff.delta_star,
                });
            }
        }
    }

    Ok(rows)
}

/// Runs every table's grid from one configuration
#[derive(Debug, Clone, Default)]
pub struct GridEvaluator {
    config: ModelConfig,
}

impl GridEvaluator {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Table 1 rows for a country's calibration
    pub fn consumption_table(&self, inputs: &CalibrationInputs) -> Result<Vec<ConsumptionRow>> {
        info!("Evaluating consumption grid for value of life-year {:.4}", inputs.value_of_life_year());
        evaluate_consumption_grid(&self.config.consumption, inputs, self.config.initial_consumption)
    }

    /// Table 2 rows: every accelerated growth rate at the standard social discount rate
    pub fn cutoff_table(&self) -> Result<Vec<CutoffRow>> {
        let cutoff = &self.config.cutoff;
        info!("Evaluating cutoff grid at rho_s={}", cutoff.social_discount_rate);
        evaluate_cutoff_grid(
            cutoff,
            &cutoff.g_ai_values,
            cutoff.social_discount_rate,
            self.config.initial_consumption,
        )
    }

    /// Table 3 rows: (standard ρs, near-zero ρs) at the Table 3 growth rate
    pub fn social_discount_tables(&self) -> Result<(Vec<CutoffRow>, Vec<CutoffRow>)> {
        let cutoff = &self.config.cutoff;
        let g_ai = [cutoff.table_3_g_ai];
        info!(
            "Evaluating cutoff grids at rho_s={} and rho_s={}",
            cutoff.social_discount_rate, cutoff.near_zero_social_discount_rate
        );

        let baseline = evaluate_cutoff_grid(
            cutoff,
            &g_ai,
            cutoff.social_discount_rate,
            self.config.initial_consumption,
        )?;
        let near_zero = evaluate_cutoff_grid(
            cutoff,
            &g_ai,
            cutoff.near_zero_social_discount_rate,
            self.config.initial_consumption,
        )?;
        Ok((baseline, near_zero))
    }
}
