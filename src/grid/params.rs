//! Grid enumerations and model constants
//!
//! `ModelConfig::default()` reproduces the published Tables 1-3. Any field may be
//! overridden from a JSON file; missing fields keep their defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Consumption normalisation used at the outermost entry point
pub const DEFAULT_INITIAL_CONSUMPTION: f64 = 1.0;

/// Stand-in for γ = 1 where the welfare formula needs γ ≠ 1
pub const NEAR_LOG_GAMMA: f64 = 1.00001;

/// Complete set of grids and constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub initial_consumption: f64,
    pub consumption: ConsumptionGridConfig,
    pub cutoff: CutoffGridConfig,
    pub curve: CurveConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            initial_consumption: DEFAULT_INITIAL_CONSUMPTION,
            consumption: ConsumptionGridConfig::default(),
            cutoff: CutoffGridConfig::default(),
            curve: CurveConfig::default(),
        }
    }
}

impl ModelConfig {
    /// Load overrides from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Table 1 grid: hazard rates × risk aversion at a fixed growth rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionGridConfig {
    /// Consumption growth rate g
    pub growth_rate: f64,
    /// Hazard rates δ evaluated
    pub deltas: Vec<f64>,
    /// Risk-aversion values γ evaluated
    pub gammas: Vec<f64>,
    /// Hazard rates shown as table columns
    pub table_deltas: Vec<f64>,
}

impl Default for ConsumptionGridConfig {
    fn default() -> Self {
        Self {
            growth_rate: 0.10,
            deltas: vec![0.01, 0.02, 0.03, 0.04, 0.05, 0.06],
            gammas: vec![1.0, 2.0, 3.0],
            table_deltas: vec![0.01, 0.02],
        }
    }
}

/// Tables 2/3 grid: accelerated growth × accelerated mortality × risk aversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutoffGridConfig {
    /// Accelerated growth rates; 100 stands in for a singularity
    pub g_ai_values: Vec<f64>,
    /// Accelerated mortality rates
    pub m_ai_values: Vec<f64>,
    pub gammas: Vec<f64>,
    /// Baseline growth g0
    pub baseline_growth: f64,
    /// Baseline mortality m0
    pub baseline_mortality: f64,
    /// Private discount rate ρ
    pub discount_rate: f64,
    /// Social discount rate ρs for Table 2 and the Table 3 baseline
    pub social_discount_rate: f64,
    /// ρs for the near-zero social discounting columns of Table 3
    pub near_zero_social_discount_rate: f64,
    /// Accelerated growth used in Table 3
    pub table_3_g_ai: f64,
    /// Value of a life-year at c0 targeted by calibration
    pub reference_life_value: f64,
}

impl Default for CutoffGridConfig {
    fn default() -> Self {
        Self {
            g_ai_values: vec![0.10, 100.0],
            m_ai_values: vec![0.01, 0.005],
            gammas: vec![NEAR_LOG_GAMMA, 2.0, 3.0],
            baseline_growth: 0.02,
            baseline_mortality: 0.01,
            discount_rate: 0.01,
            social_discount_rate: 0.01,
            near_zero_social_discount_rate: 0.0005,
            table_3_g_ai: 0.10,
            reference_life_value: 6.0,
        }
    }
}

/// Value-of-life curve sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub c_min: f64,
    pub c_max: f64,
    pub points: usize,
    pub gammas: Vec<f64>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            c_min: 0.1,
            c_max: 2.0,
            points: 1000,
            gammas: vec![1.0, 2.0, 3.0],
        }
    }
}
