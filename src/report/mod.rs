//! Presentation of grid results: text tables, JSON report and the value-of-life curve

mod curve;
mod tables;

pub use curve::{linspace, ValueOfLifeCurve, REFERENCE_POINT_LABEL};
pub use tables::{
    find_consumption_row, find_cutoff_row, format_consumption_table, format_cutoff_table,
    format_gamma, format_percent, format_social_discount_table, PLACEHOLDER,
};

use serde::Serialize;

use crate::grid::{ConsumptionRow, CutoffRow};

/// Everything one run produces, for machine-readable output
///
/// NaN cutoffs serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct TablesReport {
    pub country: String,
    /// Absent when the country has no calibration data
    pub value_of_life_year: Option<f64>,
    pub consumption: Option<Vec<ConsumptionRow>>,
    pub cutoffs: Vec<CutoffRow>,
    pub social_discount_baseline: Vec<CutoffRow>,
    pub social_discount_near_zero: Vec<CutoffRow>,
}

impl TablesReport {
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridEvaluator;

    #[test]
    fn test_report_json_without_country() {
        let evaluator = GridEvaluator::default();
        let (baseline, near_zero) = evaluator.social_discount_tables().unwrap();
        let report = TablesReport {
            country: "FR".to_string(),
            value_of_life_year: None,
            consumption: None,
            cutoffs: evaluator.cutoff_table().unwrap(),
            social_discount_baseline: baseline,
            social_discount_near_zero: near_zero,
        };

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["country"], "FR");
        assert!(json["consumption"].is_null());
        assert_eq!(json["cutoffs"].as_array().unwrap().len(), 12);
        assert_eq!(json["social_discount_near_zero"][0]["rho_s"], 0.0005);
    }

    #[test]
    fn test_nan_cutoff_serializes_as_null() {
        let row = CutoffRow {
            g_ai: 0.01,
            m_ai: 0.02,
            gamma: 2.0,
            rho_s: 0.01,
            delta_star: f64::NAN,
        };
        let json = serde_json::to_value(row).unwrap();
        assert!(json["delta_star"].is_null());
    }
}
