//! Analytical model: utility, calibration, welfare and country calibration data

pub mod calibration;
pub mod countries;
pub mod utility;
pub mod welfare;

pub use calibration::{
    calibrate_baseline_utility, calibrate_for_consumption_table, calibrate_for_life_value_plot,
    calibrate_for_risk_cutoff, value_of_life_year, CalibrationInputs, LIFE_VALUE_TARGET,
};
pub use countries::{CountryTable, DEFAULT_COUNTRIES_PATH};
pub use utility::{
    existential_risk, optimal_consumption, optimal_time, utility, value_of_life, OptimalPath,
    UtilityParameters,
};
pub use welfare::{
    existential_risk_cutoff, social_welfare, Regime, RiskCutoff, WelfareParameters,
    WELFARE_TIE_TOLERANCE,
};
