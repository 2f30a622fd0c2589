//! Existential Risk - closed-form optimal consumption and existential-risk tables
//!
//! This library provides:
//! - Utility, optimal stopping time and existential-risk conversion
//! - Calibration of the baseline utility constant from country data
//! - Social welfare and the existential-risk cutoff between growth regimes
//! - Grid evaluation over fixed parameter enumerations
//! - Fixed-width tables and the value-of-life curve

pub mod error;
pub mod grid;
pub mod model;
pub mod report;

// Re-export commonly used types
pub use error::{ModelError, Result};
pub use grid::{ConsumptionRow, CutoffRow, GridEvaluator, ModelConfig};
pub use model::{CalibrationInputs, CountryTable, Regime, RiskCutoff, UtilityParameters, WelfareParameters};
pub use report::{TablesReport, ValueOfLifeCurve};
