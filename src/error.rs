//! Error types shared by the model, calibration and reporting layers

use thiserror::Error;

/// Errors raised by model evaluation, calibration and data loading
#[derive(Debug, Error)]
pub enum ModelError {
    /// Utility or stopping-time formula evaluated outside its domain
    /// (non-positive consumption, zero growth or discount rate, zero utility denominator)
    #[error("invalid utility domain: {0}")]
    InvalidUtilityDomain(String),

    /// Social welfare formula evaluated outside its domain
    /// (gamma exactly 1, or a vanishing discount denominator)
    #[error("invalid welfare domain: {0}")]
    InvalidWelfareDomain(String),

    /// Calibration inputs that cannot produce a value of a life-year
    #[error("invalid calibration inputs: {0}")]
    InvalidCalibration(String),

    /// Country code with no calibration data
    #[error("no calibration data for country '{0}'")]
    UnknownCountry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
