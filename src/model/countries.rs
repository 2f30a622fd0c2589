//! Country calibration table
//!
//! Maps a country code to the statistical-life, life-expectancy and consumption inputs
//! used for calibration. Defaults are built in; a CSV file with the columns
//! `code,statistical_life_value,life_expectancy_years,consumption_per_capita`
//! can replace them.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use log::debug;

use super::calibration::CalibrationInputs;
use crate::error::{ModelError, Result};

/// Default path to the country calibration CSV
pub const DEFAULT_COUNTRIES_PATH: &str = "data/countries.csv";

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    code: String,
    statistical_life_value: f64,
    life_expectancy_years: f64,
    consumption_per_capita: f64,
}

/// Calibration inputs keyed by country code
#[derive(Debug, Clone)]
pub struct CountryTable {
    entries: HashMap<String, CalibrationInputs>,
}

impl CountryTable {
    /// Built-in UK and US calibrations
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "UK".to_string(),
            // J-value VSL; the VPF alternative is 1,800,000
            CalibrationInputs {
                statistical_life_value: 8_590_000.0,
                life_expectancy_years: 41.0,
                consumption_per_capita: 25_373.0,
            },
        );
        entries.insert(
            "US".to_string(),
            CalibrationInputs {
                statistical_life_value: 10_000_000.0,
                life_expectancy_years: 40.0,
                consumption_per_capita: 41_666.6666666,
            },
        );
        Self { entries }
    }

    /// Load the default CSV (data/countries.csv)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_COUNTRIES_PATH))
    }

    /// Load a country table from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a country table from any CSV reader
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut entries = HashMap::new();

        for result in reader.deserialize() {
            let row: CsvRow = result?;
            let inputs = CalibrationInputs::new(
                row.statistical_life_value,
                row.life_expectancy_years,
                row.consumption_per_capita,
            )?;
            debug!("Loaded calibration for {}: {:?}", row.code, inputs);
            entries.insert(row.code.trim().to_string(), inputs);
        }

        Ok(Self { entries })
    }

    /// Look up a country; unknown codes are an error, never a zeroed default
    pub fn lookup(&self, code: &str) -> Result<CalibrationInputs> {
        self.entries
            .get(code)
            .copied()
            .ok_or_else(|| ModelError::UnknownCountry(code.to_string()))
    }

    /// Available country codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::builtin()
    }
}
