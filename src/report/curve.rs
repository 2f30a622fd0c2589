//! Value-of-life curve v(c) for several risk-aversion values
//!
//! Each curve is calibrated so that v(c0) = 6. Points are written as CSV with one
//! column per γ, ready for plotting elsewhere.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use super::tables::format_gamma;
use crate::error::Result;
use crate::grid::CurveConfig;
use crate::model::{calibrate_for_life_value_plot, value_of_life, LIFE_VALUE_TARGET};

/// Label of the highlighted point (c0, v(c0))
pub const REFERENCE_POINT_LABEL: &str = "U.S. average today";

/// Sampled value-of-life curves sharing one consumption grid
#[derive(Debug, Clone)]
pub struct ValueOfLifeCurve {
    pub gammas: Vec<f64>,
    pub consumption: Vec<f64>,
    /// `values[i][j]` is v(consumption[j]) for gammas[i]
    pub values: Vec<Vec<f64>>,
    pub reference_point: (f64, f64),
}

/// `points` evenly spaced samples from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

impl ValueOfLifeCurve {
    /// Sample every configured γ over the consumption range
    pub fn sample(config: &CurveConfig, c0: f64) -> Result<Self> {
        let consumption = linspace(config.c_min, config.c_max, config.points);

        let values = config
            .gammas
            .iter()
            .map(|&gamma| {
                let u_bar = calibrate_for_life_value_plot(gamma, c0)?;
                consumption
                    .iter()
                    .map(|&c| value_of_life(c, gamma, u_bar))
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<Vec<f64>>>>()?;

        Ok(Self {
            gammas: config.gammas.clone(),
            consumption,
            values,
            reference_point: (c0, LIFE_VALUE_TARGET),
        })
    }

    /// Write `consumption,gamma_1,gamma_2,...` rows
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);

        let mut header = vec!["consumption".to_string()];
        header.extend(self.gammas.iter().map(|&g| format!("gamma_{}", format_gamma(g))));
        writer.write_record(&header)?;

        for (j, c) in self.consumption.iter().enumerate() {
            let mut record = vec![format!("{:.6}", c)];
            record.extend(self.values.iter().map(|curve| format!("{:.6}", curve[j])));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the curve CSV to a file
    pub fn write_csv_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)?;
        info!(
            "Wrote value-of-life curve ({} points x {} gammas) to {}",
            self.consumption.len(),
            self.gammas.len(),
            path.display()
        );
        Ok(())
    }
}
