//! Existential Risk CLI
//!
//! Prints Tables 1-3 and writes the value-of-life curve to CSV

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use existential_risk::report::{
    format_consumption_table, format_cutoff_table, format_social_discount_table,
    REFERENCE_POINT_LABEL,
};
use existential_risk::{
    CountryTable, GridEvaluator, ModelConfig, ModelError, TablesReport, ValueOfLifeCurve,
};

#[derive(Parser, Debug)]
#[command(name = "existential_risk")]
#[command(about = "Optimal consumption, existential risk and welfare cutoff tables")]
struct Args {
    /// Country code used to calibrate Table 1
    #[arg(long, default_value = "UK")]
    country: String,

    /// CSV file replacing the built-in country calibrations
    #[arg(long)]
    countries: Option<PathBuf>,

    /// JSON file overriding grid values and model constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show every evaluated hazard rate in Table 1, not only 1% and 2%
    #[arg(long)]
    all_deltas: bool,

    /// Output CSV for the value-of-life curve
    #[arg(long, default_value = "value_of_life.csv")]
    curve_output: PathBuf,

    /// Skip writing the value-of-life curve
    #[arg(long)]
    no_curve: bool,

    /// Print all results as JSON instead of text tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ModelConfig::from_json_path(path)
            .with_context(|| format!("loading model config from {}", path.display()))?,
        None => ModelConfig::default(),
    };
    if args.all_deltas {
        config.consumption.table_deltas = config.consumption.deltas.clone();
    }

    let countries = match &args.countries {
        Some(path) => CountryTable::from_csv_path(path)
            .with_context(|| format!("loading country calibrations from {}", path.display()))?,
        None => CountryTable::builtin(),
    };

    let calibration = match countries.lookup(&args.country) {
        Ok(inputs) => Some(inputs),
        Err(err @ ModelError::UnknownCountry(_)) => {
            warn!("{}; known countries: {}", err, countries.codes().join(", "));
            eprintln!("Data for {} not available.", args.country);
            None
        }
        Err(err) => return Err(err.into()),
    };

    let evaluator = GridEvaluator::new(config);

    let consumption = calibration
        .as_ref()
        .map(|inputs| evaluator.consumption_table(inputs))
        .transpose()
        .context("evaluating consumption grid")?;
    let cutoffs = evaluator.cutoff_table().context("evaluating cutoff grid")?;
    let (baseline, near_zero) = evaluator
        .social_discount_tables()
        .context("evaluating social discount grids")?;

    let config = evaluator.config();

    if args.json {
        let report = TablesReport {
            country: args.country.clone(),
            value_of_life_year: calibration.map(|inputs| inputs.value_of_life_year()),
            consumption,
            cutoffs,
            social_discount_baseline: baseline,
            social_discount_near_zero: near_zero,
        };
        println!("{}", report.to_json()?);
    } else {
        if let Some(rows) = &consumption {
            print!("{}", format_consumption_table(rows, &config.consumption));
        } else {
            info!("Skipping Table 1: no calibration for {}", args.country);
        }
        print!("{}", format_cutoff_table(&cutoffs, &config.cutoff));
        print!(
            "{}",
            format_social_discount_table(&baseline, &near_zero, &config.cutoff)
        );
    }

    if !args.no_curve {
        let curve = ValueOfLifeCurve::sample(&config.curve, config.initial_consumption)
            .context("sampling value-of-life curve")?;
        curve
            .write_csv_path(&args.curve_output)
            .with_context(|| format!("writing {}", args.curve_output.display()))?;

        if !args.json {
            let (c, v) = curve.reference_point;
            println!(
                "\nValue-of-life curve written to: {} (reference point: {} at c = {}, v = {})",
                args.curve_output.display(),
                REFERENCE_POINT_LABEL,
                c,
                v
            );
        }
    }

    Ok(())
}
