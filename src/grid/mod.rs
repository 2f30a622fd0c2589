//! Parameter grids and their evaluation

mod evaluator;
pub mod params;

pub use evaluator::{
    evaluate_consumption_grid, evaluate_cutoff_grid, ConsumptionRow, CutoffRow, GridEvaluator,
};
pub use params::{
    ConsumptionGridConfig, CurveConfig, CutoffGridConfig, ModelConfig,
    DEFAULT_INITIAL_CONSUMPTION, NEAR_LOG_GAMMA,
};
