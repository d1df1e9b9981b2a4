//! Cost-of-vacancy estimation shared by the landing-page calculators.

pub mod config;
pub mod display;
pub mod domain;
pub mod model;
pub mod sweep;
pub mod tween;

pub use config::{
    BreakdownShare, DurationRange, EstimatorConfig, EstimatorConfigError, EstimatorVariant,
    SeniorityFactors,
};
pub use display::{format_eur, DisplayedBucket, DisplayedComparison, DisplayedEstimate};
pub use domain::{CostBucketKind, DurationUnit, Seniority, VacancyEstimateInput};
pub use model::{estimate, ComparisonEstimate, CostBucket, VacancyEstimate};
pub use sweep::{cost_table, write_csv, CostTableRow};
pub use tween::{ease_out_quart, NumberTween, DEFAULT_TWEEN_DURATION};
