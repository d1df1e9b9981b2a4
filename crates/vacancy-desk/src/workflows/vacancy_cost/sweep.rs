use std::io::Write;

use serde::Serialize;

use super::config::EstimatorConfig;
use super::display::round_euros;
use super::domain::{DurationUnit, Seniority, VacancyEstimateInput};
use super::model::estimate;

/// One row of the duration sweep, rounded for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostTableRow {
    pub duration: i64,
    pub unit: DurationUnit,
    pub vacancy_days: i64,
    pub total_cost: i64,
    pub comparison_cost: Option<i64>,
    pub savings: Option<i64>,
}

/// Estimates the vacancy cost for every duration step the variant's slider offers.
pub fn cost_table(
    annual_salary: i64,
    seniority: Seniority,
    config: &EstimatorConfig,
) -> Vec<CostTableRow> {
    (config.duration.min..=config.duration.max)
        .map(|duration| {
            let input = VacancyEstimateInput::new(annual_salary, seniority, duration);
            let estimate = estimate(&input, config);
            let total_cost = round_euros(estimate.total_cost);
            let comparison_cost = estimate.comparison_cost().map(round_euros);

            CostTableRow {
                duration: estimate.duration,
                unit: estimate.duration_unit,
                vacancy_days: estimate.vacancy_days,
                total_cost,
                comparison_cost,
                savings: comparison_cost.map(|cost| total_cost - cost),
            }
        })
        .collect()
}

pub fn write_csv<W: Write>(rows: &[CostTableRow], writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
