use serde::Serialize;

use super::config::EstimatorConfig;
use super::domain::{CostBucketKind, DurationUnit, Seniority, VacancyEstimateInput};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBucket {
    pub kind: CostBucketKind,
    pub label: &'static str,
    pub percent: u8,
    pub amount: f64,
}

/// Cost of filling the role at the reference time-to-hire instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonEstimate {
    pub reference_days: i64,
    pub cost: f64,
    pub savings: f64,
}

/// Unrounded model output. Rounding belongs to the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyEstimate {
    pub annual_salary: i64,
    pub seniority: Seniority,
    pub seniority_factor: f64,
    pub duration: i64,
    pub duration_unit: DurationUnit,
    pub vacancy_days: i64,
    pub daily_cost: f64,
    pub total_cost: f64,
    pub breakdown: Vec<CostBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonEstimate>,
}

impl VacancyEstimate {
    pub fn bucket(&self, kind: CostBucketKind) -> Option<&CostBucket> {
        self.breakdown.iter().find(|bucket| bucket.kind == kind)
    }

    pub fn comparison_cost(&self) -> Option<f64> {
        self.comparison.map(|comparison| comparison.cost)
    }

    pub fn savings(&self) -> Option<f64> {
        self.comparison.map(|comparison| comparison.savings)
    }
}

/// Cost of leaving a position open: `salary / working days * open days * factor`.
///
/// Inputs outside the configured domain are clamped, so every input yields an
/// estimate. The config is expected to pass [`EstimatorConfig::validate`].
pub fn estimate(input: &VacancyEstimateInput, config: &EstimatorConfig) -> VacancyEstimate {
    let annual_salary = input.annual_salary.clamp(0, config.salary_ceiling.max(0));
    let duration = config.duration.clamp(input.vacancy_duration);
    let vacancy_days = match config.duration.unit {
        DurationUnit::Days => duration,
        DurationUnit::Months => duration.saturating_mul(config.working_days_per_month.max(0)),
    };

    let seniority_factor = config.factors.factor(input.seniority);
    let daily_cost = annual_salary as f64 / config.working_days_per_year;
    let total_cost = cost_for_days(daily_cost, vacancy_days, seniority_factor);

    let breakdown = config
        .breakdown
        .iter()
        .map(|share| CostBucket {
            kind: share.kind,
            label: share.kind.label(),
            percent: share.percent,
            amount: total_cost * f64::from(share.percent) / 100.0,
        })
        .collect();

    let comparison = config.comparison_days.map(|reference_days| {
        let cost = cost_for_days(daily_cost, reference_days, seniority_factor);
        ComparisonEstimate {
            reference_days,
            cost,
            savings: total_cost - cost,
        }
    });

    VacancyEstimate {
        annual_salary,
        seniority: input.seniority,
        seniority_factor,
        duration,
        duration_unit: config.duration.unit,
        vacancy_days,
        daily_cost,
        total_cost,
        breakdown,
        comparison,
    }
}

fn cost_for_days(daily_cost: f64, days: i64, factor: f64) -> f64 {
    daily_cost * days as f64 * factor
}
