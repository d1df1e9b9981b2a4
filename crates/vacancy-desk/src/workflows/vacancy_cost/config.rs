use serde::{Deserialize, Serialize};

use super::domain::{CostBucketKind, DurationUnit, Seniority};

pub const WORKING_DAYS_PER_YEAR: f64 = 220.0;
pub const WORKING_DAYS_PER_MONTH: i64 = 22;
pub const SPECIALIST_TIME_TO_HIRE_DAYS: i64 = 42;

/// Upper bounds accepted by [`EstimatorConfig::validate`]. They keep every
/// intermediate figure far below the `i64` range.
pub const MAX_WORKING_DAYS_PER_YEAR: f64 = 366.0;
pub const MAX_WORKING_DAYS_PER_MONTH: i64 = 31;
pub const MAX_SALARY_CEILING: i64 = 10_000_000;
pub const MAX_DURATION_DAYS: i64 = 366;
pub const MAX_DURATION_MONTHS: i64 = 120;
pub const MAX_COMPARISON_DAYS: i64 = 366;
pub const MAX_SENIORITY_FACTOR: f64 = 10.0;

/// Multipliers reflecting how much more a senior vacancy costs per open day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeniorityFactors {
    pub junior: f64,
    pub senior: f64,
    pub lead: f64,
}

impl SeniorityFactors {
    pub fn factor(&self, seniority: Seniority) -> f64 {
        match seniority {
            Seniority::Junior => self.junior,
            Seniority::Senior => self.senior,
            Seniority::Lead => self.lead,
        }
    }
}

impl Default for SeniorityFactors {
    fn default() -> Self {
        Self {
            junior: 1.0,
            senior: 1.5,
            lead: 2.0,
        }
    }
}

/// Slider bounds for the vacancy duration, expressed in the variant's unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    pub unit: DurationUnit,
    pub min: i64,
    pub max: i64,
}

impl DurationRange {
    pub const fn days(min: i64, max: i64) -> Self {
        Self {
            unit: DurationUnit::Days,
            min,
            max,
        }
    }

    pub const fn months(min: i64, max: i64) -> Self {
        Self {
            unit: DurationUnit::Months,
            min,
            max,
        }
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Longest duration a range of this unit may allow.
    pub const fn limit(&self) -> i64 {
        match self.unit {
            DurationUnit::Days => MAX_DURATION_DAYS,
            DurationUnit::Months => MAX_DURATION_MONTHS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownShare {
    pub kind: CostBucketKind,
    pub percent: u8,
}

impl BreakdownShare {
    pub const fn new(kind: CostBucketKind, percent: u8) -> Self {
        Self { kind, percent }
    }
}

/// Constants that differ between the landing-page calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub working_days_per_year: f64,
    pub working_days_per_month: i64,
    pub salary_ceiling: i64,
    pub duration: DurationRange,
    pub factors: SeniorityFactors,
    pub breakdown: Vec<BreakdownShare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_days: Option<i64>,
}

impl EstimatorConfig {
    /// Day-based slider calculator (7 to 180 days, 300k salary ceiling).
    ///
    /// The 50/30/20 breakdown is a placeholder table until the product
    /// settles on its own split.
    pub fn calculator() -> Self {
        Self {
            working_days_per_year: WORKING_DAYS_PER_YEAR,
            working_days_per_month: WORKING_DAYS_PER_MONTH,
            salary_ceiling: 300_000,
            duration: DurationRange::days(7, 180),
            factors: SeniorityFactors::default(),
            breakdown: vec![
                BreakdownShare::new(CostBucketKind::Productivity, 50),
                BreakdownShare::new(CostBucketKind::Direct, 30),
                BreakdownShare::new(CostBucketKind::Opportunity, 20),
            ],
            comparison_days: None,
        }
    }

    /// Month-based calculator (1 to 12 months, 500k salary ceiling) with the
    /// 42-day specialist comparison.
    ///
    /// The 45/35/20 breakdown is a placeholder table, not taken from a live page.
    pub fn landing_page() -> Self {
        Self {
            working_days_per_year: WORKING_DAYS_PER_YEAR,
            working_days_per_month: WORKING_DAYS_PER_MONTH,
            salary_ceiling: 500_000,
            duration: DurationRange::months(1, 12),
            factors: SeniorityFactors::default(),
            breakdown: vec![
                BreakdownShare::new(CostBucketKind::Productivity, 45),
                BreakdownShare::new(CostBucketKind::Direct, 35),
                BreakdownShare::new(CostBucketKind::Opportunity, 20),
            ],
            comparison_days: Some(SPECIALIST_TIME_TO_HIRE_DAYS),
        }
    }

    /// Placeholder table for leadership hiring: the month-based calculator
    /// with lead vacancies weighted at 2.5x and a 40/35/25 breakdown.
    pub fn executive_search() -> Self {
        Self {
            factors: SeniorityFactors {
                lead: 2.5,
                ..SeniorityFactors::default()
            },
            breakdown: vec![
                BreakdownShare::new(CostBucketKind::Productivity, 40),
                BreakdownShare::new(CostBucketKind::Opportunity, 35),
                BreakdownShare::new(CostBucketKind::Direct, 25),
            ],
            ..Self::landing_page()
        }
    }

    pub fn for_variant(variant: EstimatorVariant) -> Self {
        match variant {
            EstimatorVariant::Calculator => Self::calculator(),
            EstimatorVariant::LandingPage => Self::landing_page(),
            EstimatorVariant::ExecutiveSearch => Self::executive_search(),
        }
    }

    pub fn validate(&self) -> Result<(), EstimatorConfigError> {
        if !(1.0..=MAX_WORKING_DAYS_PER_YEAR).contains(&self.working_days_per_year) {
            return Err(EstimatorConfigError::WorkingDaysPerYear(
                self.working_days_per_year,
            ));
        }
        if !(1..=MAX_WORKING_DAYS_PER_MONTH).contains(&self.working_days_per_month) {
            return Err(EstimatorConfigError::WorkingDaysPerMonth(
                self.working_days_per_month,
            ));
        }
        if !(0..=MAX_SALARY_CEILING).contains(&self.salary_ceiling) {
            return Err(EstimatorConfigError::SalaryCeiling(self.salary_ceiling));
        }
        if self.duration.min < 1 || self.duration.min > self.duration.max {
            return Err(EstimatorConfigError::DurationRange {
                min: self.duration.min,
                max: self.duration.max,
            });
        }
        if self.duration.max > self.duration.limit() {
            return Err(EstimatorConfigError::DurationTooLong {
                unit: self.duration.unit,
                max: self.duration.max,
                limit: self.duration.limit(),
            });
        }

        let factors = [self.factors.junior, self.factors.senior, self.factors.lead];
        if factors
            .iter()
            .any(|factor| !(0.0..=MAX_SENIORITY_FACTOR).contains(factor))
            || factors.windows(2).any(|pair| pair[0] > pair[1])
        {
            return Err(EstimatorConfigError::Factors(self.factors));
        }

        if self.breakdown.iter().any(|share| share.percent == 0) {
            return Err(EstimatorConfigError::EmptyShare);
        }
        for (index, share) in self.breakdown.iter().enumerate() {
            if self.breakdown[..index]
                .iter()
                .any(|earlier| earlier.kind == share.kind)
            {
                return Err(EstimatorConfigError::DuplicateBucket(share.kind));
            }
        }
        let total: u32 = self
            .breakdown
            .iter()
            .map(|share| u32::from(share.percent))
            .sum();
        if total != 100 {
            return Err(EstimatorConfigError::SharesTotal(total));
        }

        if let Some(days) = self.comparison_days {
            if !(1..=MAX_COMPARISON_DAYS).contains(&days) {
                return Err(EstimatorConfigError::ComparisonDays(days));
            }
        }

        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::landing_page()
    }
}

/// Named constant tables; which one is authoritative is a product decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorVariant {
    Calculator,
    #[default]
    LandingPage,
    ExecutiveSearch,
}

impl EstimatorVariant {
    pub const fn ordered() -> [Self; 3] {
        [Self::Calculator, Self::LandingPage, Self::ExecutiveSearch]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::LandingPage => "landing_page",
            Self::ExecutiveSearch => "executive_search",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|variant| variant.key() == normalized)
    }

    pub fn config(self) -> EstimatorConfig {
        EstimatorConfig::for_variant(self)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimatorConfigError {
    #[error("working days per year must be within 1..=366, got {0}")]
    WorkingDaysPerYear(f64),
    #[error("working days per month must be within 1..=31, got {0}")]
    WorkingDaysPerMonth(i64),
    #[error("salary ceiling must be within 0..=10000000, got {0}")]
    SalaryCeiling(i64),
    #[error("duration range {min}..={max} is empty or starts below 1")]
    DurationRange { min: i64, max: i64 },
    #[error("duration range may not exceed {limit} {unit:?}, got {max}")]
    DurationTooLong {
        unit: DurationUnit,
        max: i64,
        limit: i64,
    },
    #[error("seniority factors must be within 0..=10 and ordered junior <= senior <= lead: {0:?}")]
    Factors(SeniorityFactors),
    #[error("breakdown shares must each be positive")]
    EmptyShare,
    #[error("breakdown bucket {0:?} listed twice")]
    DuplicateBucket(CostBucketKind),
    #[error("breakdown shares must total 100 percent, got {0}")]
    SharesTotal(u32),
    #[error("comparison duration must be within 1..=366 days, got {0}")]
    ComparisonDays(i64),
}
