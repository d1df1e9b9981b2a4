use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Junior,
    Senior,
    Lead,
}

impl Seniority {
    pub const fn ordered() -> [Self; 3] {
        [Self::Junior, Self::Senior, Self::Lead]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "junior" => Some(Self::Junior),
            "senior" => Some(Self::Senior),
            "lead" => Some(Self::Lead),
            _ => None,
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit in which a landing-page variant asks for the vacancy duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Days,
    Months,
}

impl DurationUnit {
    pub const fn label(self, count: i64) -> &'static str {
        match (self, count) {
            (Self::Days, 1) => "day",
            (Self::Days, _) => "days",
            (Self::Months, 1) => "month",
            (Self::Months, _) => "months",
        }
    }
}

/// Named cause a share of the vacancy cost is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostBucketKind {
    Productivity,
    Direct,
    Opportunity,
}

impl CostBucketKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Productivity => "Lost productivity",
            Self::Direct => "Direct recruiting cost",
            Self::Opportunity => "Opportunity cost",
        }
    }
}

/// Raw calculator input as the form delivers it. Out-of-range values are clamped
/// by the estimator rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyEstimateInput {
    pub annual_salary: i64,
    pub seniority: Seniority,
    pub vacancy_duration: i64,
}

impl VacancyEstimateInput {
    pub const fn new(annual_salary: i64, seniority: Seniority, vacancy_duration: i64) -> Self {
        Self {
            annual_salary,
            seniority,
            vacancy_duration,
        }
    }
}
