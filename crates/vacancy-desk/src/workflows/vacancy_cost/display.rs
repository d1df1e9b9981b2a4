//! Presentation rounding for vacancy estimates.
//!
//! The model keeps full precision; everything here rounds to whole euros and
//! reconciles the breakdown so the displayed buckets add up to the displayed total.

use serde::Serialize;

use super::domain::CostBucketKind;
use super::model::{CostBucket, VacancyEstimate};

const THOUSANDS_SEPARATOR: char = '.';
const NO_BREAK_SPACE: char = '\u{a0}';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedBucket {
    pub kind: CostBucketKind,
    pub label: &'static str,
    pub percent: u8,
    pub amount: i64,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedComparison {
    pub reference_days: i64,
    pub cost: i64,
    pub savings: i64,
    pub formatted_cost: String,
    pub formatted_savings: String,
}

/// Whole-euro view of a [`VacancyEstimate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedEstimate {
    pub daily_cost: i64,
    pub total_cost: i64,
    pub formatted_total: String,
    pub breakdown: Vec<DisplayedBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<DisplayedComparison>,
}

impl DisplayedEstimate {
    pub fn from_estimate(estimate: &VacancyEstimate) -> Self {
        let total_cost = round_euros(estimate.total_cost);
        let amounts = apportion(total_cost, &estimate.breakdown);

        let breakdown = estimate
            .breakdown
            .iter()
            .zip(amounts)
            .map(|(bucket, amount)| DisplayedBucket {
                kind: bucket.kind,
                label: bucket.label,
                percent: bucket.percent,
                amount,
                formatted: format_eur(amount),
            })
            .collect();

        // Savings are derived from the rounded figures so the callout reads consistently.
        let comparison = estimate.comparison.map(|comparison| {
            let cost = round_euros(comparison.cost);
            let savings = total_cost.saturating_sub(cost);
            DisplayedComparison {
                reference_days: comparison.reference_days,
                cost,
                savings,
                formatted_cost: format_eur(cost),
                formatted_savings: format_eur(savings),
            }
        });

        Self {
            daily_cost: round_euros(estimate.daily_cost),
            total_cost,
            formatted_total: format_eur(total_cost),
            breakdown,
            comparison,
        }
    }

    pub fn breakdown_total(&self) -> i64 {
        self.breakdown
            .iter()
            .fold(0_i64, |sum, bucket| sum.saturating_add(bucket.amount))
    }
}

pub fn round_euros(value: f64) -> i64 {
    value.round() as i64
}

/// Largest-remainder apportionment of `total` across the buckets.
///
/// Every bucket starts at the floor of its exact share; the leftover euros go
/// one at a time to the largest fractional remainders, ties to the larger share.
/// Bookkeeping runs in `i128` so totals near `i64::MAX` cannot overflow.
fn apportion(total: i64, buckets: &[CostBucket]) -> Vec<i64> {
    if buckets.is_empty() {
        return Vec::new();
    }

    let total = i128::from(total.max(0));
    let shares: Vec<i128> = buckets
        .iter()
        .map(|bucket| total * i128::from(bucket.percent))
        .collect();
    let mut amounts: Vec<i128> = shares.iter().map(|share| share / 100).collect();

    let mut order: Vec<usize> = (0..buckets.len()).collect();
    order.sort_by(|&a, &b| {
        (shares[b] % 100)
            .cmp(&(shares[a] % 100))
            .then(buckets[b].percent.cmp(&buckets[a].percent))
            .then(a.cmp(&b))
    });

    let leftover = total - amounts.iter().sum::<i128>();
    if leftover > 0 {
        let count = order.len() as i128;
        for (rank, index) in order.iter().enumerate() {
            let extra = leftover / count + i128::from((rank as i128) < leftover % count);
            amounts[*index] += extra;
        }
    }

    amounts
        .into_iter()
        .map(|amount| i64::try_from(amount).unwrap_or(i64::MAX))
        .collect()
}

/// Formats whole euros the way the landing pages do (`de-DE`, no decimals).
pub fn format_eur(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped}{NO_BREAK_SPACE}€")
}
