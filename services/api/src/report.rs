use crate::infra::{parse_seniority, parse_variant};
use clap::Args;
use std::io::Write;
use vacancy_desk::config::AppConfig;
use vacancy_desk::error::AppError;
use vacancy_desk::workflows::sourcing::{
    compare_channels, SourcingComparison, SourcingConfig, SourcingScenario,
};
use vacancy_desk::workflows::vacancy_cost::{
    cost_table, estimate, format_eur, write_csv, DisplayedEstimate, EstimatorVariant, Seniority,
    VacancyEstimate, VacancyEstimateInput,
};

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Annual gross salary in euros
    #[arg(long)]
    pub(crate) salary: i64,
    /// Seniority level (junior, senior, lead)
    #[arg(long, value_parser = parse_seniority)]
    pub(crate) seniority: Seniority,
    /// Vacancy duration in the variant's unit (days or months)
    #[arg(long)]
    pub(crate) duration: i64,
    /// Estimator preset; defaults to VACANCY_COST_VARIANT
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<EstimatorVariant>,
}

#[derive(Args, Debug)]
pub(crate) struct TableArgs {
    /// Annual gross salary in euros
    #[arg(long)]
    pub(crate) salary: i64,
    /// Seniority level (junior, senior, lead)
    #[arg(long, value_parser = parse_seniority)]
    pub(crate) seniority: Seniority,
    /// Estimator preset; defaults to VACANCY_COST_VARIANT
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<EstimatorVariant>,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Number of open positions (1-10)
    #[arg(long, default_value_t = 3)]
    pub(crate) positions: i64,
    /// Internal HR hourly rate in euros (30-80)
    #[arg(long, default_value_t = 45)]
    pub(crate) hourly_rate: i64,
    /// Current time to hire in days (30-200)
    #[arg(long, default_value_t = 120)]
    pub(crate) time_to_hire: i64,
    /// Seniority level (junior, senior, lead)
    #[arg(long, value_parser = parse_seniority, default_value = "senior")]
    pub(crate) seniority: Seniority,
}

fn resolve_variant(explicit: Option<EstimatorVariant>) -> Result<EstimatorVariant, AppError> {
    match explicit {
        Some(variant) => Ok(variant),
        None => Ok(AppConfig::load()?.estimator.variant),
    }
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        salary,
        seniority,
        duration,
        variant,
    } = args;

    let variant = resolve_variant(variant)?;
    let estimate = estimate(
        &VacancyEstimateInput::new(salary, seniority, duration),
        &variant.config(),
    );
    let display = DisplayedEstimate::from_estimate(&estimate);

    let mut out = std::io::stdout().lock();
    render_estimate(&mut out, variant, &estimate, &display)?;
    Ok(())
}

pub(crate) fn run_table(args: TableArgs) -> Result<(), AppError> {
    let variant = resolve_variant(args.variant)?;
    let rows = cost_table(args.salary, args.seniority, &variant.config());
    write_csv(&rows, std::io::stdout().lock())?;
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let scenario = SourcingScenario {
        open_positions: args.positions,
        hr_hourly_rate: args.hourly_rate,
        current_time_to_hire_days: args.time_to_hire,
        seniority: args.seniority,
    };
    let comparison = compare_channels(scenario, &SourcingConfig::default());

    let mut out = std::io::stdout().lock();
    render_comparison(&mut out, &comparison)?;
    Ok(())
}

pub(crate) fn render_estimate<W: Write>(
    out: &mut W,
    variant: EstimatorVariant,
    estimate: &VacancyEstimate,
    display: &DisplayedEstimate,
) -> std::io::Result<()> {
    writeln!(out, "Cost of vacancy ({})", variant.key())?;
    writeln!(
        out,
        "- {} {} | annual salary {} | {} {} ({} working days)",
        estimate.seniority,
        format_factor(estimate.seniority_factor),
        format_eur(estimate.annual_salary),
        estimate.duration,
        estimate.duration_unit.label(estimate.duration),
        estimate.vacancy_days
    )?;
    writeln!(out, "- Daily cost: {}", format_eur(display.daily_cost))?;
    writeln!(out, "- Total: {}", display.formatted_total)?;
    writeln!(out, "Breakdown:")?;
    for bucket in &display.breakdown {
        writeln!(
            out,
            "  - {} ({}%): {}",
            bucket.label, bucket.percent, bucket.formatted
        )?;
    }

    if let Some(comparison) = &display.comparison {
        writeln!(
            out,
            "With a specialist ({} days): {} | savings {}",
            comparison.reference_days, comparison.formatted_cost, comparison.formatted_savings
        )?;
    }

    Ok(())
}

fn format_factor(factor: f64) -> String {
    format!("×{factor}")
}

pub(crate) fn render_comparison<W: Write>(
    out: &mut W,
    comparison: &SourcingComparison,
) -> std::io::Result<()> {
    let scenario = &comparison.scenario;
    writeln!(
        out,
        "Sourcing comparison: {} open {} position(s) | HR rate {} €/h | current time to hire {} days",
        scenario.open_positions,
        scenario.seniority,
        scenario.hr_hourly_rate,
        scenario.current_time_to_hire_days
    )?;
    for quote in &comparison.quotes {
        let mut tags = Vec::new();
        if quote.channel == comparison.cheapest {
            tags.push("cheapest");
        }
        if quote.channel == comparison.fastest {
            tags.push("fastest");
        }
        if quote.channel == comparison.recommendation {
            tags.push("recommended");
        }
        let suffix = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };
        writeln!(
            out,
            "- {}: {} | {} | {}% success{}",
            quote.label,
            format_eur(quote.cost),
            quote.time_to_hire_label,
            quote.success_rate_percent,
            suffix
        )?;
    }
    Ok(())
}
