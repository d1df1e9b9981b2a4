use crate::report::{run_compare, run_estimate, run_table, CompareArgs, EstimateArgs, TableArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vacancy_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Vacancy Desk",
    about = "Serve the cost-of-vacancy estimator and contact relay, or run the calculators from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate what an open position costs and print the breakdown
    Estimate(EstimateArgs),
    /// Write the cost for every vacancy duration step as CSV to stdout
    Table(TableArgs),
    /// Compare in-house sourcing, freelancer and headhunter costs
    Compare(CompareArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Table(args) => run_table(args),
        Command::Compare(args) => run_compare(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn estimate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "vacancy-desk",
            "estimate",
            "--salary",
            "75000",
            "--seniority",
            "senior",
            "--duration",
            "3",
            "--variant",
            "executive-search",
        ])
        .expect("valid arguments");

        match cli.command {
            Some(Command::Estimate(args)) => {
                assert_eq!(args.salary, 75_000);
                assert_eq!(args.duration, 3);
                assert!(args.variant.is_some());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_seniority_is_rejected() {
        let result = Cli::try_parse_from([
            "vacancy-desk",
            "table",
            "--salary",
            "75000",
            "--seniority",
            "intern",
        ]);
        assert!(result.is_err());
    }
}
