//! `calc` - command-line front end for the calculator module.
//!
//! Configuration is layered:
//! 1) defaults -> 2) YAML (`--config`) -> 3) env (`CALC__*`) -> 4) CLI overrides

mod config;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::{Result, bail};
use calculator::{CalculatorClientV1, CalculatorError, CalculatorLocalClient, Operation};
use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, CliOverrides, OutputFormat};
use crate::output::{IS_PRIME, Report};

/// Four-function calculator
#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Four-function calculator with percentage and primality helpers")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format override
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Fixed decimal places for text output
    #[arg(long)]
    precision: Option<usize>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two numbers
    Add(Operands),
    /// Subtract B from A
    Subtract(Operands),
    /// Multiply two numbers
    Multiply(Operands),
    /// Divide A by B
    Divide(Operands),
    /// Compute PERCENT percent of NUMBER
    Percentage(PercentageArgs),
    /// Check whether N is prime
    IsPrime(PrimeArgs),
}

#[derive(Args)]
struct Operands {
    #[arg(allow_negative_numbers = true)]
    a: f64,
    #[arg(allow_negative_numbers = true)]
    b: f64,
}

#[derive(Args)]
struct PercentageArgs {
    #[arg(allow_negative_numbers = true)]
    number: f64,
    #[arg(allow_negative_numbers = true)]
    percent: f64,
}

#[derive(Args)]
struct PrimeArgs {
    #[arg(allow_negative_numbers = true)]
    n: i64,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            verbose: self.verbose,
            format: self.format,
            precision: self.precision,
        }
    }
}

impl Commands {
    fn execute(self, client: &dyn CalculatorClientV1) -> Result<Report, CalculatorError> {
        let (operation, a, b) = match self {
            Self::Add(Operands { a, b }) => (Operation::Add, a, b),
            Self::Subtract(Operands { a, b }) => (Operation::Subtract, a, b),
            Self::Multiply(Operands { a, b }) => (Operation::Multiply, a, b),
            Self::Divide(Operands { a, b }) => (Operation::Divide, a, b),
            Self::Percentage(PercentageArgs { number, percent }) => {
                (Operation::Percentage, number, percent)
            }
            Self::IsPrime(PrimeArgs { n }) => {
                return Ok(Report::Primality {
                    operation: IS_PRIME,
                    n,
                    result: client.is_prime(n)?,
                });
            }
        };

        let result = client.evaluate(operation, a, b)?;
        Ok(Report::Arithmetic {
            operation,
            a,
            b,
            result,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&cli.overrides());

    logging::init_logging(&config.logging)?;

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("no command given; run `calc --help` for usage");
    };

    let client = CalculatorLocalClient::default();
    let report = command
        .execute(&client)
        .inspect_err(|e| tracing::error!(error = %e, "calculation failed"))?;

    tracing::debug!(?report, "calculation finished");
    println!("{}", output::render(&report, &config.output)?);
    Ok(())
}
