mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::payment::{ReportArgs, ScheduleArgs, SummaryArgs, ValidateArgs};

/// Installment payment schedule calculations
#[derive(Parser)]
#[command(
    name = "parcela",
    version,
    about = "Installment payment schedule calculations",
    long_about = "Computes installment payment breakdowns with decimal precision: \
                  field validation, subtotal/discount/total summary, due-date \
                  schedules (day intervals or a fixed day-of-month with \
                  end-of-month clamping) and a copyable text report."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a payment configuration against its domain constraints
    Validate(ValidateArgs),
    /// Compute subtotal, financial discount, total and cash value
    Summary(SummaryArgs),
    /// Generate the installment schedule
    Schedule(ScheduleArgs),
    /// Generate the copyable text report
    Report(ReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Validate(args) => commands::payment::run_validate(args),
        Commands::Summary(args) => commands::payment::run_summary(args),
        Commands::Schedule(args) => commands::payment::run_schedule(args),
        Commands::Report(args) => commands::payment::run_report(args),
        Commands::Version => {
            println!("parcela {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
