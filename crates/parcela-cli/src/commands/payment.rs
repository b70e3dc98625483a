use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;

use parcela_core::report::{self, ReportInput};
use parcela_core::schedule::{self, ScheduleInput};
use parcela_core::summary::{self, SummaryInput};
use parcela_core::types::{MoneyInput, PaymentConfig, PaymentMethod, PaymentSummary};
use parcela_core::validation;

use crate::input;

#[derive(Debug, Clone, ValueEnum)]
pub enum MethodArg {
    /// Installment payment (PARCELADO)
    Parcelado,
    /// Single cash payment (A_VISTA)
    AVista,
}

impl From<MethodArg> for PaymentMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Parcelado => PaymentMethod::Installment,
            MethodArg::AVista => PaymentMethod::Cash,
        }
    }
}

/// Payment configuration flags, shared by every subcommand. A JSON
/// configuration from `--input` or piped stdin takes precedence over the
/// individual flags.
#[derive(Args)]
pub struct ConfigArgs {
    /// Reference amount ("1000.50" or Brazilian currency text "R$ 1.234,56")
    #[arg(long, default_value = "1")]
    pub value: String,

    /// Payment method
    #[arg(long, value_enum, default_value = "parcelado")]
    pub method: MethodArg,

    /// Number of installments (0 = cash-only)
    #[arg(long, default_value = "1")]
    pub installments: i32,

    /// Due date of the down-payment entry (defaults to today)
    #[arg(long)]
    pub entry_date: Option<NaiveDate>,

    /// Down payment in percent of the total
    #[arg(long, default_value = "0")]
    pub down_payment: Decimal,

    /// Financial discount in percent of the subtotal
    #[arg(long, default_value = "0")]
    pub discount: Decimal,

    /// Days between installments
    #[arg(long, default_value = "30")]
    pub interval: i32,

    /// Days from today to the first installment's base date
    #[arg(long, default_value = "0")]
    pub first_term: i64,

    /// Fixed due day-of-month, 1-31 (0 = use the day interval)
    #[arg(long, default_value = "0")]
    pub due_day: i32,

    /// Payment channel label stamped on every entry
    #[arg(long, default_value = "Boleto")]
    pub channel: String,

    /// Reference date for schedule generation (defaults to the current date)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Path to a JSON configuration file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Resolve the configuration: `--input` file, then piped stdin JSON, then
/// the individual flags. Returns the configuration and the reference date.
fn load_config(args: &ConfigArgs) -> Result<(PaymentConfig, NaiveDate), Box<dyn std::error::Error>> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    if let Some(ref path) = args.input {
        let config: PaymentConfig = input::read_json(path)?;
        return Ok((config, today));
    }
    if let Some(config) = input::read_stdin::<PaymentConfig>()? {
        return Ok((config, today));
    }

    let config = PaymentConfig {
        reference_value: money_input(&args.value),
        payment_method: args.method.clone().into(),
        installments: args.installments,
        entry_date: args.entry_date.unwrap_or(today),
        down_payment: args.down_payment,
        discount: args.discount,
        installment_interval: args.interval,
        first_installment_term: args.first_term,
        due_day: args.due_day,
        default_payment_method: args.channel.clone(),
    };
    Ok((config, today))
}

/// Plain decimal text stays an amount; anything else (currency symbols,
/// comma decimals) is handed to the core's Brazilian-format parser.
fn money_input(raw: &str) -> MoneyInput {
    match Decimal::from_str(raw) {
        Ok(amount) => MoneyInput::Amount(amount),
        Err(_) => MoneyInput::Text(raw.to_string()),
    }
}

fn summary_input(config: &PaymentConfig) -> SummaryInput {
    SummaryInput {
        reference_value: config.reference_value.clone(),
        discount: config.discount,
        down_payment: config.down_payment,
    }
}

/// Validate, refusing on the first finding (interactive contract), then
/// compute the summary.
fn checked_summary(
    config: &PaymentConfig,
) -> Result<PaymentSummary, Box<dyn std::error::Error>> {
    let errors = validation::validate_payment(config);
    if let Some(first) = errors.first() {
        return Err(format!("{}: {}", first.field, first.message).into());
    }
    Ok(summary::build_summary(&summary_input(config))?.result)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (config, _) = load_config(&args.config)?;
    let errors = validation::validate_payment(&config);
    // Findings are data: report them on stdout with exit code 0.
    Ok(json!({
        "result": {
            "valid": errors.is_empty(),
            "errors": errors,
        }
    }))
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (config, _) = load_config(&args.config)?;
    let output = summary::build_summary(&summary_input(&config))?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (config, today) = load_config(&args.config)?;
    let summary = checked_summary(&config)?;
    let output = schedule::generate_schedule(&ScheduleInput {
        config,
        total: summary.total,
        cash_value: summary.cash_value,
        today,
    })?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (config, today) = load_config(&args.config)?;
    let summary = checked_summary(&config)?;
    let schedule = schedule::generate_schedule(&ScheduleInput {
        config: config.clone(),
        total: summary.total,
        cash_value: summary.cash_value,
        today,
    })?
    .result;
    let output = report::render_report(&ReportInput {
        config,
        summary,
        installments: schedule.installments,
    })?;
    Ok(serde_json::to_value(output)?)
}
