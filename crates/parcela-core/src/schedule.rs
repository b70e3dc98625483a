//! Installment schedule generation.
//!
//! Given a validated configuration plus the derived total and cash value,
//! produce the ordered payment sequence: an optional down-payment entry due
//! on the entry date, followed by the installments. Due dates come in two
//! modes: interval mode spaces installments a fixed number of days apart;
//! fixed-day mode pins every installment to the same day-of-month, clamping
//! to the last day when the target month is too short (day 31 in February
//! becomes the 28th or 29th).
//!
//! The reference date ("today") is an explicit input so output is
//! deterministic and testable; the generator never reads the system clock.

use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ParcelaError;
use crate::types::{
    with_metadata, ComputationOutput, Installment, Money, PaymentConfig, CASH_ENTRY_ID,
};
use crate::ParcelaResult;

/// Days treated as one calendar month when coercing the interval to months
/// in fixed-day mode.
const DAYS_PER_MONTH: i32 = 30;

/// Input for schedule generation. `total` and `cash_value` come from the
/// payment summary; the configuration is assumed to have passed validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInput {
    pub config: PaymentConfig,
    pub total: Money,
    pub cash_value: Money,
    /// Reference date used to resolve `firstInstallmentTerm`.
    pub today: NaiveDate,
}

/// A generated schedule plus its derived figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutput {
    pub installments: Vec<Installment>,
    /// Even division of the financed amount, rounded to cents.
    pub installment_value: Money,
    /// What the rounding left over; never redistributed.
    pub rounding_residue: Money,
}

/// Generate the ordered installment sequence.
///
/// The down-payment entry (id `"cash"`) is prepended whenever the configured
/// down payment is positive. With zero installments the sequence is the cash
/// entry alone, or empty. The financed amount is divided evenly; the residue
/// of rounding to cents is reported, not redistributed.
pub fn generate_schedule(input: &ScheduleInput) -> ParcelaResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let config = &input.config;
    let mut warnings = Vec::new();
    let mut installments = Vec::new();

    if config.down_payment > Decimal::ZERO {
        installments.push(Installment {
            id: CASH_ENTRY_ID.to_string(),
            description: "À vista".to_string(),
            value: input.cash_value,
            due_date: config.entry_date,
            payment_method: config.default_payment_method.clone(),
        });
    }

    if config.installments <= 0 {
        let result = ScheduleOutput {
            installments,
            installment_value: Decimal::ZERO,
            rounding_residue: Decimal::ZERO,
        };
        return Ok(with_metadata(
            METHODOLOGY,
            input,
            warnings,
            start.elapsed().as_micros() as u64,
            result,
        ));
    }

    let count = config.installments;
    let remaining = input.total - input.cash_value;
    let installment_value = (remaining / Decimal::from(count)).round_dp(2);
    let rounding_residue = remaining - installment_value * Decimal::from(count);
    if !rounding_residue.is_zero() {
        warnings.push(format!(
            "even division leaves a residue of {rounding_residue}; it is not redistributed"
        ));
    }

    let due_day = fixed_due_day(config.due_day);
    let mut base_date = add_days(input.today, config.first_installment_term)?;
    if let Some(day) = due_day {
        // Fixed-day schedules start in the month after the base date.
        let shifted = add_months(base_date, 1)?;
        base_date = day_in_month_or_last(shifted.year(), shifted.month(), day)?;

        if config.installment_interval < DAYS_PER_MONTH && count > 1 {
            warnings.push(format!(
                "installment interval of {} days coerces to 0 months; all fixed-day due dates \
                 fall in the same month",
                config.installment_interval
            ));
        }
    }

    for i in 1..=count {
        let due_date = match due_day {
            Some(day) => {
                // Interval coerced to whole months by floor division.
                let months_to_add = (i - 1) * (config.installment_interval / DAYS_PER_MONTH);
                let shifted = add_months(base_date, months_to_add)?;
                day_in_month_or_last(shifted.year(), shifted.month(), day)?
            }
            None => {
                let offset = i64::from(i) * i64::from(config.installment_interval);
                add_days(base_date, offset)?
            }
        };

        installments.push(Installment {
            id: format!("installment-{i}"),
            description: format!("{i}ª parcela"),
            value: installment_value,
            due_date,
            payment_method: config.default_payment_method.clone(),
        });
    }

    let result = ScheduleOutput {
        installments,
        installment_value,
        rounding_residue,
    };

    Ok(with_metadata(
        METHODOLOGY,
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

const METHODOLOGY: &str =
    "Even division of the financed amount; interval or fixed-day due dates with end-of-month clamp";

/// The fixed due day, if one is configured (1-31). Zero means unset.
fn fixed_due_day(due_day: i32) -> Option<u32> {
    if (1..=31).contains(&due_day) {
        Some(due_day as u32)
    } else {
        None
    }
}

fn add_days(date: NaiveDate, days: i64) -> ParcelaResult<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| ParcelaError::DateError(format!("date out of range adding {days} days")))
}

fn add_months(date: NaiveDate, months: i32) -> ParcelaResult<NaiveDate> {
    let months = u32::try_from(months)
        .map_err(|_| ParcelaError::DateError(format!("negative month offset {months}")))?;
    date.checked_add_months(Months::new(months)).ok_or_else(|| {
        ParcelaError::DateError(format!("date out of range adding {months} months"))
    })
}

/// The requested day in the given month, or the month's last day when the
/// day does not exist there (the end-of-month clamp).
fn day_in_month_or_last(year: i32, month: u32, day: u32) -> ParcelaResult<NaiveDate> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        return Ok(date);
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ParcelaError::DateError(format!("invalid month {year}-{month:02}")))?;
    let next_month = add_months(first, 1)?;
    add_days(next_month, -1)
}
