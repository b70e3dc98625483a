use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use parcela_core::schedule::{generate_schedule, ScheduleInput};
use parcela_core::summary::{build_summary, SummaryInput};
use parcela_core::types::{MoneyInput, PaymentConfig, CASH_ENTRY_ID};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn base_config() -> PaymentConfig {
    PaymentConfig::with_defaults(date(2026, 1, 15))
}

fn input(config: PaymentConfig, total: Decimal, cash_value: Decimal) -> ScheduleInput {
    ScheduleInput {
        config,
        total,
        cash_value,
        today: date(2026, 1, 15),
    }
}

// ===========================================================================
// Interval mode
// ===========================================================================

#[test]
fn test_four_even_installments_spaced_thirty_days() {
    // referenceValue=1000, discount=0, downPayment=0, installments=4,
    // interval=30, dueDay=0, firstInstallmentTerm=0
    let config = PaymentConfig {
        reference_value: MoneyInput::Amount(dec!(1000)),
        installments: 4,
        ..base_config()
    };
    let output = generate_schedule(&input(config, dec!(1000), dec!(0))).unwrap();
    let schedule = &output.result;

    assert_eq!(schedule.installments.len(), 4);
    assert_eq!(schedule.installment_value, dec!(250.00));
    assert_eq!(schedule.rounding_residue, dec!(0));
    assert!(output.warnings.is_empty());

    let dates: Vec<NaiveDate> = schedule.installments.iter().map(|p| p.due_date).collect();
    assert_eq!(
        dates,
        vec![
            date(2026, 2, 14),
            date(2026, 3, 16),
            date(2026, 4, 15),
            date(2026, 5, 15),
        ]
    );
    for pair in dates.windows(2) {
        assert_eq!((pair[1] - pair[0]).num_days(), 30);
    }

    for (i, installment) in schedule.installments.iter().enumerate() {
        assert_eq!(installment.id, format!("installment-{}", i + 1));
        assert_eq!(installment.description, format!("{}ª parcela", i + 1));
        assert_eq!(installment.value, dec!(250.00));
        assert_eq!(installment.payment_method, "Boleto");
    }
}

#[test]
fn test_first_installment_term_shifts_the_base_date() {
    let config = PaymentConfig {
        installments: 2,
        first_installment_term: 10,
        ..base_config()
    };
    // today 2026-01-15 + 10 days = base 2026-01-25
    let output = generate_schedule(&input(config, dec!(200), dec!(0))).unwrap();
    let dates: Vec<NaiveDate> = output.result.installments.iter().map(|p| p.due_date).collect();
    assert_eq!(dates, vec![date(2026, 2, 24), date(2026, 3, 26)]);
}

#[test]
fn test_cash_entry_precedes_installments() {
    // referenceValue=100, discount=10, downPayment=20, installments=1
    // -> total=90, cash=18, one installment of 72
    let summary = build_summary(&SummaryInput {
        reference_value: MoneyInput::Amount(dec!(100)),
        discount: dec!(10),
        down_payment: dec!(20),
    })
    .unwrap()
    .result;
    assert_eq!(summary.total, dec!(90));
    assert_eq!(summary.cash_value, dec!(18));

    let config = PaymentConfig {
        reference_value: MoneyInput::Amount(dec!(100)),
        discount: dec!(10),
        down_payment: dec!(20),
        installments: 1,
        entry_date: date(2026, 1, 20),
        ..base_config()
    };
    let output = generate_schedule(&input(config, summary.total, summary.cash_value)).unwrap();
    let entries = &output.result.installments;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, CASH_ENTRY_ID);
    assert_eq!(entries[0].description, "À vista");
    assert_eq!(entries[0].value, dec!(18));
    assert_eq!(entries[0].due_date, date(2026, 1, 20));
    assert_eq!(entries[1].id, "installment-1");
    assert_eq!(entries[1].value, dec!(72.00));
}

#[test]
fn test_zero_installments_is_cash_only_or_empty() {
    let cash_only = PaymentConfig {
        installments: 0,
        down_payment: dec!(50),
        ..base_config()
    };
    let output = generate_schedule(&input(cash_only, dec!(100), dec!(50))).unwrap();
    assert_eq!(output.result.installments.len(), 1);
    assert_eq!(output.result.installments[0].id, CASH_ENTRY_ID);
    assert_eq!(output.result.installment_value, dec!(0));

    let empty = PaymentConfig {
        installments: 0,
        ..base_config()
    };
    let output = generate_schedule(&input(empty, dec!(100), dec!(0))).unwrap();
    assert!(output.result.installments.is_empty());
}

#[test]
fn test_negative_installments_degrades_to_cash_only() {
    // Contractually undefined; mirrors the host loop simply not executing.
    let config = PaymentConfig {
        installments: -3,
        ..base_config()
    };
    let output = generate_schedule(&input(config, dec!(100), dec!(0))).unwrap();
    assert!(output.result.installments.is_empty());
}

#[test]
fn test_rounding_residue_is_reported_not_redistributed() {
    let config = PaymentConfig {
        installments: 3,
        ..base_config()
    };
    let output = generate_schedule(&input(config, dec!(100), dec!(0))).unwrap();
    let schedule = &output.result;

    assert_eq!(schedule.installment_value, dec!(33.33));
    assert_eq!(schedule.rounding_residue, dec!(0.01));
    for installment in &schedule.installments {
        assert_eq!(installment.value, dec!(33.33));
    }
    assert!(
        output.warnings.iter().any(|w| w.contains("residue")),
        "expected a residue warning, got {:?}",
        output.warnings
    );
}

#[test]
fn test_generate_is_deterministic() {
    let config = PaymentConfig {
        installments: 5,
        down_payment: dec!(10),
        due_day: 15,
        ..base_config()
    };
    let first = generate_schedule(&input(config.clone(), dec!(500), dec!(50))).unwrap();
    let second = generate_schedule(&input(config, dec!(500), dec!(50))).unwrap();
    assert_eq!(first.result, second.result);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(
        serde_json::to_value(&first.result).unwrap(),
        serde_json::to_value(&second.result).unwrap()
    );
}

// ===========================================================================
// Fixed-day mode
// ===========================================================================

#[test]
fn test_fixed_day_starts_in_the_following_month() {
    // base = today (2026-01-15), advanced one month, day forced to 10
    let config = PaymentConfig {
        installments: 3,
        due_day: 10,
        ..base_config()
    };
    let output = generate_schedule(&input(config, dec!(300), dec!(0))).unwrap();
    let dates: Vec<NaiveDate> = output.result.installments.iter().map(|p| p.due_date).collect();
    assert_eq!(
        dates,
        vec![date(2026, 2, 10), date(2026, 3, 10), date(2026, 4, 10)]
    );
}

#[test]
fn test_due_day_31_clamps_to_end_of_february() {
    let config = PaymentConfig {
        installments: 1,
        due_day: 31,
        ..base_config()
    };
    // base: 2026-01-15 + 1 month = 2026-02-15, day 31 -> clamp to Feb 28
    let output = generate_schedule(&input(config, dec!(100), dec!(0))).unwrap();
    assert_eq!(output.result.installments[0].due_date, date(2026, 2, 28));
}

#[test]
fn test_due_day_31_clamps_to_leap_february() {
    let config = PaymentConfig {
        installments: 1,
        due_day: 31,
        ..PaymentConfig::with_defaults(date(2024, 1, 15))
    };
    let scheduled = ScheduleInput {
        config,
        total: dec!(100),
        cash_value: dec!(0),
        today: date(2024, 1, 15),
    };
    let output = generate_schedule(&scheduled).unwrap();
    assert_eq!(output.result.installments[0].due_date, date(2024, 2, 29));
}

#[test]
fn test_clamped_day_recovers_in_longer_months() {
    let config = PaymentConfig {
        installments: 4,
        due_day: 31,
        ..base_config()
    };
    // base clamps to 2026-02-28; later months re-apply day 31 where it exists
    let output = generate_schedule(&input(config, dec!(400), dec!(0))).unwrap();
    let dates: Vec<NaiveDate> = output.result.installments.iter().map(|p| p.due_date).collect();
    assert_eq!(
        dates,
        vec![
            date(2026, 2, 28),
            date(2026, 3, 31),
            date(2026, 4, 30),
            date(2026, 5, 31),
        ]
    );
}

#[test]
fn test_interval_sixty_days_advances_two_months() {
    let config = PaymentConfig {
        installments: 3,
        due_day: 5,
        installment_interval: 60,
        ..base_config()
    };
    let output = generate_schedule(&input(config, dec!(300), dec!(0))).unwrap();
    let dates: Vec<NaiveDate> = output.result.installments.iter().map(|p| p.due_date).collect();
    assert_eq!(
        dates,
        vec![date(2026, 2, 5), date(2026, 4, 5), date(2026, 6, 5)]
    );
}

#[test]
fn test_interval_below_thirty_collapses_fixed_day_dates() {
    // interval/30 floors to 0 months: every installment lands on the base
    // date. Preserved behavior, surfaced as a warning.
    let config = PaymentConfig {
        installments: 3,
        due_day: 10,
        installment_interval: 29,
        ..base_config()
    };
    let output = generate_schedule(&input(config, dec!(300), dec!(0))).unwrap();
    let dates: Vec<NaiveDate> = output.result.installments.iter().map(|p| p.due_date).collect();
    assert_eq!(
        dates,
        vec![date(2026, 2, 10), date(2026, 2, 10), date(2026, 2, 10)]
    );
    assert!(
        output.warnings.iter().any(|w| w.contains("coerces")),
        "expected a coercion warning, got {:?}",
        output.warnings
    );
}

#[test]
fn test_values_sum_back_to_total_with_exact_division() {
    let config = PaymentConfig {
        installments: 8,
        down_payment: dec!(25),
        ..base_config()
    };
    let total = dec!(1000);
    let cash = dec!(250);
    let output = generate_schedule(&input(config, total, cash)).unwrap();
    let sum: Decimal = output.result.installments.iter().map(|p| p.value).sum();
    assert_eq!(sum, total);
}
