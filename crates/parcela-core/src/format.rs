//! Brazilian currency and date formatting.
//!
//! Mirrors the conventions of the pt-BR locale: `R$` prefix, dot as the
//! thousands separator, comma as the decimal separator, dd/mm/yyyy dates.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::Money;

/// Parse a Brazilian-formatted monetary string ("R$ 1.234,56", "1234,56").
///
/// Everything except digits, the comma and the minus sign is stripped, so
/// thousands dots and currency prefixes vanish; the comma becomes the decimal
/// point. Unparseable input yields zero rather than an error.
pub fn parse_brl(text: &str) -> Money {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '-')
        .collect();
    let normalized = cleaned.replace(',', ".");
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Format a monetary value as `R$ 1.234,56` (two decimal places, grouped
/// thousands). Negative amounts carry the sign before the currency symbol.
pub fn format_brl(value: Money) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (text, "00".to_string()),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac_part}")
}

/// Format a date as `dd/mm/yyyy`.
pub fn format_date_br(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}
