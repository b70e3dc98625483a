//! Payment breakdown: subtotal, financial discount, total and cash value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, MoneyInput, PaymentSummary, Percent};
use crate::ParcelaResult;

/// Input for the payment breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryInput {
    pub reference_value: MoneyInput,
    /// Financial discount in percent of the subtotal.
    pub discount: Percent,
    /// Down payment in percent of the total.
    pub down_payment: Percent,
}

/// Derive the payment breakdown from a reference value.
///
/// `financial_discount = subtotal * discount / 100`,
/// `total = subtotal - financial_discount`,
/// `cash_value = total * down_payment / 100`.
///
/// A reference value that normalizes to zero or less produces an all-zero
/// summary with a warning rather than an error; the host treats that state
/// as "nothing to compute yet".
pub fn build_summary(input: &SummaryInput) -> ParcelaResult<ComputationOutput<PaymentSummary>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let subtotal = input.reference_value.normalize();
    let result = if subtotal <= Decimal::ZERO {
        warnings.push("reference value is zero or negative; summary is empty".to_string());
        PaymentSummary {
            subtotal: Decimal::ZERO,
            financial_discount: Decimal::ZERO,
            total: Decimal::ZERO,
            cash_value: Decimal::ZERO,
        }
    } else {
        let financial_discount = subtotal * input.discount / dec!(100);
        let total = subtotal - financial_discount;
        let cash_value = total * input.down_payment / dec!(100);
        PaymentSummary {
            subtotal,
            financial_discount,
            total,
            cash_value,
        }
    };

    Ok(with_metadata(
        "Percentage discount off subtotal; cash value as share of total",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}
