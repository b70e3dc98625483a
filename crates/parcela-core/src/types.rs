use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages expressed in whole points (20 = 20%). Never as fractions.
pub type Percent = Decimal;

/// Stable identifier of the down-payment entry in a generated schedule.
pub const CASH_ENTRY_ID: &str = "cash";

/// A reference amount as the host supplies it: either an already-parsed
/// decimal or raw text from a currency field ("R$ 1.234,56").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoneyInput {
    Amount(Decimal),
    Text(String),
}

impl MoneyInput {
    /// Normalize to a decimal amount. Text that does not parse as a
    /// Brazilian-formatted amount normalizes to zero, like the host's
    /// `parseFloat(...) || 0`.
    pub fn normalize(&self) -> Money {
        match self {
            MoneyInput::Amount(value) => *value,
            MoneyInput::Text(text) => format::parse_brl(text),
        }
    }
}

/// Payment method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "PARCELADO")]
    Installment,
    #[serde(rename = "A_VISTA")]
    Cash,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Installment => write!(f, "PARCELADO"),
            PaymentMethod::Cash => write!(f, "A_VISTA"),
        }
    }
}

/// One payment configuration, immutable per computation. Field names follow
/// the host's form-field keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfig {
    pub reference_value: MoneyInput,
    pub payment_method: PaymentMethod,
    /// Number of installments, 0..=360. Zero means cash-only.
    pub installments: i32,
    /// Due date of the down-payment ("cash") entry.
    pub entry_date: NaiveDate,
    /// Down payment as a percentage of the total, 0..=100.
    pub down_payment: Percent,
    /// Financial discount as a percentage of the subtotal, 0..=100.
    pub discount: Percent,
    /// Days between installments, 1..=365.
    pub installment_interval: i32,
    /// Days from "today" to the first installment's base date.
    pub first_installment_term: i64,
    /// Fixed day-of-month for due dates, 1..=31; 0 means unset.
    pub due_day: i32,
    /// Payment channel label stamped on every generated entry.
    pub default_payment_method: String,
}

impl PaymentConfig {
    /// The host form's defaults: 1 installment of value 1, due in 30-day
    /// intervals, paid by "Boleto". The entry date is caller-supplied so the
    /// engine never touches the system clock.
    pub fn with_defaults(entry_date: NaiveDate) -> Self {
        PaymentConfig {
            reference_value: MoneyInput::Amount(Decimal::ONE),
            payment_method: PaymentMethod::Installment,
            installments: 1,
            entry_date,
            down_payment: Decimal::ZERO,
            discount: Decimal::ZERO,
            installment_interval: 30,
            first_installment_term: 0,
            due_day: 0,
            default_payment_method: "Boleto".to_string(),
        }
    }
}

/// A single generated payment entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// `"cash"` for the down-payment entry, `"installment-{i}"` otherwise.
    pub id: String,
    pub description: String,
    pub value: Money,
    pub due_date: NaiveDate,
    pub payment_method: String,
}

/// Derived payment breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub subtotal: Money,
    pub financial_discount: Money,
    pub total: Money,
    /// `total * downPayment / 100`, due on the entry date.
    pub cash_value: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
