//! Field-level validation of a payment configuration.
//!
//! Validation findings are data, never errors: every rule runs, all
//! violations are collected in the declared order, and the caller decides
//! whether to block the computation. Field keys and message text match the
//! host's form fields so findings map onto inputs unchanged.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::PaymentConfig;

/// Largest accepted reference value.
pub const MAX_REFERENCE_VALUE: Decimal = dec!(999999999);
/// Largest accepted installment count.
pub const MAX_INSTALLMENTS: i32 = 360;
/// Largest accepted interval between installments, in days.
pub const MAX_INTERVAL_DAYS: i32 = 365;
/// Largest accepted fixed due day-of-month.
pub const MAX_DUE_DAY: i32 = 31;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Check a payment configuration against its domain constraints.
///
/// Returns all violations in a fixed order; an empty vector means the
/// configuration is valid. Never fails.
pub fn validate_payment(config: &PaymentConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let value = config.reference_value.normalize();
    if value <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "referenceValue",
            "O valor deve ser maior que zero",
        ));
    }
    if value > MAX_REFERENCE_VALUE {
        errors.push(ValidationError::new(
            "referenceValue",
            "O valor é muito grande",
        ));
    }

    if config.installments < 0 {
        errors.push(ValidationError::new(
            "installments",
            "O número de parcelas não pode ser negativo",
        ));
    }
    if config.installments > MAX_INSTALLMENTS {
        errors.push(ValidationError::new(
            "installments",
            "O número máximo de parcelas é 360",
        ));
    }

    if config.down_payment < Decimal::ZERO || config.down_payment > dec!(100) {
        errors.push(ValidationError::new(
            "downPayment",
            "A entrada deve estar entre 0% e 100%",
        ));
    }

    if config.discount < Decimal::ZERO {
        errors.push(ValidationError::new(
            "discount",
            "O desconto não pode ser negativo",
        ));
    }
    if config.discount > dec!(100) {
        errors.push(ValidationError::new(
            "discount",
            "O desconto não pode ser maior que 100%",
        ));
    }

    if config.installment_interval < 1 {
        errors.push(ValidationError::new(
            "installmentInterval",
            "O intervalo deve ser pelo menos 1 dia",
        ));
    }
    if config.installment_interval > MAX_INTERVAL_DAYS {
        errors.push(ValidationError::new(
            "installmentInterval",
            "O intervalo máximo é 365 dias",
        ));
    }

    if config.first_installment_term < 0 {
        errors.push(ValidationError::new(
            "firstInstallmentTerm",
            "O prazo não pode ser negativo",
        ));
    }

    // Zero is the "unset" sentinel and passes, even though the message
    // advertises 1-31.
    if config.due_day < 0 || config.due_day > MAX_DUE_DAY {
        errors.push(ValidationError::new(
            "dueDay",
            "O dia de vencimento deve estar entre 1 e 31",
        ));
    }

    errors
}
