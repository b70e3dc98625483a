//! Copyable plain-text summary of a computed payment.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ParcelaError;
use crate::format::{format_brl, format_date_br};
use crate::types::{with_metadata, ComputationOutput, Installment, PaymentConfig, PaymentSummary};
use crate::ParcelaResult;

/// Input for report rendering: the configuration plus the computed summary
/// and schedule it describes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    pub config: PaymentConfig,
    pub summary: PaymentSummary,
    pub installments: Vec<Installment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput {
    pub text: String,
    pub line_count: usize,
}

/// Render the payment as a copyable text block:
///
/// ```text
/// Valor: R$ 1.000,00 | Forma: PARCELADO | Parcelas: 4
/// Entrada: 0% | Desconto: 0% | Data: 30/08/2026
///
/// Subtotal: R$ 1.000,00 | Total: R$ 1.000,00
///
/// 1ª parcela: R$ 250,00 - 29/09/2026 - Boleto
/// ...
/// ```
///
/// An empty installment list is an error: there is nothing to report until a
/// schedule has been computed.
pub fn render_report(input: &ReportInput) -> ParcelaResult<ComputationOutput<ReportOutput>> {
    let start = Instant::now();

    if input.installments.is_empty() {
        return Err(ParcelaError::InvalidInput {
            field: "installments".to_string(),
            reason: "Nenhuma parcela calculada. Configure os valores primeiro.".to_string(),
        });
    }

    let config = &input.config;
    let reference_value = config.reference_value.normalize();

    let mut text = String::new();
    text.push_str(&format!(
        "Valor: {} | Forma: {} | Parcelas: {}\n",
        format_brl(reference_value),
        config.payment_method,
        config.installments
    ));
    text.push_str(&format!(
        "Entrada: {}% | Desconto: {}% | Data: {}\n\n",
        config.down_payment,
        config.discount,
        format_date_br(config.entry_date)
    ));
    text.push_str(&format!(
        "Subtotal: {} | Total: {}\n\n",
        format_brl(input.summary.subtotal),
        format_brl(input.summary.total)
    ));

    for installment in &input.installments {
        text.push_str(&format!(
            "{}: {} - {} - {}\n",
            installment.description,
            format_brl(installment.value),
            format_date_br(installment.due_date),
            installment.payment_method
        ));
    }

    let line_count = text.lines().count();
    let result = ReportOutput { text, line_count };

    Ok(with_metadata(
        "Plain-text payment summary in pt-BR formatting",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        result,
    ))
}
