use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{display_score, InstitutionResult};

/// One table row for the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstitutionRow {
    pub name: String,
    pub score_display: String,
    pub allocation_display: String,
    pub recommendations: Vec<String>,
}

/// Presentation-ready snapshot of an allocation round. Rendering into a
/// concrete document format (PDF, DOCX, HTML) is the consumer's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationReportSummary {
    pub generated_at: DateTime<Utc>,
    pub institutions_analyzed: usize,
    pub rows: Vec<InstitutionRow>,
}

impl AllocationReportSummary {
    pub fn from_results(results: &[InstitutionResult], currency_marker: &str) -> Self {
        Self::at(results, currency_marker, Utc::now())
    }

    pub fn at(
        results: &[InstitutionResult],
        currency_marker: &str,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let rows = results
            .iter()
            .map(|result| InstitutionRow {
                name: result.name.clone(),
                score_display: format!("{}/10", display_score(result.total_score)),
                allocation_display: format!(
                    "{} {}",
                    currency_marker,
                    format_currency(result.budget_allocation)
                ),
                recommendations: result.recommendations.clone(),
            })
            .collect();

        Self {
            generated_at,
            institutions_analyzed: results.len(),
            rows,
        }
    }
}

/// Two-decimal amount with thousands separators, e.g. `1,234,567.89`.
pub(crate) fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (integer, decimals) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{decimals}")
}
