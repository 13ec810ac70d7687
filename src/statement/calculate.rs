use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Catalog, Genre, Invoice, Play, PricingConfig, StatementError, pricing};

/// One priced performance on a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub play_id: String,
    pub play_name: String,
    pub genre: Genre,
    pub audience: u32,
    /// Amount owed in cents.
    pub amount: i64,
    pub credits: u64,
}

/// Everything a statement shows, before formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementData {
    pub customer: String,
    /// Lines in invoice order.
    pub lines: Vec<StatementLine>,
    /// Sum of line amounts, in cents.
    pub total_amount: i64,
    pub total_credits: u64,
}

/// Price every performance of `invoice` against `catalog`.
///
/// Every play ID is resolved before any performance is priced, so a missing
/// play is reported even when an earlier performance has an unknown genre.
/// The first failure aborts the whole statement.
pub fn calculate(
    invoice: &Invoice,
    catalog: &Catalog,
    config: &PricingConfig,
) -> Result<StatementData, StatementError> {
    debug!(
        customer = %invoice.customer,
        performances = invoice.performances.len(),
        "Calculating statement"
    );

    let result = calculate_lines(invoice, catalog, config);
    match &result {
        Ok(data) => debug!(
            customer = %data.customer,
            total_amount = data.total_amount,
            total_credits = data.total_credits,
            "Statement calculated"
        ),
        Err(err) => warn!(customer = %invoice.customer, error = %err, "Statement aborted"),
    }
    result
}

fn calculate_lines(
    invoice: &Invoice,
    catalog: &Catalog,
    config: &PricingConfig,
) -> Result<StatementData, StatementError> {
    config.validate()?;

    let plays = invoice
        .performances
        .iter()
        .map(|performance| catalog.play(&performance.play_id))
        .collect::<Result<Vec<&Play>, _>>()?;

    let mut lines = Vec::with_capacity(plays.len());
    for (performance, play) in invoice.performances.iter().zip(plays) {
        let charge = pricing::charge(play, performance.audience, config)?;
        debug!(
            play_id = %performance.play_id,
            genre = %charge.genre,
            audience = performance.audience,
            amount = charge.amount,
            credits = charge.credits,
            "Priced performance"
        );
        lines.push(StatementLine {
            play_id: performance.play_id.clone(),
            play_name: play.name.clone(),
            genre: charge.genre,
            audience: performance.audience,
            amount: charge.amount,
            credits: charge.credits,
        });
    }

    let total_amount = lines
        .iter()
        .try_fold(0i64, |total, line| total.checked_add(line.amount))
        .ok_or_else(|| StatementError::Arithmetic("statement total amount".into()))?;
    let total_credits = lines
        .iter()
        .try_fold(0u64, |total, line| total.checked_add(line.credits))
        .ok_or_else(|| StatementError::Arithmetic("statement total credits".into()))?;

    Ok(StatementData {
        customer: invoice.customer.clone(),
        lines,
        total_amount,
        total_credits,
    })
}
