use crate::core::{Catalog, Invoice, PricingConfig, StatementError};

use super::calculate::{StatementData, StatementLine, calculate};
use super::format::{CurrencyFormatter, UsdFormatter};

/// Render a statement with the reference tariff and US-dollar formatting.
///
/// ```
/// use playbill::core::*;
/// use playbill::statement::render;
///
/// let invoice = InvoiceBuilder::new("BigCo").add_performance("hamlet", 55).build();
/// let catalog = CatalogBuilder::new().play("hamlet", "Hamlet", "tragedy").build();
///
/// assert_eq!(
///     render(&invoice, &catalog).unwrap(),
///     "Statement for BigCo\n  Hamlet: $650.00 (55 seats)\nAmount owed is $650.00\nYou earned 25 credits\n"
/// );
/// ```
pub fn render(invoice: &Invoice, catalog: &Catalog) -> Result<String, StatementError> {
    render_with(invoice, catalog, &PricingConfig::default(), &UsdFormatter)
}

/// Render a statement with an explicit tariff and formatter.
pub fn render_with(
    invoice: &Invoice,
    catalog: &Catalog,
    config: &PricingConfig,
    formatter: &dyn CurrencyFormatter,
) -> Result<String, StatementError> {
    let data = calculate(invoice, catalog, config)?;
    Ok(render_plain(&data, formatter))
}

/// Plain-text statement: header, one line per performance, amount owed,
/// credits earned.
pub fn render_plain(data: &StatementData, formatter: &dyn CurrencyFormatter) -> String {
    let mut out = String::new();
    out.push_str(&format!("Statement for {}\n", data.customer));
    for line in &data.lines {
        write_line(&mut out, line, formatter);
    }
    out.push_str(&format!(
        "Amount owed is {}\n",
        formatter.format(data.total_amount)
    ));
    out.push_str(&format!("You earned {} credits\n", data.total_credits));
    out
}

fn write_line(out: &mut String, line: &StatementLine, formatter: &dyn CurrencyFormatter) {
    out.push_str(&format!(
        "  {}: {} ({} seats)\n",
        line.play_name,
        formatter.format(line.amount),
        line.audience
    ));
}
