use crate::core::{Catalog, Invoice, PricingConfig, StatementError};

use super::calculate::{StatementData, calculate};
use super::format::{CurrencyFormatter, UsdFormatter};
use super::render::render_plain;

/// Produces statements for one invoice.
///
/// Borrows the invoice and catalog for its lifetime and never mutates them.
///
/// ```
/// use playbill::core::*;
/// use playbill::statement::{IsoCurrencyFormatter, StatementPrinter};
///
/// let invoice = InvoiceBuilder::new("BigCo").add_performance("as-like", 35).build();
/// let catalog = CatalogBuilder::new().play("as-like", "As You Like It", "comedy").build();
///
/// let printer = StatementPrinter::new(&invoice, &catalog)
///     .with_formatter(IsoCurrencyFormatter::from_code("GBP").unwrap());
/// let text = printer.statement().unwrap();
/// assert!(text.contains("As You Like It: £580.00 (35 seats)"));
/// ```
pub struct StatementPrinter<'a> {
    invoice: &'a Invoice,
    catalog: &'a Catalog,
    config: PricingConfig,
    formatter: Box<dyn CurrencyFormatter + 'a>,
}

impl<'a> StatementPrinter<'a> {
    /// Printer using the reference tariff and US-dollar formatting.
    pub fn new(invoice: &'a Invoice, catalog: &'a Catalog) -> Self {
        Self {
            invoice,
            catalog,
            config: PricingConfig::default(),
            formatter: Box::new(UsdFormatter),
        }
    }

    pub fn with_config(mut self, config: PricingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_formatter(mut self, formatter: impl CurrencyFormatter + 'a) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn invoice(&self) -> &Invoice {
        self.invoice
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Priced lines and totals, without formatting.
    pub fn data(&self) -> Result<StatementData, StatementError> {
        calculate(self.invoice, self.catalog, &self.config)
    }

    /// The formatted statement. Fails without output on the first unknown
    /// play or genre.
    pub fn statement(&self) -> Result<String, StatementError> {
        let data = self.data()?;
        Ok(render_plain(&data, self.formatter.as_ref()))
    }
}
