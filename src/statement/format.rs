//! Currency display for statement amounts.
//!
//! Amounts arrive as integer cents and are shown in whole currency units:
//! the cents are truncated, never rounded, so a line and the total always
//! agree with their unformatted values.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Minor units per major unit for every amount the engine produces.
pub const CENTS_PER_UNIT: i64 = 100;

/// Renders an amount in cents for display.
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, cents: i64) -> String;
}

/// Whole currency units in `cents`, truncated toward zero.
pub fn whole_units(cents: i64) -> i64 {
    cents / CENTS_PER_UNIT
}

/// Whole units of `cents` as money at the currency's own scale, so the
/// minor digits are printed as zeros (`$650.00`, `¥650`).
fn whole_money(cents: i64, currency: &iso::Currency) -> Money<'_, iso::Currency> {
    let mut amount = Decimal::from(whole_units(cents));
    amount.rescale(currency.exponent);
    Money::from_decimal(amount, currency)
}

/// US-dollar style: `$1,234.00`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsdFormatter;

impl CurrencyFormatter for UsdFormatter {
    fn format(&self, cents: i64) -> String {
        whole_money(cents, iso::USD).to_string()
    }
}

/// Formats amounts in any ISO 4217 currency, using the currency's own
/// symbol placement and separators.
#[derive(Debug, Clone, Copy)]
pub struct IsoCurrencyFormatter {
    currency: &'static iso::Currency,
}

impl IsoCurrencyFormatter {
    pub fn new(currency: &'static iso::Currency) -> Self {
        Self { currency }
    }

    /// Look up a formatter by ISO 4217 code (e.g. "GBP").
    pub fn from_code(code: &str) -> Option<Self> {
        iso::find(code).map(Self::new)
    }

    /// ISO 4217 alpha code of the formatted currency.
    pub fn code(&self) -> &'static str {
        self.currency.iso_alpha_code
    }
}

impl CurrencyFormatter for IsoCurrencyFormatter {
    fn format(&self, cents: i64) -> String {
        whole_money(cents, self.currency).to_string()
    }
}

impl<F: CurrencyFormatter + ?Sized> CurrencyFormatter for &F {
    fn format(&self, cents: i64) -> String {
        (**self).format(cents)
    }
}

impl<F: CurrencyFormatter + ?Sized> CurrencyFormatter for Box<F> {
    fn format(&self, cents: i64) -> String {
        (**self).format(cents)
    }
}
