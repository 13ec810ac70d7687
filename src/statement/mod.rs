//! Statement calculation and plain-text rendering.
//!
//! [`calculate`] prices an invoice into [`StatementData`]; [`render_plain`]
//! turns that into text through a [`CurrencyFormatter`]. [`render`] and
//! [`StatementPrinter`] combine both steps.

mod calculate;
mod format;
#[cfg(feature = "json")]
mod json;
mod printer;
mod render;

pub use calculate::{StatementData, StatementLine, calculate};
pub use format::{
    CENTS_PER_UNIT, CurrencyFormatter, IsoCurrencyFormatter, UsdFormatter, whole_units,
};
#[cfg(feature = "json")]
pub use json::{from_json, to_json};
pub use printer::StatementPrinter;
pub use render::{render, render_plain, render_with};
