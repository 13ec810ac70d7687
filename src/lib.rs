//! # playbill
//!
//! Billing statements for theatrical performances: genre-specific pricing,
//! volume credits and a plain-text statement.
//!
//! All amounts are integer cents, never floating point. Currency display
//! is a replaceable [`statement::CurrencyFormatter`].
//!
//! ## Quick Start
//!
//! ```rust
//! use playbill::core::*;
//! use playbill::statement::render;
//!
//! let catalog = CatalogBuilder::new()
//!     .play("hamlet", "Hamlet", "tragedy")
//!     .play("as-like", "As You Like It", "comedy")
//!     .play("othello", "Othello", "tragedy")
//!     .build();
//!
//! let invoice = InvoiceBuilder::new("BigCo")
//!     .add_performance("hamlet", 55)
//!     .add_performance("as-like", 35)
//!     .add_performance("othello", 40)
//!     .build();
//!
//! let text = render(&invoice, &catalog).unwrap();
//! assert!(text.ends_with("Amount owed is $1,730.00\nYou earned 47 credits\n"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice and catalog types, pricing engine, errors |
//! | `statement` (default) | Statement calculation, rendering, currency formatters |
//! | `json` | JSON export of calculated statements |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "statement")]
pub mod statement;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
