//! Invoice data model, pricing engine and errors.
//!
//! This module has no I/O and no formatting: it turns a play's genre and a
//! performance's audience into cents and volume credits.

mod builder;
mod error;
pub mod pricing;
mod types;

pub use builder::*;
pub use error::*;
pub use pricing::{
    PerformanceCharge, PricingConfig, PricingConfigBuilder, charge, compute_amount,
    compute_volume_credits,
};
pub use types::*;
