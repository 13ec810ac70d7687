//! Per-performance pricing and volume credits.
//!
//! All amounts are integer minor currency units (cents). Nothing in this
//! module touches floating point or formatting.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::error::StatementError;
use super::types::{Genre, Play};

const COMEDY_EXTRA_VOLUME_FACTOR: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// Pricing and credit constants.
///
/// `Default` yields the reference tariff. Amounts are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub tragedy_base_amount: i64,
    /// Seats included in the tragedy base amount.
    pub tragedy_audience_threshold: u32,
    pub tragedy_over_capacity_per_person: i64,
    pub comedy_base_amount: i64,
    /// Seats above which the comedy over-capacity surcharge applies.
    pub comedy_audience_threshold: u32,
    /// Flat surcharge once a comedy goes over capacity.
    pub comedy_over_capacity_amount: i64,
    pub comedy_over_capacity_per_person: i64,
    /// Charged for every seat of a comedy, regardless of capacity.
    pub comedy_amount_per_audience: i64,
    /// Seats that earn no base credit.
    pub base_volume_credit_threshold: u32,
    /// Comedies earn one extra credit per this many seats.
    pub comedy_extra_volume_factor: NonZeroU32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tragedy_base_amount: 40_000,
            tragedy_audience_threshold: 30,
            tragedy_over_capacity_per_person: 1_000,
            comedy_base_amount: 30_000,
            comedy_audience_threshold: 20,
            comedy_over_capacity_amount: 10_000,
            comedy_over_capacity_per_person: 500,
            comedy_amount_per_audience: 300,
            base_volume_credit_threshold: 30,
            comedy_extra_volume_factor: COMEDY_EXTRA_VOLUME_FACTOR,
        }
    }
}

impl PricingConfig {
    /// Check that every amount is non-negative.
    pub fn validate(&self) -> Result<(), StatementError> {
        let amounts = [
            ("tragedy_base_amount", self.tragedy_base_amount),
            (
                "tragedy_over_capacity_per_person",
                self.tragedy_over_capacity_per_person,
            ),
            ("comedy_base_amount", self.comedy_base_amount),
            ("comedy_over_capacity_amount", self.comedy_over_capacity_amount),
            (
                "comedy_over_capacity_per_person",
                self.comedy_over_capacity_per_person,
            ),
            ("comedy_amount_per_audience", self.comedy_amount_per_audience),
        ];
        for (field, value) in amounts {
            if value < 0 {
                return Err(StatementError::Config(format!(
                    "{field} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Builder for overriding individual pricing constants.
///
/// ```
/// use playbill::core::*;
///
/// let config = PricingConfigBuilder::new()
///     .comedy_base_amount(25_000)
///     .build()
///     .unwrap();
/// assert_eq!(compute_amount(Genre::Comedy, 0, &config), Ok(25_000));
/// ```
#[derive(Default)]
pub struct PricingConfigBuilder {
    config: PricingConfig,
}

impl PricingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tragedy(mut self, base_amount: i64, threshold: u32, per_person: i64) -> Self {
        self.config.tragedy_base_amount = base_amount;
        self.config.tragedy_audience_threshold = threshold;
        self.config.tragedy_over_capacity_per_person = per_person;
        self
    }

    pub fn comedy_base_amount(mut self, amount: i64) -> Self {
        self.config.comedy_base_amount = amount;
        self
    }

    pub fn comedy_over_capacity(mut self, threshold: u32, flat: i64, per_person: i64) -> Self {
        self.config.comedy_audience_threshold = threshold;
        self.config.comedy_over_capacity_amount = flat;
        self.config.comedy_over_capacity_per_person = per_person;
        self
    }

    pub fn comedy_amount_per_audience(mut self, amount: i64) -> Self {
        self.config.comedy_amount_per_audience = amount;
        self
    }

    pub fn base_volume_credit_threshold(mut self, threshold: u32) -> Self {
        self.config.base_volume_credit_threshold = threshold;
        self
    }

    pub fn comedy_extra_volume_factor(mut self, factor: NonZeroU32) -> Self {
        self.config.comedy_extra_volume_factor = factor;
        self
    }

    pub fn build(self) -> Result<PricingConfig, StatementError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Amount and credits for a single performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceCharge {
    pub genre: Genre,
    /// Amount owed in cents.
    pub amount: i64,
    pub credits: u64,
}

/// Amount owed for a performance, in cents.
///
/// Fails with [`StatementError::Arithmetic`] when the tariff and audience
/// produce an amount outside the `i64` range.
pub fn compute_amount(
    genre: Genre,
    audience: u32,
    config: &PricingConfig,
) -> Result<i64, StatementError> {
    checked_amount(genre, audience, config).ok_or_else(|| {
        StatementError::Arithmetic(format!("{genre} amount for {audience} seats overflows"))
    })
}

fn checked_amount(genre: Genre, audience: u32, config: &PricingConfig) -> Option<i64> {
    let seats = i64::from(audience);
    match genre {
        Genre::Tragedy => {
            let mut amount = config.tragedy_base_amount;
            if audience > config.tragedy_audience_threshold {
                let excess = seats - i64::from(config.tragedy_audience_threshold);
                amount = amount.checked_add(config.tragedy_over_capacity_per_person.checked_mul(excess)?)?;
            }
            Some(amount)
        }
        Genre::Comedy => {
            let mut amount = config.comedy_base_amount;
            if audience > config.comedy_audience_threshold {
                let excess = seats - i64::from(config.comedy_audience_threshold);
                let surcharge = config
                    .comedy_over_capacity_per_person
                    .checked_mul(excess)?
                    .checked_add(config.comedy_over_capacity_amount)?;
                amount = amount.checked_add(surcharge)?;
            }
            amount.checked_add(config.comedy_amount_per_audience.checked_mul(seats)?)
        }
    }
}

/// Volume credits earned by a performance.
pub fn compute_volume_credits(genre: Genre, audience: u32, config: &PricingConfig) -> u64 {
    let mut credits = u64::from(audience.saturating_sub(config.base_volume_credit_threshold));
    // No bonus for tragedies.
    if genre == Genre::Comedy {
        credits += u64::from(audience / config.comedy_extra_volume_factor);
    }
    credits
}

/// Price one performance of `play`.
///
/// The genre is validated once and both figures are derived from it, so an
/// unknown genre never yields credits without an amount.
pub fn charge(
    play: &Play,
    audience: u32,
    config: &PricingConfig,
) -> Result<PerformanceCharge, StatementError> {
    let genre = play.genre()?;
    Ok(PerformanceCharge {
        genre,
        amount: compute_amount(genre, audience, config)?,
        credits: compute_volume_credits(genre, audience, config),
    })
}
