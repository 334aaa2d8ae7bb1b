//! Per-city daily counters and the pricing arithmetic applied to them

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::domain::error::{PricingError, PricingResult};

/// Heaviest single parcel accepted
pub const MAX_PARCEL_WEIGHT_GRAMS: u32 = 1000;
/// Total weight a city may dispatch per day
pub const DAILY_WEIGHT_LIMIT_GRAMS: u32 = 5000;
/// Number of parcels a city may dispatch per day
pub const DAILY_PARCEL_LIMIT: u32 = 50;
/// Weight covered by one unit of the base rate
pub const BILLING_UNIT_GRAMS: u32 = 100;
/// Rate multiplier applied after 3 PM (1.2)
pub const AFTER_3PM_SURCHARGE: Decimal = Decimal::from_parts(12, 0, 0, false, 1);
/// Decimal places of every returned price
pub const PRICE_SCALE: u32 = 2;

/// Remaining allowance for one city.
///
/// Both counters only move in one direction for the lifetime of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityDailyState {
    pub remaining_weight_grams: u32,
    pub parcel_count: u32,
}

impl Default for CityDailyState {
    fn default() -> Self {
        Self {
            remaining_weight_grams: DAILY_WEIGHT_LIMIT_GRAMS,
            parcel_count: 0,
        }
    }
}

/// Price preview produced without touching any counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub multiplier: u32,
    pub effective_rate: Decimal,
    pub price: Decimal,
}

/// Reject a parcel heavier than [`MAX_PARCEL_WEIGHT_GRAMS`].
pub fn validate_parcel_weight(weight_grams: u32) -> PricingResult<()> {
    if weight_grams > MAX_PARCEL_WEIGHT_GRAMS {
        return Err(PricingError::OverweightParcel);
    }
    Ok(())
}

/// Number of started 100 g units, never less than one.
pub fn billing_multiplier(weight_grams: u32) -> u32 {
    weight_grams.div_ceil(BILLING_UNIT_GRAMS).max(1)
}

/// Base rate with the after-3 PM surcharge applied when requested.
pub fn effective_rate(base_rate: Decimal, is_after_3pm: bool) -> Decimal {
    if is_after_3pm {
        base_rate * AFTER_3PM_SURCHARGE
    } else {
        base_rate
    }
}

/// `rate × multiplier`, rounded away from zero to two decimal places.
pub fn price_for(rate: Decimal, multiplier: u32) -> Decimal {
    let mut price = (rate * Decimal::from(multiplier))
        .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::AwayFromZero);
    price.rescale(PRICE_SCALE);
    price
}

impl CityDailyState {
    /// Price an already weight-validated parcel and advance the counters.
    ///
    /// The weight deduction is committed before the parcel cap is checked, so
    /// a parcel rejected for the cap still consumes its weight.
    pub(crate) fn charge(
        &mut self,
        city: &str,
        base_rate: Decimal,
        weight_grams: u32,
        is_after_3pm: bool,
    ) -> PricingResult<Decimal> {
        let Some(remaining) = self.remaining_weight_grams.checked_sub(weight_grams) else {
            warn!(
                city,
                weight_grams,
                remaining_weight_grams = self.remaining_weight_grams,
                "Parcel rejected: daily weight limit"
            );
            return Err(PricingError::CityDailyWeightExceeded);
        };
        let multiplier = billing_multiplier(weight_grams);
        self.remaining_weight_grams = remaining;

        let rate = effective_rate(base_rate, is_after_3pm);

        if self.parcel_count >= DAILY_PARCEL_LIMIT {
            warn!(
                city,
                weight_grams,
                remaining_weight_grams = self.remaining_weight_grams,
                "Parcel rejected: daily parcel limit"
            );
            return Err(PricingError::CityDailyParcelLimitExceeded);
        }
        self.parcel_count += 1;

        let price = price_for(rate, multiplier);
        debug!(
            city,
            weight_grams,
            is_after_3pm,
            %price,
            remaining_weight_grams = self.remaining_weight_grams,
            parcel_count = self.parcel_count,
            "Parcel priced"
        );
        Ok(price)
    }

    /// Run every check `charge` would run, without mutating anything.
    pub(crate) fn preview(
        &self,
        base_rate: Decimal,
        weight_grams: u32,
        is_after_3pm: bool,
    ) -> PricingResult<Quote> {
        validate_parcel_weight(weight_grams)?;
        if weight_grams > self.remaining_weight_grams {
            return Err(PricingError::CityDailyWeightExceeded);
        }
        if self.parcel_count >= DAILY_PARCEL_LIMIT {
            return Err(PricingError::CityDailyParcelLimitExceeded);
        }

        let multiplier = billing_multiplier(weight_grams);
        let effective_rate = effective_rate(base_rate, is_after_3pm);
        Ok(Quote {
            multiplier,
            effective_rate,
            price: price_for(effective_rate, multiplier),
        })
    }

    /// Whether the city still accepts parcels at all
    pub fn is_exhausted(&self) -> bool {
        self.remaining_weight_grams == 0 || self.parcel_count >= DAILY_PARCEL_LIMIT
    }
}
