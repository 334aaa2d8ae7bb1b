//! Domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Business-rule rejections raised while pricing a parcel.
///
/// The display text of each variant is the message shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A single parcel is heavier than the per-parcel limit
    #[error("Maximum parcel limit is 1000 grams.")]
    OverweightParcel,
    /// Accepting the parcel would push the city past its daily weight allowance
    #[error("Maximum parcel weight exceeded 5000 grams!")]
    CityDailyWeightExceeded,
    /// The city has already accepted its daily number of parcels
    #[error("Max parcel count reached")]
    CityDailyParcelLimitExceeded,
}

impl PricingError {
    /// Whether resubmitting the same request could succeed.
    ///
    /// Every pricing rejection is final for the day.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Errors raised while building a rate table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateTableError {
    #[error("Rate table must contain at least one city")]
    Empty,

    #[error("Rate for {city} must be positive, got {rate}")]
    NonPositiveRate { city: String, rate: Decimal },
}

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Panics for a city that was never part of the rate table.
///
/// Looking up an unknown city is a caller bug, not a business rejection.
#[track_caller]
pub(crate) fn unknown_city(city: &str) -> ! {
    panic!("unknown city: {city}")
}
