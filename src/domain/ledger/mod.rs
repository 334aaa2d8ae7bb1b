//! Ledger aggregate
//!
//! Contains the per-city daily counters, the pricing arithmetic, and the
//! single-threaded [`PricingLedger`] that ties them to a rate table.

pub mod model;
pub mod state;

pub use model::PricingLedger;
pub use state::{
    billing_multiplier, CityDailyState, Quote, AFTER_3PM_SURCHARGE, BILLING_UNIT_GRAMS,
    DAILY_PARCEL_LIMIT, DAILY_WEIGHT_LIMIT_GRAMS, MAX_PARCEL_WEIGHT_GRAMS,
};
