//! Pricing ledger entity

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::info;

use super::state::{self, CityDailyState, Quote};
use crate::domain::error::{unknown_city, PricingResult};
use crate::domain::rate::RateTable;

/// Prices parcels per city while tracking each city's daily allowance.
///
/// Every city in the rate table gets its own [`CityDailyState`] at
/// construction; no other city is ever added. Lookups of a city outside the
/// table panic.
#[derive(Debug, Clone)]
pub struct PricingLedger {
    rates: RateTable,
    states: HashMap<String, CityDailyState>,
}

impl PricingLedger {
    pub fn new(rates: RateTable) -> Self {
        let states = rates
            .cities()
            .map(|city| (city.to_string(), CityDailyState::default()))
            .collect();

        info!(cities = rates.len(), "Pricing ledger initialized");

        Self { rates, states }
    }

    /// Price a parcel and charge it against the city's daily allowance.
    ///
    /// # Errors
    /// * [`PricingError::OverweightParcel`](crate::domain::PricingError::OverweightParcel)
    ///   when the parcel exceeds 1000 g; nothing changes.
    /// * [`PricingError::CityDailyWeightExceeded`](crate::domain::PricingError::CityDailyWeightExceeded)
    ///   when the city has less weight left than the parcel; nothing changes.
    /// * [`PricingError::CityDailyParcelLimitExceeded`](crate::domain::PricingError::CityDailyParcelLimitExceeded)
    ///   when the city already took 50 parcels. The parcel's weight is still
    ///   deducted.
    ///
    /// # Panics
    /// If `city` is not in the rate table.
    #[track_caller]
    pub fn calculate_price(
        &mut self,
        weight_grams: u32,
        city: &str,
        is_after_3pm: bool,
    ) -> PricingResult<Decimal> {
        state::validate_parcel_weight(weight_grams)?;

        let base_rate = self.base_rate(city);
        let Some(daily) = self.states.get_mut(city) else {
            unknown_city(city)
        };
        daily.charge(city, base_rate, weight_grams, is_after_3pm)
    }

    /// Price a parcel without charging it.
    ///
    /// Runs the same checks as [`calculate_price`](Self::calculate_price).
    #[track_caller]
    pub fn quote(&self, weight_grams: u32, city: &str, is_after_3pm: bool) -> PricingResult<Quote> {
        state::validate_parcel_weight(weight_grams)?;
        self.state(city).preview(self.base_rate(city), weight_grams, is_after_3pm)
    }

    #[track_caller]
    pub fn remaining_weight_for(&self, city: &str) -> u32 {
        self.state(city).remaining_weight_grams
    }

    #[track_caller]
    pub fn parcel_count_for(&self, city: &str) -> u32 {
        self.state(city).parcel_count
    }

    /// Base rate with the after-3 PM surcharge applied when requested.
    #[track_caller]
    pub fn effective_rate(&self, city: &str, is_after_3pm: bool) -> Decimal {
        state::effective_rate(self.base_rate(city), is_after_3pm)
    }

    pub fn knows_city(&self, city: &str) -> bool {
        self.rates.contains(city)
    }

    pub fn rate_for(&self, city: &str) -> Option<Decimal> {
        self.rates.rate_for(city)
    }

    pub fn daily_state(&self, city: &str) -> Option<CityDailyState> {
        self.states.get(city).copied()
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.rates.cities()
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    #[track_caller]
    fn base_rate(&self, city: &str) -> Decimal {
        self.rates.rate_for(city).unwrap_or_else(|| unknown_city(city))
    }

    #[track_caller]
    fn state(&self, city: &str) -> &CityDailyState {
        self.states.get(city).unwrap_or_else(|| unknown_city(city))
    }
}

// ── Tests ──────────────────────────────────────────────────────
