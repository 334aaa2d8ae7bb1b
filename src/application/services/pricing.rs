//! Thread-safe pricing service shared across callers

use std::sync::Arc;

use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::error::unknown_city;
use crate::domain::ledger::state::validate_parcel_weight;
use crate::domain::{CityDailyState, PricingResult, Quote, RateTable};

/// Base rate and live counters for one city
#[derive(Debug, Clone, Copy)]
struct CityLedgerEntry {
    base_rate: Decimal,
    daily: CityDailyState,
}

/// Concurrent counterpart of [`PricingLedger`](crate::domain::PricingLedger).
///
/// Each city lives in its own map entry; pricing holds that entry's lock from
/// the weight check through the parcel-count increment, so two callers can
/// never both squeeze under the same cap.
pub struct PricingService {
    cities: DashMap<String, CityLedgerEntry>,
}

/// Shared pricing service handle
pub type SharedPricingService = Arc<PricingService>;

impl PricingService {
    pub fn new(rates: RateTable) -> Self {
        let cities: DashMap<String, CityLedgerEntry> = rates
            .iter()
            .map(|(city, base_rate)| {
                (
                    city.to_string(),
                    CityLedgerEntry {
                        base_rate,
                        daily: CityDailyState::default(),
                    },
                )
            })
            .collect();

        info!(cities = cities.len(), "Pricing service initialized");

        Self { cities }
    }

    pub fn shared(rates: RateTable) -> SharedPricingService {
        Arc::new(Self::new(rates))
    }

    /// See [`PricingLedger::calculate_price`](crate::domain::PricingLedger::calculate_price).
    #[track_caller]
    pub fn calculate_price(
        &self,
        weight_grams: u32,
        city: &str,
        is_after_3pm: bool,
    ) -> PricingResult<Decimal> {
        validate_parcel_weight(weight_grams)?;

        let mut entry = self
            .cities
            .get_mut(city)
            .unwrap_or_else(|| unknown_city(city));
        let base_rate = entry.base_rate;
        entry.daily.charge(city, base_rate, weight_grams, is_after_3pm)
    }

    #[track_caller]
    pub fn quote(&self, weight_grams: u32, city: &str, is_after_3pm: bool) -> PricingResult<Quote> {
        validate_parcel_weight(weight_grams)?;
        let entry = self.entry(city);
        entry.daily.preview(entry.base_rate, weight_grams, is_after_3pm)
    }

    #[track_caller]
    pub fn remaining_weight_for(&self, city: &str) -> u32 {
        self.entry(city).daily.remaining_weight_grams
    }

    #[track_caller]
    pub fn parcel_count_for(&self, city: &str) -> u32 {
        self.entry(city).daily.parcel_count
    }

    pub fn knows_city(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    pub fn daily_state(&self, city: &str) -> Option<CityDailyState> {
        self.cities.get(city).map(|e| e.daily)
    }

    #[track_caller]
    fn entry(&self, city: &str) -> CityLedgerEntry {
        self.cities
            .get(city)
            .map(|e| *e)
            .unwrap_or_else(|| unknown_city(city))
    }
}
