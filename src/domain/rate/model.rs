//! City rate table

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::error::RateTableError;

/// Base price per started 100 g, keyed by city name.
///
/// Validated once at construction and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Build a rate table, rejecting an empty mapping or any non-positive rate.
    pub fn new<I, S>(rates: I) -> Result<Self, RateTableError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let rates: BTreeMap<String, Decimal> =
            rates.into_iter().map(|(city, rate)| (city.into(), rate)).collect();

        if rates.is_empty() {
            return Err(RateTableError::Empty);
        }

        if let Some((city, rate)) = rates.iter().find(|(_, rate)| rate.is_sign_negative() || rate.is_zero()) {
            return Err(RateTableError::NonPositiveRate {
                city: city.clone(),
                rate: *rate,
            });
        }

        Ok(Self { rates })
    }

    pub fn rate_for(&self, city: &str) -> Option<Decimal> {
        self.rates.get(city).copied()
    }

    pub fn contains(&self, city: &str) -> bool {
        self.rates.contains_key(city)
    }

    /// City names in sorted order
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(city, rate)| (city.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

// ── Tests ──────────────────────────────────────────────────────
