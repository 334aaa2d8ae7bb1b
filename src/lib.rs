//! # Express Courier
//!
//! Parcel pricing for a fixed set of dispatch cities.
//!
//! Each city has a base rate per started 100 g, a daily weight allowance of
//! 5000 g and a daily limit of 50 parcels. Parcels priced after 3 PM carry a
//! 20% surcharge.
//!
//! ## Architecture
//!
//! - **domain**: rate table, per-city counters, pricing rules and errors
//! - **application**: the thread-safe [`PricingService`]
//! - **config**: TOML configuration for rates, surcharge window and logging
//! - **support**: error wrappers and tracing setup
//!
//! ```
//! use express_courier::{PricingLedger, RateTable};
//! use rust_decimal::Decimal;
//!
//! let rates = RateTable::new([("Delhi", Decimal::new(3500, 2))]).unwrap();
//! let mut ledger = PricingLedger::new(rates);
//!
//! let price = ledger.calculate_price(225, "Delhi", true).unwrap();
//! assert_eq!(price.to_string(), "126.00");
//! assert_eq!(ledger.remaining_weight_for("Delhi"), 4775);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod support;

pub use application::{PricingService, SharedPricingService};
pub use config::{default_config_path, AppConfig, LoggingConfig};
pub use domain::{
    CityDailyState, PricingError, PricingLedger, PricingResult, Quote, RateTable, RateTableError,
    SurchargeWindow,
};
pub use support::errors::{AppError, ConfigError};
pub use support::logging::init_tracing;
