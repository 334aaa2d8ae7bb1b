pub mod error;
pub mod ledger;
pub mod rate;
pub mod surcharge;

// Re-export commonly used types
pub use error::{PricingError, PricingResult, RateTableError};
pub use ledger::{CityDailyState, PricingLedger, Quote};
pub use rate::RateTable;
pub use surcharge::SurchargeWindow;
