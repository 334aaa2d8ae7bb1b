//! Rate aggregate
//!
//! Holds the validated per-city base rates the ledger prices against.

pub mod model;

pub use model::RateTable;
