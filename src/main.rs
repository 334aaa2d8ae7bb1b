//! Express Courier CLI
//!
//! Prices a batch of parcels against one day's ledger.
//!
//! ```sh
//! # Default config (~/.config/express-courier/config.toml)
//! express-courier Banglore:140 Delhi:225
//!
//! # Force the after-3 PM rate
//! express-courier --after-3pm true Delhi:225
//!
//! # Validate config without pricing anything
//! express-courier --check
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use chrono::Local;
use clap::Parser;
use tracing::{error, info};

use express_courier::{default_config_path, init_tracing, AppConfig, PricingLedger};

/// Parcel pricing with per-city daily caps.
#[derive(Parser, Debug)]
#[command(name = "express-courier", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "EXPRESS_COURIER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Apply (or skip) the after-3 PM rate. Defaults to the local clock.
    #[arg(long)]
    after_3pm: Option<bool>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    /// Parcels to price, in order, as CITY:GRAMS.
    #[arg(required_unless_present = "check")]
    parcels: Vec<ParcelArg>,
}

#[derive(Debug, Clone)]
struct ParcelArg {
    city: String,
    weight_grams: u32,
}

impl FromStr for ParcelArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (city, weight) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("expected CITY:GRAMS, got '{s}'"))?;
        let weight_grams = weight
            .parse()
            .map_err(|e| format!("invalid weight '{weight}': {e}"))?;
        Ok(Self {
            city: city.to_string(),
            weight_grams,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);
    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            if cli.check {
                return Err(e.into());
            }
            error!("Failed to load config: {}. Using defaults.", e);
        }
    }

    let rates = config.rate_table()?;
    let window = config.surcharge_window()?;

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        for (city, rate) in rates.iter() {
            println!("   {city:<12}: {rate}");
        }
        println!("   Surcharge   : {} - {}", window.start, window.end);
        return Ok(());
    }

    let is_after_3pm = cli
        .after_3pm
        .unwrap_or_else(|| window.applies_at(Local::now().time()));
    info!(is_after_3pm, parcels = cli.parcels.len(), "Pricing parcels");

    let mut ledger = PricingLedger::new(rates);
    for parcel in &cli.parcels {
        if !ledger.knows_city(&parcel.city) {
            println!("{}:{} -> unknown city", parcel.city, parcel.weight_grams);
            continue;
        }
        match ledger.calculate_price(parcel.weight_grams, &parcel.city, is_after_3pm) {
            Ok(price) => println!("{}:{} -> {}", parcel.city, parcel.weight_grams, price),
            Err(e) => println!("{}:{} -> rejected: {}", parcel.city, parcel.weight_grams, e),
        }
    }

    for city in ledger.cities() {
        if let Some(state) = ledger.daily_state(city) {
            info!(
                city,
                remaining_weight_grams = state.remaining_weight_grams,
                parcel_count = state.parcel_count,
                "Daily allowance"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_city_and_weight() {
        let parcel: ParcelArg = "Delhi:225".parse().unwrap();
        assert_eq!(parcel.city, "Delhi");
        assert_eq!(parcel.weight_grams, 225);
    }

    #[test]
    fn rejects_missing_weight() {
        assert!("Delhi".parse::<ParcelArg>().is_err());
        assert!("Delhi:heavy".parse::<ParcelArg>().is_err());
        assert!("Delhi:-5".parse::<ParcelArg>().is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn check_needs_no_parcels() {
        let cli = Cli::try_parse_from(["express-courier", "--check"]).unwrap();
        assert!(cli.check);
        assert!(cli.parcels.is_empty());
        assert!(Cli::try_parse_from(["express-courier"]).is_err());
    }
}
