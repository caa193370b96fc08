//! Service configuration from environment variables.
//!
//! `main` loads `.env` through dotenvy first, so every variable here can also
//! live in that file. All variables are optional.

use std::str::FromStr;

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::pricing::{PricingPolicy, RoundingMode};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub pricing: PricingPolicy,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PricingPolicy::default();

        let port: u16 = match lookup("PORT") {
            Some(v) => parse("PORT", v, "expected a port number")?,
            None => 8080,
        };

        let rounding = match lookup("PRICING_ROUNDING") {
            Some(v) => RoundingMode::parse(&v).ok_or(ConfigError::Invalid {
                var: "PRICING_ROUNDING",
                value: v,
                reason: "expected half_up or half_even",
            })?,
            None => defaults.rounding,
        };

        let pricing = PricingPolicy {
            currency: lookup("PRICING_CURRENCY").unwrap_or(defaults.currency),
            currency_symbol: lookup("PRICING_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            weekend_surcharge_rate: rate(
                &lookup,
                "PRICING_WEEKEND_SURCHARGE",
                defaults.weekend_surcharge_rate,
            )?,
            security_deposit_rate: rate(
                &lookup,
                "PRICING_SECURITY_DEPOSIT",
                defaults.security_deposit_rate,
            )?,
            advance_share: share(&lookup, "PRICING_ADVANCE_SHARE", defaults.advance_share)?,
            night_surcharge_rate: rate(
                &lookup,
                "PRICING_NIGHT_SURCHARGE",
                defaults.night_surcharge_rate,
            )?,
            night_start: time(&lookup, "PRICING_NIGHT_START", defaults.night_start)?,
            night_end: time(&lookup, "PRICING_NIGHT_END", defaults.night_end)?,
            high_demand_rate: rate(
                &lookup,
                "PRICING_HIGH_DEMAND_SURCHARGE",
                defaults.high_demand_rate,
            )?,
            peak_demand_rate: rate(
                &lookup,
                "PRICING_PEAK_DEMAND_SURCHARGE",
                defaults.peak_demand_rate,
            )?,
            rounding,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            pricing,
        })
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(var: &'static str, value: String, reason: &'static str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value, reason })
}

fn rate<F>(lookup: &F, var: &'static str, default: Decimal) -> Result<Decimal, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    let parsed: Decimal = parse(var, value.clone(), "expected a decimal rate")?;
    if parsed < Decimal::ZERO {
        return Err(ConfigError::Invalid {
            var,
            value,
            reason: "rate must not be negative",
        });
    }
    Ok(parsed)
}

fn share<F>(lookup: &F, var: &'static str, default: Decimal) -> Result<Decimal, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let parsed = rate(lookup, var, default)?;
    if parsed > Decimal::ONE {
        return Err(ConfigError::Invalid {
            var,
            value: parsed.to_string(),
            reason: "share must be between 0 and 1",
        });
    }
    Ok(parsed)
}

fn time<F>(lookup: &F, var: &'static str, default: NaiveTime) -> Result<NaiveTime, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
            ConfigError::Invalid {
                var,
                value,
                reason: "expected HH:MM",
            }
        }),
        None => Ok(default),
    }
}
