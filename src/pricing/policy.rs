//! Rates and rounding rules applied by the calculator.

use chrono::NaiveTime;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::models::DemandLevel;

/// Rounding applied to whole-unit currency amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 2.5 -> 3
    #[default]
    HalfUp,
    /// Banker's rounding, 2.5 -> 2
    HalfEven,
}

impl RoundingMode {
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "half_up" | "half-up" => Some(RoundingMode::HalfUp),
            "half_even" | "half-even" | "bankers" => Some(RoundingMode::HalfEven),
            _ => None,
        }
    }
}

/// Pricing policy, read-only once the service starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingPolicy {
    pub currency: String,
    pub currency_symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub weekend_surcharge_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub security_deposit_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub advance_share: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub night_surcharge_rate: Decimal,
    pub night_start: NaiveTime,
    pub night_end: NaiveTime,
    #[serde(with = "rust_decimal::serde::str")]
    pub high_demand_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub peak_demand_rate: Decimal,
    pub rounding: RoundingMode,
}

impl PricingPolicy {
    /// Surcharge rate for a demand level; zero for normal demand
    pub fn demand_rate(&self, demand: DemandLevel) -> Decimal {
        match demand {
            DemandLevel::Normal => Decimal::ZERO,
            DemandLevel::High => self.high_demand_rate,
            DemandLevel::Peak => self.peak_demand_rate,
        }
    }

    /// Share of the total still owed after an advance payment
    pub fn remaining_share(&self) -> Decimal {
        Decimal::ONE - self.advance_share
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            weekend_surcharge_rate: dec!(0.20),
            security_deposit_rate: dec!(0.10),
            advance_share: dec!(0.35),
            night_surcharge_rate: dec!(0.10),
            night_start: NaiveTime::from_hms_opt(22, 0, 0).expect("22:00 is a valid time"),
            night_end: NaiveTime::from_hms_opt(6, 0, 0).expect("06:00 is a valid time"),
            high_demand_rate: dec!(0.15),
            peak_demand_rate: dec!(0.30),
            rounding: RoundingMode::HalfUp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_mode_parse() {
        assert_eq!(RoundingMode::parse("half_up"), Some(RoundingMode::HalfUp));
        assert_eq!(RoundingMode::parse(" HALF_EVEN "), Some(RoundingMode::HalfEven));
        assert_eq!(RoundingMode::parse("bankers"), Some(RoundingMode::HalfEven));
        assert_eq!(RoundingMode::parse("ceil"), None);
    }

    #[test]
    fn test_default_policy_rates() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.weekend_surcharge_rate, dec!(0.20));
        assert_eq!(policy.security_deposit_rate, dec!(0.10));
        assert_eq!(policy.advance_share, dec!(0.35));
        assert_eq!(policy.remaining_share(), dec!(0.65));
    }

    #[test]
    fn test_default_night_window() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.night_start.format("%H:%M").to_string(), "22:00");
        assert_eq!(policy.night_end.format("%H:%M").to_string(), "06:00");
        assert_ne!(policy.night_start, NaiveTime::MIN);
    }

    #[test]
    fn test_demand_rate() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.demand_rate(DemandLevel::Normal), Decimal::ZERO);
        assert_eq!(policy.demand_rate(DemandLevel::High), dec!(0.15));
        assert_eq!(policy.demand_rate(DemandLevel::Peak), dec!(0.30));
    }
}
