//! Quote service: validation around the pure calculator.
//!
//! The calculator accepts any input and clamps reversed ranges. Quotes served
//! to the booking flow are stricter: they reject reversed ranges up front and
//! amounts that overflow the decimal range instead of panicking.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde_json::json;

use super::calculators::{format_amount, try_calculate_price};
use super::models::{PriceBreakdown, RentalRequest};
use super::policy::PricingPolicy;
use super::requests::QuoteRequest;
use super::responses::{MoneyResponse, QuoteResponse, SurchargeResponse};

/// Pricing validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Base daily rate must not be negative (got {rate})")]
    InvalidRate { rate: Decimal },

    #[error("Drop {drop} is before pickup {pickup}")]
    InvalidDateRange { pickup: String, drop: String },

    #[error("Rental amount for base daily rate {rate} is out of range")]
    AmountOutOfRange { rate: Decimal },
}

impl PricingError {
    /// Stable identifier used in error responses
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::InvalidRate { .. } => "invalid_rate",
            PricingError::InvalidDateRange { .. } => "invalid_date_range",
            PricingError::AmountOutOfRange { .. } => "amount_out_of_range",
        }
    }

    /// Offending input, echoed back in error responses
    pub fn details(&self) -> serde_json::Value {
        match self {
            PricingError::InvalidRate { rate } | PricingError::AmountOutOfRange { rate } => {
                json!({ "base_daily_rate": rate.to_string() })
            }
            PricingError::InvalidDateRange { pickup, drop } => {
                json!({ "pickup": pickup, "drop": drop })
            }
        }
    }
}

/// Check a rental request before pricing it.
///
/// Times are only compared when both ends carry one; otherwise the dates
/// decide.
pub fn validate_request(request: &RentalRequest) -> Result<(), PricingError> {
    if request.base_daily_rate < Decimal::ZERO {
        return Err(PricingError::InvalidRate {
            rate: request.base_daily_rate,
        });
    }

    let reversed = match (request.pickup_time, request.drop_time) {
        (Some(pickup_time), Some(drop_time)) => {
            request.drop_date.and_time(drop_time) < request.pickup_date.and_time(pickup_time)
        }
        _ => request.drop_date < request.pickup_date,
    };

    if reversed {
        return Err(PricingError::InvalidDateRange {
            pickup: describe(request.pickup_date, request.pickup_time),
            drop: describe(request.drop_date, request.drop_time),
        });
    }

    Ok(())
}

fn describe(date: NaiveDate, time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => format!("{} {}", date, t.format("%H:%M")),
        None => date.to_string(),
    }
}

/// Validate and price a quote request.
pub fn quote(req: QuoteRequest, policy: &PricingPolicy) -> Result<QuoteResponse, PricingError> {
    let request = RentalRequest::from(req);
    validate_request(&request)?;

    let breakdown =
        try_calculate_price(&request, policy).ok_or(PricingError::AmountOutOfRange {
            rate: request.base_daily_rate,
        })?;

    tracing::debug!(
        base_daily_rate = %request.base_daily_rate,
        pickup = %request.pickup_date,
        drop = %request.drop_date,
        total_days = breakdown.total_days,
        total_price = %breakdown.total_price,
        "Quoted rental"
    );

    Ok(to_response(&breakdown, policy))
}

/// Shape a breakdown for JSON, attaching currency and display strings
pub fn to_response(breakdown: &PriceBreakdown, policy: &PricingPolicy) -> QuoteResponse {
    let money = |amount: Decimal| MoneyResponse {
        amount,
        currency: policy.currency.clone(),
        display: format_amount(amount, &policy.currency_symbol, policy.rounding),
    };

    QuoteResponse {
        total_days: breakdown.total_days,
        base_price: money(breakdown.base_price),
        weekend_surcharge_applied: breakdown.weekend_surcharge_applied,
        surcharges: breakdown
            .surcharges
            .iter()
            .map(|line| SurchargeResponse {
                kind: line.kind,
                rate: line.rate,
                amount: money(line.amount),
            })
            .collect(),
        total_price: money(breakdown.total_price),
        security_deposit: money(breakdown.security_deposit),
        payment_option: breakdown.payment_option,
        advance_payment: breakdown.advance_payment.map(money),
        remaining_payment: breakdown.remaining_payment.map(money),
        amount_due_now: money(breakdown.amount_due_now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{DemandLevel, PaymentOption};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn quote_request(rate: Decimal, pickup: NaiveDate, drop: NaiveDate) -> QuoteRequest {
        QuoteRequest {
            base_daily_rate: rate,
            pickup_date: pickup,
            drop_date: drop,
            pickup_time: None,
            drop_time: None,
            payment_option: PaymentOption::Advance,
            demand: DemandLevel::Normal,
        }
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidRate { rate: dec!(-5) };
        assert!(err.to_string().contains("-5"));
        assert_eq!(err.error_type(), "invalid_rate");

        let err = PricingError::InvalidDateRange {
            pickup: "2024-01-03".to_string(),
            drop: "2024-01-01".to_string(),
        };
        assert!(err.to_string().contains("2024-01-01"));
        assert_eq!(err.error_type(), "invalid_date_range");
        assert_eq!(err.details(), json!({"pickup": "2024-01-03", "drop": "2024-01-01"}));

        let err = PricingError::AmountOutOfRange { rate: dec!(1) };
        assert!(err.to_string().contains("out of range"));
        assert_eq!(err.error_type(), "amount_out_of_range");
        assert_eq!(err.details(), json!({"base_daily_rate": "1"}));
    }

    #[test]
    fn test_quote_weekend_advance() {
        let response = quote(
            quote_request(dec!(100), date(2024, 1, 5), date(2024, 1, 7)),
            &PricingPolicy::default(),
        )
        .unwrap();

        assert_eq!(response.total_days, 2);
        assert_eq!(response.total_price.amount, dec!(240));
        assert_eq!(response.total_price.display, "₹240");
        assert_eq!(response.total_price.currency, "INR");
        assert_eq!(response.security_deposit.amount, dec!(24));
        assert_eq!(response.advance_payment.as_ref().unwrap().amount, dec!(84));
        assert_eq!(response.remaining_payment.as_ref().unwrap().amount, dec!(156));
        assert_eq!(response.amount_due_now.amount, dec!(108));
        assert_eq!(response.surcharges.len(), 1);
    }

    #[test]
    fn test_quote_uses_policy_currency() {
        let policy = PricingPolicy {
            currency: "USD".to_string(),
            currency_symbol: "$".to_string(),
            ..PricingPolicy::default()
        };
        let mut req = quote_request(dec!(100), date(2024, 1, 1), date(2024, 1, 3));
        req.payment_option = PaymentOption::Full;

        let response = quote(req, &policy).unwrap();
        assert_eq!(response.amount_due_now.display, "$220");
        assert!(response.advance_payment.is_none());
        assert!(response.remaining_payment.is_none());
    }

    #[test]
    fn test_quote_rejects_negative_rate() {
        let err = quote(
            quote_request(dec!(-1), date(2024, 1, 1), date(2024, 1, 3)),
            &PricingPolicy::default(),
        )
        .unwrap_err();
        assert_eq!(err, PricingError::InvalidRate { rate: dec!(-1) });
    }

    #[test]
    fn test_quote_rejects_reversed_dates() {
        let err = quote(
            quote_request(dec!(100), date(2024, 1, 3), date(2024, 1, 1)),
            &PricingPolicy::default(),
        )
        .unwrap_err();
        assert_eq!(err.error_type(), "invalid_date_range");
    }

    #[test]
    fn test_validate_compares_times_on_same_day() {
        let day = date(2024, 1, 1);
        let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        let request = RentalRequest::new(dec!(100), day, day, PaymentOption::Full).with_times(ten, nine);
        assert!(validate_request(&request).is_err());

        let request = RentalRequest::new(dec!(100), day, day, PaymentOption::Full).with_times(nine, ten);
        assert!(validate_request(&request).is_ok());

        // Only one time given: dates decide
        let mut request = RentalRequest::new(dec!(100), day, day, PaymentOption::Full);
        request.pickup_time = Some(ten);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_validate_accepts_zero_rate() {
        let day = date(2024, 1, 1);
        let request = RentalRequest::new(Decimal::ZERO, day, day, PaymentOption::Full);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_quote_rejects_overflowing_rate() {
        let rate: Decimal = "50000000000000000000000000000".parse().unwrap();
        let mut req = quote_request(rate, date(2024, 1, 1), date(2024, 1, 3));
        req.payment_option = PaymentOption::Full;

        let err = quote(req, &PricingPolicy::default()).unwrap_err();
        assert_eq!(err, PricingError::AmountOutOfRange { rate });
    }

    #[test]
    fn test_quote_at_decimal_max_over_weekend() {
        let err = quote(
            quote_request(Decimal::MAX, date(2024, 1, 5), date(2024, 1, 7)),
            &PricingPolicy::default(),
        )
        .unwrap_err();
        assert_eq!(err.error_type(), "amount_out_of_range");
    }

    #[test]
    fn test_quote_cent_rate() {
        let response = quote(
            quote_request(dec!(0.01), date(2024, 1, 1), date(2024, 1, 1)),
            &PricingPolicy::default(),
        )
        .unwrap();
        assert_eq!(response.total_price.amount, dec!(0));
        assert_eq!(response.amount_due_now.display, "₹0");
    }
}
