//! Request DTOs for pricing API endpoints.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{DemandLevel, PaymentOption, RentalRequest};

/// Request to quote a rental
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_daily_rate: Decimal,
    pub pickup_date: NaiveDate,
    pub drop_date: NaiveDate,
    #[serde(default)]
    pub pickup_time: Option<NaiveTime>,
    #[serde(default)]
    pub drop_time: Option<NaiveTime>,
    #[serde(default)]
    pub payment_option: PaymentOption,
    #[serde(default)]
    pub demand: DemandLevel,
}

impl From<QuoteRequest> for RentalRequest {
    fn from(req: QuoteRequest) -> Self {
        RentalRequest {
            base_daily_rate: req.base_daily_rate,
            pickup_date: req.pickup_date,
            drop_date: req.drop_date,
            pickup_time: req.pickup_time,
            drop_time: req.drop_time,
            payment_option: req.payment_option,
            demand: req.demand,
        }
    }
}
