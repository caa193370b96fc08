//! Domain models for rental pricing.
//!
//! A `RentalRequest` is built transiently from booking-form input and a
//! `PriceBreakdown` is the immutable result of pricing it.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the renter pays at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOption {
    /// Whole rental price charged now
    #[default]
    Full,
    /// 35% now, the rest at pickup
    Advance,
}

/// Demand level for the requested period, set by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    #[default]
    Normal,
    High,
    Peak,
}

/// A single rental to be priced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalRequest {
    pub base_daily_rate: Decimal,
    pub pickup_date: NaiveDate,
    pub drop_date: NaiveDate,
    pub pickup_time: Option<NaiveTime>,
    pub drop_time: Option<NaiveTime>,
    pub payment_option: PaymentOption,
    pub demand: DemandLevel,
}

impl RentalRequest {
    /// Date-only request with normal demand, as the booking form sends it
    pub fn new(
        base_daily_rate: Decimal,
        pickup_date: NaiveDate,
        drop_date: NaiveDate,
        payment_option: PaymentOption,
    ) -> Self {
        Self {
            base_daily_rate,
            pickup_date,
            drop_date,
            pickup_time: None,
            drop_time: None,
            payment_option,
            demand: DemandLevel::Normal,
        }
    }

    pub fn with_times(mut self, pickup_time: NaiveTime, drop_time: NaiveTime) -> Self {
        self.pickup_time = Some(pickup_time);
        self.drop_time = Some(drop_time);
        self
    }

    pub fn with_demand(mut self, demand: DemandLevel) -> Self {
        self.demand = demand;
        self
    }
}

/// Which multiplier produced a surcharge line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeKind {
    Weekend,
    Night,
    Demand,
}

/// One applied multiplier and the amount it added to the running subtotal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurchargeLine {
    pub kind: SurchargeKind,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Computed price of a rental
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub total_days: u32,
    pub weekend_surcharge_applied: bool,
    pub surcharges: Vec<SurchargeLine>,
    pub total_price: Decimal,
    pub security_deposit: Decimal,
    pub payment_option: PaymentOption,
    /// Only present for `PaymentOption::Advance`
    pub advance_payment: Option<Decimal>,
    /// Only present for `PaymentOption::Advance`
    pub remaining_payment: Option<Decimal>,
}

impl PriceBreakdown {
    /// Amount charged at checkout, deposit included
    pub fn amount_due_now(&self) -> Decimal {
        let rental_part = match self.payment_option {
            PaymentOption::Advance => self.advance_payment.unwrap_or(self.total_price),
            PaymentOption::Full => self.total_price,
        };
        rental_part + self.security_deposit
    }
}
