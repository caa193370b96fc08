//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{PaymentOption, SurchargeKind};

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    /// Whole units behind the currency marker, e.g. "₹240"
    pub display: String,
}

/// One surcharge line in a quote
#[derive(Debug, Clone, Serialize)]
pub struct SurchargeResponse {
    pub kind: SurchargeKind,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    pub amount: MoneyResponse,
}

/// Response for a rental quote
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub total_days: u32,
    pub base_price: MoneyResponse,
    pub weekend_surcharge_applied: bool,
    pub surcharges: Vec<SurchargeResponse>,
    pub total_price: MoneyResponse,
    pub security_deposit: MoneyResponse,
    pub payment_option: PaymentOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_payment: Option<MoneyResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_payment: Option<MoneyResponse>,
    pub amount_due_now: MoneyResponse,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
