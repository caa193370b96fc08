//! Pricing engine module for car rentals.
//!
//! Provides the rental price calculation used by the booking form and the
//! payment page. The front-end calls it over HTTP/JSON.

pub mod calculators;
pub mod models;
pub mod policy;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_price, format_amount, round_money};
pub use models::{DemandLevel, PaymentOption, PriceBreakdown, RentalRequest, SurchargeKind, SurchargeLine};
pub use policy::{PricingPolicy, RoundingMode};
pub use routes::router;
pub use services::PricingError;
