//! Rental pricing service for the car rental marketplace.
//!
//! The library exposes the pure calculator under [`pricing`] and the axum
//! router under [`routes`]; `main` wires them to configuration and logging.

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use pricing::PricingPolicy;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<PricingPolicy>,
}

impl AppState {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}
