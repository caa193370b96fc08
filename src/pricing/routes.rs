//! Pricing API route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::policy::PricingPolicy;
use super::requests::QuoteRequest;
use super::responses::QuoteResponse;
use super::services;

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/policy", get(policy))
}

/// Price a rental for the booking and payment pages
async fn quote(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>> {
    let Json(req) = payload?;
    let response = services::quote(req, &state.policy)?;
    Ok(Json(response))
}

/// Active pricing policy
async fn policy(State(state): State<AppState>) -> Json<PricingPolicy> {
    Json((*state.policy).clone())
}
