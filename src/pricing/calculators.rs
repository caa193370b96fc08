//! Core pricing calculation functions.
//!
//! Pure functions for rental pricing math - no I/O, no shared state.
//! The booking form and payment page both price rentals through
//! `calculate_price`.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;

use super::models::{PaymentOption, PriceBreakdown, RentalRequest, SurchargeKind, SurchargeLine};
use super::policy::{PricingPolicy, RoundingMode};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Round to specified decimal places using the given rounding mode.
///
/// `HalfUp` rounds midpoints away from zero; `HalfEven` is banker's rounding
/// and rounds midpoints to the nearest even digit.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use rental_pricing::pricing::{round_money, RoundingMode};
///
/// assert_eq!(round_money(dec!(2.5), 0, RoundingMode::HalfUp), dec!(3));
/// assert_eq!(round_money(dec!(2.5), 0, RoundingMode::HalfEven), dec!(2));
/// assert_eq!(round_money(dec!(1.234), 2, RoundingMode::HalfUp), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32, mode: RoundingMode) -> Decimal {
    amount.round_dp_with_strategy(places, mode.strategy())
}

/// Number of billable days between pickup and drop.
///
/// Partial days round up and the order of the two instants does not matter.
/// A zero-length rental still bills one day.
pub fn rental_days(pickup: NaiveDateTime, drop: NaiveDateTime) -> u32 {
    let seconds = (drop - pickup).num_seconds().unsigned_abs();
    let days = seconds.div_ceil(SECONDS_PER_DAY);
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

/// True if either end of the rental falls on a Saturday or Sunday
pub fn touches_weekend(pickup: NaiveDate, drop: NaiveDate) -> bool {
    [pickup, drop]
        .iter()
        .any(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
}

/// True if `time` falls in `[start, end)`, wrapping past midnight when
/// `start > end`.
pub fn in_night_window(time: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    if start <= end {
        time >= start && time < end
    } else {
        time >= start || time < end
    }
}

/// Format an amount as whole currency units behind a currency marker,
/// e.g. `₹240`.
pub fn format_amount(amount: Decimal, symbol: &str, mode: RoundingMode) -> String {
    format!("{}{}", symbol, round_money(amount, 0, mode))
}

/// Price a rental request under the given policy.
///
/// Multipliers compound in the order weekend, night, demand. Each applied
/// multiplier leaves a surcharge line holding its increment over the running
/// subtotal. The total is rounded to whole units before the deposit and the
/// advance split are taken from it.
///
/// # Panics
///
/// Panics if any amount, including total plus deposit, falls outside the
/// `Decimal` range. Use [`try_calculate_price`] for unchecked input.
pub fn calculate_price(request: &RentalRequest, policy: &PricingPolicy) -> PriceBreakdown {
    try_calculate_price(request, policy).expect("rental amount exceeds the decimal range")
}

/// Checked variant of [`calculate_price`]; `None` when an amount overflows.
pub fn try_calculate_price(request: &RentalRequest, policy: &PricingPolicy) -> Option<PriceBreakdown> {
    let mode = policy.rounding;

    let pickup = request
        .pickup_date
        .and_time(request.pickup_time.unwrap_or(NaiveTime::MIN));
    let drop = request
        .drop_date
        .and_time(request.drop_time.unwrap_or(NaiveTime::MIN));

    let total_days = rental_days(pickup, drop);
    let base_price = request
        .base_daily_rate
        .checked_mul(Decimal::from(total_days))?;

    let mut subtotal = base_price;
    let mut surcharges = Vec::new();

    let weekend_surcharge_applied = touches_weekend(request.pickup_date, request.drop_date)
        && apply_surcharge(
            &mut subtotal,
            &mut surcharges,
            SurchargeKind::Weekend,
            policy.weekend_surcharge_rate,
            mode,
        )?;

    let night = [request.pickup_time, request.drop_time]
        .into_iter()
        .flatten()
        .any(|time| in_night_window(time, policy.night_start, policy.night_end));
    if night {
        apply_surcharge(
            &mut subtotal,
            &mut surcharges,
            SurchargeKind::Night,
            policy.night_surcharge_rate,
            mode,
        )?;
    }

    apply_surcharge(
        &mut subtotal,
        &mut surcharges,
        SurchargeKind::Demand,
        policy.demand_rate(request.demand),
        mode,
    )?;

    let total_price = round_money(subtotal, 0, mode);
    let security_deposit = round_money(
        total_price.checked_mul(policy.security_deposit_rate)?,
        0,
        mode,
    );
    // amount_due_now adds these unchecked
    total_price.checked_add(security_deposit)?;

    let (advance_payment, remaining_payment) = match request.payment_option {
        PaymentOption::Advance => (
            Some(round_money(total_price.checked_mul(policy.advance_share)?, 0, mode)),
            Some(round_money(total_price.checked_mul(policy.remaining_share())?, 0, mode)),
        ),
        PaymentOption::Full => (None, None),
    };

    Some(PriceBreakdown {
        base_price,
        total_days,
        weekend_surcharge_applied,
        surcharges,
        total_price,
        security_deposit,
        payment_option: request.payment_option,
        advance_payment,
        remaining_payment,
    })
}

/// Compound `rate` into the subtotal. Returns `Some(false)` (and records
/// nothing) for a zero rate, `None` on overflow.
fn apply_surcharge(
    subtotal: &mut Decimal,
    surcharges: &mut Vec<SurchargeLine>,
    kind: SurchargeKind,
    rate: Decimal,
    mode: RoundingMode,
) -> Option<bool> {
    if rate.is_zero() {
        return Some(false);
    }

    let next = subtotal.checked_mul(Decimal::ONE.checked_add(rate)?)?;
    surcharges.push(SurchargeLine {
        kind,
        rate,
        amount: round_money(next.checked_sub(*subtotal)?, 2, mode),
    });
    *subtotal = next;
    Some(true)
}
