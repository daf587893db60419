//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no catalogue access, no I/O. Each one is
//! a function of its inputs, so repeated re-pricing of the same booking is
//! byte-identical across the booking form, the payment screen and invoices.

use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::models::{AdditionalFee, DayType, FeeUnit, PriceTier, Region, Surcharge};
use super::responses::{FeeLineItem, SurchargeOutcome};

/// Resolve the base per-pax price from a tier table.
///
/// First tier whose pax range contains the headcount and whose region scope
/// applies wins; overlapping ranges resolve by catalogue order. No matching
/// tier prices to zero — that policy mirrors what bookings are actually
/// charged today and is flagged in the data-model docs as a product decision
/// to confirm, not a validation the engine performs.
pub fn resolve_base_price(tiers: &[PriceTier], headcount: u32, region: Region) -> Decimal {
    tiers
        .iter()
        .find(|tier| tier.covers(headcount) && tier.region.applies_to(region))
        .map(|tier| tier.price_per_pax)
        .unwrap_or(Decimal::ZERO)
}

/// The inclusive calendar dates `[start, start + days - 1]` of a trip.
///
/// Dates are date-only, so the "normalize to midnight" rule of the upstream
/// data is already encoded in the type. Zero days is an empty span.
pub fn trip_date_span(start_date: NaiveDate, duration_days: u32) -> Vec<NaiveDate> {
    (0..duration_days)
        .filter_map(|offset| start_date.checked_add_days(Days::new(u64::from(offset))))
        .collect()
}

/// Whether any day of the span falls in the given day class.
///
/// Saturday or Sunday satisfies `Weekend`; Monday through Friday satisfies
/// `Weekday`.
pub fn span_matches_day_type(span: &[NaiveDate], day_type: DayType) -> bool {
    span.iter().any(|date| {
        let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        match day_type {
            DayType::Weekend => is_weekend,
            DayType::Weekday => !is_weekend,
        }
    })
}

/// Evaluate seasonal surcharges against a trip span.
///
/// A surcharge applies when its inclusive window intersects any trip date.
/// When several windows match, the last one in catalogue order wins
/// (overwrite, not additive). Overlapping seasons arguably should stack or
/// take the maximum; last-wins is the behavior bookings are charged under
/// today and changing it is a pending business decision, so it is preserved.
pub fn evaluate_surcharge(
    surcharges: &[Surcharge],
    start_date: NaiveDate,
    duration_days: u32,
    headcount: u32,
) -> SurchargeOutcome {
    if duration_days == 0 {
        return SurchargeOutcome::ZERO;
    }
    let span_end = start_date
        .checked_add_days(Days::new(u64::from(duration_days - 1)))
        .unwrap_or(start_date);

    let mut per_pax = Decimal::ZERO;
    for surcharge in surcharges {
        if surcharge.overlaps(start_date, span_end) {
            // last match wins
            per_pax = surcharge.price_per_pax;
        }
    }

    SurchargeOutcome {
        per_pax,
        total: per_pax * Decimal::from(headcount),
    }
}

/// Payable amount for one fee under its billing unit.
fn fee_amount(fee: &AdditionalFee, headcount: u32, duration_days: u32) -> Decimal {
    match fee.unit {
        FeeUnit::PerPax => fee.price * Decimal::from(headcount),
        FeeUnit::Per5Pax => fee.price * Decimal::from(headcount.div_ceil(5)),
        FeeUnit::PerDay | FeeUnit::PerDayGuide => fee.price * Decimal::from(duration_days),
        FeeUnit::Flat => fee.price,
    }
}

/// Compute the billed fee lines for a booking.
///
/// A fee is a candidate when it is active, its region scope applies and its
/// day-type restriction (if any) is satisfied by at least one day of the trip
/// span. Candidates are grouped by category key; within a category the first
/// fee whose pax range covers the headcount survives, so at most one fee per
/// category is billed (a category with no pax match contributes nothing).
/// A surviving fee is billed when it is required, or when the caller selected
/// its id. Lines come back in category first-appearance order.
pub fn compute_applicable_fees(
    fees: &[AdditionalFee],
    headcount: u32,
    duration_days: u32,
    start_date: NaiveDate,
    region: Region,
    selected_fee_ids: &HashSet<Uuid>,
) -> Vec<FeeLineItem> {
    let span = trip_date_span(start_date, duration_days);

    // One winner slot per category, in first-appearance order.
    let mut winners: Vec<(&str, Option<&AdditionalFee>)> = Vec::new();
    for fee in fees {
        if !fee.active || !fee.region.applies_to(region) {
            continue;
        }
        if let Some(day_type) = fee.day_type {
            if !span_matches_day_type(&span, day_type) {
                continue;
            }
        }

        let key = fee.category_key();
        match winners.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                if slot.is_none() && fee.covers(headcount) {
                    *slot = Some(fee);
                }
            }
            None => winners.push((key, fee.covers(headcount).then_some(fee))),
        }
    }

    winners
        .into_iter()
        .filter_map(|(key, slot)| {
            let fee = slot?;
            if !fee.required && !selected_fee_ids.contains(&fee.id) {
                return None;
            }
            Some(FeeLineItem {
                fee_id: fee.id,
                category: key.to_string(),
                amount: fee_amount(fee, headcount, duration_days),
            })
        })
        .collect()
}

/// Sum of fee line amounts.
pub fn fees_total(line_items: &[FeeLineItem]) -> Decimal {
    line_items.iter().map(|line| line.amount).sum()
}
