//! Price aggregation: one entry point for every money amount shown or stored.
//!
//! The booking form's live estimate, the payment screen's breakdown and the
//! invoice exporter all call [`compute_total`] with the same catalogue
//! snapshot and context shape, so the numbers can never drift between them.

use rust_decimal::Decimal;

use crate::error::Result;

use super::allocators::{allocate_capacity, allocate_hotel};
use super::calculators::{compute_applicable_fees, evaluate_surcharge, fees_total, resolve_base_price};
use super::models::CatalogueSnapshot;
use super::requests::PricingContext;
use super::responses::{CapacityBreakdown, PricingResult};

/// Price one booking against a catalogue snapshot.
///
/// Boat pricing is active when the trip is flagged `has_boat` or the context
/// carries any boat/cabin selection; it forces the per-pax base price to zero
/// and the cabin total takes its place. The grand total always sums all five
/// buckets (base, surcharge, fees, cabins, hotels) so callers never branch on
/// which path priced the booking.
///
/// Pure and deterministic: identical inputs produce identical results whether
/// this runs for a pre-booking estimate, a persisted booking's display, or
/// invoice generation.
pub fn compute_total(
    catalogue: &CatalogueSnapshot,
    context: &PricingContext,
) -> Result<PricingResult> {
    let trip = &catalogue.trip;
    let duration = trip
        .duration(&context.selected_duration_label)
        .ok_or_else(|| crate::error::AllocationError::UnknownDuration {
            label: context.selected_duration_label.clone(),
        })?;

    let boat_pricing = trip.has_boat || context.has_boat_selection();

    let base_price_per_pax = if boat_pricing {
        Decimal::ZERO
    } else {
        resolve_base_price(&duration.tiers, context.headcount, context.region)
    };
    let base_price_total = base_price_per_pax * Decimal::from(context.headcount);

    let surcharge = evaluate_surcharge(
        &trip.surcharges,
        context.travel_start_date,
        duration.days,
        context.headcount,
    );

    let fee_line_items = compute_applicable_fees(
        &trip.fees,
        context.headcount,
        duration.days,
        context.travel_start_date,
        context.region,
        &context.selected_fee_ids,
    );
    let fees_total = fees_total(&fee_line_items);

    let capacity = if boat_pricing {
        allocate_capacity(
            &catalogue.boats,
            context.headcount,
            context.selected_boat_id,
            &context.selected_cabin_allocations,
        )?
    } else {
        CapacityBreakdown::zero()
    };

    let hotel = allocate_hotel(
        &catalogue.hotels,
        context.headcount,
        duration.effective_nights(),
        &context.selected_hotel_rooms,
    )?;

    let grand_total =
        base_price_total + surcharge.total + fees_total + capacity.cabin_total + hotel.hotel_total;

    Ok(PricingResult {
        base_price_per_pax,
        base_price_total,
        surcharge_total: surcharge.total,
        fee_line_items,
        fees_total,
        cabin_total: capacity.cabin_total,
        hotel_total: hotel.hotel_total,
        grand_total,
    })
}
