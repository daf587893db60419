//! Boat/cabin capacity allocation and hotel room allocation.
//!
//! Unlike the zero-pricing policies of the calculators, allocation bounds are
//! hard: an assignment outside a cabin's occupancy range or a pax total above
//! the booking headcount is a caller bug and is rejected, never clamped.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{AllocationError, AllocationKind, Result};

use super::models::{Boat, Cabin, Hotel};
use super::requests::{CabinAllocation, HotelSelection};
use super::responses::{CapacityBreakdown, HotelBreakdown};

/// Boats that can carry the whole party.
///
/// A boat is eligible when it is active, its active cabins sum to at least
/// the headcount, and at least one active cabin's `min_pax` is within reach
/// of the party (otherwise no single cabin could be booked at all).
pub fn eligible_boats<'a>(boats: &'a [Boat], headcount: u32) -> Vec<&'a Boat> {
    boats
        .iter()
        .filter(|boat| {
            boat.active
                && boat.total_cabin_capacity() >= headcount
                && boat.active_cabins().any(|cabin| cabin.min_pax <= headcount)
        })
        .collect()
}

/// Cost of one cabin assigned `pax` occupants: the base price covers up to
/// `min_pax`, each extra occupant pays the incremental rate.
fn cabin_cost(cabin: &Cabin, pax: u32) -> Decimal {
    cabin.base_price + Decimal::from(pax.saturating_sub(cabin.min_pax)) * cabin.additional_price
}

/// Price the caller's explicit cabin assignments on the selected boat.
///
/// With no boat and no assignments the breakdown is all zeros (the booking
/// prices through per-pax tiers instead). When a boat is not named, it is
/// resolved as the boat carrying the first assigned cabin. `boats_needed`
/// and `cabins_needed` are coarse ceiling estimates; the money comes only
/// from the explicit assignments. The resulting `cabin_total` replaces
/// per-pax base pricing for the booking.
pub fn allocate_capacity(
    boats: &[Boat],
    headcount: u32,
    boat_id: Option<Uuid>,
    allocations: &[CabinAllocation],
) -> Result<CapacityBreakdown> {
    if boat_id.is_none() && allocations.is_empty() {
        return Ok(CapacityBreakdown::zero());
    }

    let boat = match boat_id {
        Some(id) => boats
            .iter()
            .find(|b| b.id == id)
            .ok_or(AllocationError::UnknownBoat { boat_id: id })?,
        None => {
            let first = &allocations[0];
            boats
                .iter()
                .filter(|b| b.active)
                .find(|b| b.cabins.iter().any(|c| c.id == first.cabin_id))
                .ok_or(AllocationError::UnknownCabin {
                    cabin_id: first.cabin_id,
                })?
        }
    };

    let capacity = boat.total_cabin_capacity();
    let boats_needed = if capacity > 0 {
        headcount.div_ceil(capacity)
    } else {
        0
    };
    let cabins_needed = match boat.active_cabins().next() {
        Some(first) if first.max_pax > 0 => headcount.div_ceil(first.max_pax),
        _ => 0,
    };

    let mut cabin_total = Decimal::ZERO;
    let mut allocated = 0u32;
    for allocation in allocations {
        // Inactive cabins are not bookable.
        let cabin = boat
            .active_cabins()
            .find(|c| c.id == allocation.cabin_id)
            .ok_or(AllocationError::UnknownCabin {
                cabin_id: allocation.cabin_id,
            })?;

        if allocation.pax < cabin.min_pax || allocation.pax > cabin.max_pax {
            return Err(AllocationError::CabinOccupancyOutOfBounds {
                cabin_id: cabin.id,
                pax: allocation.pax,
                min_pax: cabin.min_pax,
                max_pax: cabin.max_pax,
            });
        }

        allocated += allocation.pax;
        cabin_total += cabin_cost(cabin, allocation.pax);
    }

    if allocated > headcount {
        return Err(AllocationError::HeadcountExceeded {
            kind: AllocationKind::Cabin,
            allocated,
            headcount,
        });
    }

    Ok(CapacityBreakdown {
        cabin_total,
        boats_needed,
        cabins_needed,
    })
}

/// Price the caller's hotel room selections for a stay of `nights`.
///
/// The total pax housed across all selections must not exceed the booking
/// headcount. Empty selections price to zero.
pub fn allocate_hotel(
    hotels: &[Hotel],
    headcount: u32,
    nights: u32,
    selections: &[HotelSelection],
) -> Result<HotelBreakdown> {
    let allocated: u32 = selections.iter().map(|s| s.pax).sum();
    if allocated > headcount {
        return Err(AllocationError::HeadcountExceeded {
            kind: AllocationKind::Hotel,
            allocated,
            headcount,
        });
    }

    let mut hotel_total = Decimal::ZERO;
    for selection in selections {
        // Inactive hotels are not bookable.
        let hotel = hotels
            .iter()
            .filter(|h| h.active)
            .find(|h| h.id == selection.hotel_id)
            .ok_or(AllocationError::UnknownHotel {
                hotel_id: selection.hotel_id,
            })?;

        hotel_total += hotel.price_per_night * Decimal::from(selection.rooms) * Decimal::from(nights);
    }

    Ok(HotelBreakdown { hotel_total })
}
