//! Error handling for the pricing engine.
//!
//! Only caller bugs are errors: references to catalogue entries that do not
//! exist, or allocations that violate hard capacity bounds. Ambiguous pricing
//! states (no matching tier, no surcharge, no fee for a headcount) are policy
//! outcomes that price to zero and never error.

use uuid::Uuid;

/// What kind of allocation exceeded the booking headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationKind {
    Cabin,
    Hotel,
}

impl std::fmt::Display for AllocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationKind::Cabin => write!(f, "cabin"),
            AllocationKind::Hotel => write!(f, "hotel"),
        }
    }
}

/// Hard rejection raised when a caller's selections are inconsistent with the
/// catalogue snapshot. The engine never clamps; either the full breakdown is
/// produced or one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AllocationError {
    #[error("trip has no duration labelled '{label}'")]
    UnknownDuration { label: String },

    #[error("boat {boat_id} not found in catalogue snapshot")]
    UnknownBoat { boat_id: Uuid },

    #[error("cabin {cabin_id} not found on the selected boat")]
    UnknownCabin { cabin_id: Uuid },

    #[error("cabin {cabin_id} assigned {pax} pax, outside its {min_pax}..={max_pax} occupancy bounds")]
    CabinOccupancyOutOfBounds {
        cabin_id: Uuid,
        pax: u32,
        min_pax: u32,
        max_pax: u32,
    },

    #[error("hotel {hotel_id} not found in catalogue snapshot")]
    UnknownHotel { hotel_id: Uuid },

    #[error("{kind} allocations house {allocated} pax but the booking has only {headcount}")]
    HeadcountExceeded {
        kind: AllocationKind,
        allocated: u32,
        headcount: u32,
    },
}

pub type Result<T> = std::result::Result<T, AllocationError>;
