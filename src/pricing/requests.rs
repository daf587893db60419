//! Caller-constructed inputs for a pricing run.
//!
//! A `PricingContext` is transient: the booking form, the payment screen and
//! the invoice exporter each rebuild one from their own data and must get the
//! same numbers back.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::models::Region;

/// Assignment of an occupant count to one cabin of the selected boat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinAllocation {
    pub cabin_id: Uuid,
    pub pax: u32,
}

/// A running room allocation against one hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSelection {
    pub hotel_id: Uuid,
    #[serde(default)]
    pub rooms: u32,
    #[serde(default)]
    pub pax: u32,
}

impl HotelSelection {
    pub fn new(hotel_id: Uuid) -> Self {
        Self {
            hotel_id,
            rooms: 0,
            pax: 0,
        }
    }

    /// Add one room, housing at most `remaining` travelers in it.
    ///
    /// Returns the pax actually housed so the caller can decrement its
    /// remaining-headcount counter.
    pub fn add_room(&mut self, capacity: u32, remaining: u32) -> u32 {
        let housed = capacity.min(remaining);
        self.rooms += 1;
        self.pax += housed;
        housed
    }
}

/// Everything the engine needs to price one booking, minus the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingContext {
    pub region: Region,
    pub headcount: u32,
    pub travel_start_date: NaiveDate,
    pub selected_duration_label: String,
    #[serde(default)]
    pub selected_boat_id: Option<Uuid>,
    #[serde(default)]
    pub selected_cabin_allocations: Vec<CabinAllocation>,
    #[serde(default)]
    pub selected_hotel_rooms: Vec<HotelSelection>,
    #[serde(default)]
    pub selected_fee_ids: HashSet<Uuid>,
}

impl PricingContext {
    /// Whether this booking prices through boat/cabin allocation rather than
    /// per-pax tiers (any boat or cabin selection forces the boat path).
    pub fn has_boat_selection(&self) -> bool {
        self.selected_boat_id.is_some() || !self.selected_cabin_allocations.is_empty()
    }
}
