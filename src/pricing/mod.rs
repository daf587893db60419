//! Pricing engine for tour bookings.
//!
//! Computes the total amount payable for a trip from a catalogue snapshot and
//! a caller-built context: tiered per-pax base price, seasonal surcharges,
//! additional fees under their billing units, boat/cabin capacity pricing and
//! hotel room allocation. Pure computation over already-fetched data; the
//! callers own fetching, rendering and persistence.

pub mod allocators;
pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use allocators::{allocate_capacity, allocate_hotel, eligible_boats};
pub use calculators::{
    compute_applicable_fees, evaluate_surcharge, fees_total, resolve_base_price, trip_date_span,
};
pub use models::CatalogueSnapshot;
pub use requests::{CabinAllocation, HotelSelection, PricingContext};
pub use responses::{CapacityBreakdown, FeeLineItem, HotelBreakdown, PricingResult};
pub use services::compute_total;
