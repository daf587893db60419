//! tripops-pricing: the pricing and availability engine behind tour bookings.
//!
//! One pure module owns every money amount a booking is ever shown or
//! charged. The booking form's live estimate, the payment screen and the
//! invoice exporter all call [`pricing::compute_total`] with the same inputs
//! and therefore always agree to the digit.
//!
//! ```
//! use std::collections::HashSet;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use uuid::Uuid;
//! use tripops_pricing::pricing::{self, models::*, PricingContext};
//!
//! let trip = Trip {
//!     id: Uuid::new_v4(),
//!     name: "Komodo explorer".to_string(),
//!     trip_type: TripType::Open,
//!     has_boat: false,
//!     durations: vec![TripDuration {
//!         label: "3D2N".to_string(),
//!         days: 3,
//!         nights: None,
//!         tiers: vec![PriceTier {
//!             pax_min: 1,
//!             pax_max: 4,
//!             price_per_pax: dec!(1000000),
//!             region: RegionScope::Domestic,
//!         }],
//!     }],
//!     fees: vec![],
//!     surcharges: vec![],
//! };
//! let catalogue = CatalogueSnapshot { trip, boats: vec![], hotels: vec![] };
//!
//! let context = PricingContext {
//!     region: Region::Domestic,
//!     headcount: 3,
//!     travel_start_date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
//!     selected_duration_label: "3D2N".to_string(),
//!     selected_boat_id: None,
//!     selected_cabin_allocations: vec![],
//!     selected_hotel_rooms: vec![],
//!     selected_fee_ids: HashSet::new(),
//! };
//!
//! let result = pricing::compute_total(&catalogue, &context).unwrap();
//! assert_eq!(result.grand_total, dec!(3000000));
//! ```

pub mod error;
pub mod pricing;

pub use error::{AllocationError, AllocationKind};
pub use pricing::{compute_total, CatalogueSnapshot, PricingContext, PricingResult};
