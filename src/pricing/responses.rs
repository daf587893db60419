//! Output types of the pricing engine.
//!
//! Money fields serialize as strings so JSON consumers never see floats.
//! A `PricingResult` is rebuilt on every invocation and never cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One billed fee line, in category first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeLineItem {
    pub fee_id: Uuid,
    pub category: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Per-pax surcharge resolved for a trip span, and its headcount total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurchargeOutcome {
    #[serde(with = "rust_decimal::serde::str")]
    pub per_pax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl SurchargeOutcome {
    pub const ZERO: SurchargeOutcome = SurchargeOutcome {
        per_pax: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// Result of boat/cabin allocation. `cabin_total` replaces per-pax base
/// pricing for the booking; the needed counts are coarse estimates, real
/// allocation is the caller's explicit cabin assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityBreakdown {
    #[serde(with = "rust_decimal::serde::str")]
    pub cabin_total: Decimal,
    pub boats_needed: u32,
    pub cabins_needed: u32,
}

impl CapacityBreakdown {
    pub fn zero() -> Self {
        Self {
            cabin_total: Decimal::ZERO,
            boats_needed: 0,
            cabins_needed: 0,
        }
    }
}

/// Result of hotel room allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelBreakdown {
    #[serde(with = "rust_decimal::serde::str")]
    pub hotel_total: Decimal,
}

/// The full line-item breakdown of one priced booking.
///
/// `base_price_total` and `cabin_total` are mutually exclusive in practice
/// (one is forced to zero by the boat-pricing rule) but the grand total
/// always sums both so callers never branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price_per_pax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub surcharge_total: Decimal,
    pub fee_line_items: Vec<FeeLineItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub fees_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cabin_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub hotel_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub grand_total: Decimal,
}
