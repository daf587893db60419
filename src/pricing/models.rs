//! Catalogue data model for the pricing engine.
//!
//! These types are the already-fetched snapshot a caller assembles before
//! invoking the engine. The engine never fetches anything itself. Money is
//! always `Decimal` (loose upstream values — numbers or numeric strings —
//! land here as fixed-point, never as floats or passed-through text).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-side region of a booking party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Domestic,
    Overseas,
}

/// Catalogue-side region scope of a tier or fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionScope {
    Domestic,
    Overseas,
    Both,
}

impl RegionScope {
    /// Whether a catalogue entry with this scope applies to the given caller region.
    pub fn applies_to(self, region: Region) -> bool {
        match self {
            RegionScope::Both => true,
            RegionScope::Domestic => region == Region::Domestic,
            RegionScope::Overseas => region == Region::Overseas,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    Open,
    Private,
}

/// Billing unit of an additional fee.
///
/// `Flat` covers catalogue entries whose unit is anything other than the four
/// recognized multipliers: the fee price is charged once, unmultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeUnit {
    PerPax,
    Per5Pax,
    PerDay,
    PerDayGuide,
    Flat,
}

/// Day-of-week class a fee is restricted to. A fee without one applies on any day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Weekend,
}

/// Hotel room capacity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyType {
    Single,
    Double,
}

impl OccupancyType {
    /// Occupants a single room of this class holds.
    pub fn capacity(self) -> u32 {
        match self {
            OccupancyType::Single => 1,
            OccupancyType::Double => 2,
        }
    }
}

/// A per-pax price bracket keyed by headcount range and region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub pax_min: u32,
    pub pax_max: u32,
    pub price_per_pax: Decimal,
    pub region: RegionScope,
}

impl PriceTier {
    /// Whether the inclusive `[pax_min, pax_max]` range contains the headcount.
    pub fn covers(&self, headcount: u32) -> bool {
        headcount >= self.pax_min && headcount <= self.pax_max
    }
}

/// One bookable duration of a trip, with its tier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDuration {
    pub label: String,
    pub days: u32,
    /// Explicit night count. When absent it is parsed from labels of the
    /// form "<D>d<N>n" (e.g. "4D3N"), falling back to `days - 1`.
    #[serde(default)]
    pub nights: Option<u32>,
    #[serde(default)]
    pub tiers: Vec<PriceTier>,
}

impl TripDuration {
    /// Night count used for lodging: explicit value, then label, then `days - 1` (floor 0).
    pub fn effective_nights(&self) -> u32 {
        self.nights
            .or_else(|| parse_nights_from_label(&self.label))
            .unwrap_or_else(|| self.days.saturating_sub(1))
    }
}

/// Parse the night count out of a "<D>d<N>n" label, case-insensitive.
///
/// Returns None unless the label is exactly digits-'d'-digits-'n'.
fn parse_nights_from_label(label: &str) -> Option<u32> {
    let lower = label.trim().to_ascii_lowercase();
    let (days_part, rest) = lower.split_once('d')?;
    let nights_part = rest.strip_suffix('n')?;
    if days_part.is_empty() || days_part.bytes().any(|b| !b.is_ascii_digit()) {
        return None;
    }
    nights_part.parse::<u32>().ok()
}

/// An optional or mandatory fee line attached to a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalFee {
    pub id: Uuid,
    pub label: String,
    /// Explicit grouping key. Catalogues that still encode variants as
    /// "Guide1"/"Guide2" leave this unset and fall back to label stripping.
    #[serde(default)]
    pub category_group: Option<String>,
    pub price: Decimal,
    pub region: RegionScope,
    pub unit: FeeUnit,
    pub pax_min: u32,
    pub pax_max: u32,
    #[serde(default)]
    pub day_type: Option<DayType>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl AdditionalFee {
    /// Grouping key: the explicit group when set, otherwise the label with
    /// trailing ASCII digits stripped ("Guide1" and "Guide2" collapse to "Guide").
    pub fn category_key(&self) -> &str {
        match &self.category_group {
            Some(group) => group,
            None => self.label.trim_end_matches(|c: char| c.is_ascii_digit()),
        }
    }

    /// Whether the fee's `[pax_min, pax_max]` range contains the headcount.
    pub fn covers(&self, headcount: u32) -> bool {
        headcount >= self.pax_min && headcount <= self.pax_max
    }
}

/// A seasonal per-pax surcharge window. Dates are inclusive and date-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surcharge {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price_per_pax: Decimal,
}

impl Surcharge {
    /// Whether the surcharge window intersects the inclusive `[start, end]` span.
    pub fn overlaps(&self, span_start: NaiveDate, span_end: NaiveDate) -> bool {
        self.start_date <= span_end && self.end_date >= span_start
    }
}

/// A berth group on a boat. `base_price` covers up to `min_pax` occupants;
/// each extra occupant up to `max_pax` pays `additional_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabin {
    pub id: Uuid,
    pub min_pax: u32,
    pub max_pax: u32,
    pub base_price: Decimal,
    pub additional_price: Decimal,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    pub id: Uuid,
    pub name: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub cabins: Vec<Cabin>,
}

impl Boat {
    pub fn active_cabins(&self) -> impl Iterator<Item = &Cabin> {
        self.cabins.iter().filter(|c| c.active)
    }

    /// Sum of `max_pax` over active cabins.
    pub fn total_cabin_capacity(&self) -> u32 {
        self.active_cabins().map(|c| c.max_pax).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub occupancy: OccupancyType,
    pub price_per_night: Decimal,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Immutable trip reference data, owned by catalogue management upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub name: String,
    pub trip_type: TripType,
    #[serde(default)]
    pub has_boat: bool,
    #[serde(default)]
    pub durations: Vec<TripDuration>,
    #[serde(default)]
    pub fees: Vec<AdditionalFee>,
    #[serde(default)]
    pub surcharges: Vec<Surcharge>,
}

impl Trip {
    /// Look up a duration by its label.
    pub fn duration(&self, label: &str) -> Option<&TripDuration> {
        self.durations.iter().find(|d| d.label == label)
    }
}

/// The consistent catalogue snapshot a caller fetches before pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueSnapshot {
    pub trip: Trip,
    #[serde(default)]
    pub boats: Vec<Boat>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_region_scope_applies() {
        assert!(RegionScope::Both.applies_to(Region::Domestic));
        assert!(RegionScope::Both.applies_to(Region::Overseas));
        assert!(RegionScope::Domestic.applies_to(Region::Domestic));
        assert!(!RegionScope::Domestic.applies_to(Region::Overseas));
        assert!(!RegionScope::Overseas.applies_to(Region::Domestic));
    }

    #[test]
    fn test_occupancy_capacity() {
        assert_eq!(OccupancyType::Single.capacity(), 1);
        assert_eq!(OccupancyType::Double.capacity(), 2);
    }

    #[test]
    fn test_effective_nights_explicit_wins() {
        let duration = TripDuration {
            label: "4d3n".to_string(),
            days: 4,
            nights: Some(2),
            tiers: vec![],
        };
        assert_eq!(duration.effective_nights(), 2);
    }

    #[test]
    fn test_effective_nights_from_label() {
        let duration = TripDuration {
            label: "4D3N".to_string(),
            days: 4,
            nights: None,
            tiers: vec![],
        };
        assert_eq!(duration.effective_nights(), 3);
    }

    #[test]
    fn test_effective_nights_derived_from_days() {
        let duration = TripDuration {
            label: "Weekend getaway".to_string(),
            days: 3,
            nights: None,
            tiers: vec![],
        };
        assert_eq!(duration.effective_nights(), 2);
    }

    #[test]
    fn test_effective_nights_floor_zero() {
        let duration = TripDuration {
            label: "Day trip".to_string(),
            days: 0,
            nights: None,
            tiers: vec![],
        };
        assert_eq!(duration.effective_nights(), 0);
    }

    #[test]
    fn test_parse_nights_from_label_rejects_garbage() {
        assert_eq!(parse_nights_from_label("3d2n"), Some(2));
        assert_eq!(parse_nights_from_label(" 10D9N "), Some(9));
        assert_eq!(parse_nights_from_label("island hopping"), None);
        assert_eq!(parse_nights_from_label("d2n"), None);
        assert_eq!(parse_nights_from_label("3dxn"), None);
        assert_eq!(parse_nights_from_label("3d2"), None);
    }

    #[test]
    fn test_category_key_strips_trailing_digits() {
        let fee = fee_with_label("Guide1", None);
        assert_eq!(fee.category_key(), "Guide");
        let fee = fee_with_label("Guide2", None);
        assert_eq!(fee.category_key(), "Guide");
        let fee = fee_with_label("Park entrance", None);
        assert_eq!(fee.category_key(), "Park entrance");
    }

    #[test]
    fn test_category_key_explicit_group_wins() {
        let fee = fee_with_label("Guide1", Some("guides"));
        assert_eq!(fee.category_key(), "guides");
    }

    #[test]
    fn test_surcharge_overlap() {
        let s = Surcharge {
            start_date: date(2025, 12, 20),
            end_date: date(2025, 12, 31),
            price_per_pax: dec!(200000),
        };
        assert!(s.overlaps(date(2025, 12, 25), date(2025, 12, 27)));
        assert!(s.overlaps(date(2025, 12, 15), date(2025, 12, 20)));
        assert!(s.overlaps(date(2025, 12, 31), date(2026, 1, 2)));
        assert!(!s.overlaps(date(2025, 12, 15), date(2025, 12, 19)));
        assert!(!s.overlaps(date(2026, 1, 1), date(2026, 1, 3)));
    }

    #[test]
    fn test_boat_capacity_ignores_inactive_cabins() {
        let boat = Boat {
            id: Uuid::new_v4(),
            name: "Sea Queen".to_string(),
            active: true,
            cabins: vec![cabin(2, 4, true), cabin(1, 2, false)],
        };
        assert_eq!(boat.total_cabin_capacity(), 4);
        assert_eq!(boat.active_cabins().count(), 1);
    }

    #[test]
    fn test_catalogue_money_accepts_numbers_and_strings() {
        let tier: PriceTier = serde_json::from_str(
            r#"{"pax_min":1,"pax_max":4,"price_per_pax":1000000,"region":"domestic"}"#,
        )
        .unwrap();
        assert_eq!(tier.price_per_pax, dec!(1000000));

        let tier: PriceTier = serde_json::from_str(
            r#"{"pax_min":1,"pax_max":4,"price_per_pax":"1000000","region":"both"}"#,
        )
        .unwrap();
        assert_eq!(tier.price_per_pax, dec!(1000000));
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cabin(min_pax: u32, max_pax: u32, active: bool) -> Cabin {
        Cabin {
            id: Uuid::new_v4(),
            min_pax,
            max_pax,
            base_price: dec!(5000000),
            additional_price: dec!(800000),
            active,
        }
    }

    fn fee_with_label(label: &str, group: Option<&str>) -> AdditionalFee {
        AdditionalFee {
            id: Uuid::new_v4(),
            label: label.to_string(),
            category_group: group.map(str::to_string),
            price: dec!(100000),
            region: RegionScope::Both,
            unit: FeeUnit::PerPax,
            pax_min: 1,
            pax_max: 100,
            day_type: None,
            required: false,
            active: true,
        }
    }
}
