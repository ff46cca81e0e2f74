use std::collections::BTreeSet;
use std::str::FromStr;

use crate::domain::listing::{HousingListing, ListingKind, PropertyType};

/// Bedroom/bathroom selection: either an exact count or the "4+" overflow bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CountBucket {
    Exact(u8),
    FourPlus,
}

impl CountBucket {
    pub const OVERFLOW_AT: u8 = 4;

    /// Buckets offered by the filter sidebar.
    pub const OFFERED: [CountBucket; 4] = [
        CountBucket::Exact(1),
        CountBucket::Exact(2),
        CountBucket::Exact(3),
        CountBucket::FourPlus,
    ];

    pub fn matches(&self, count: u8) -> bool {
        match self {
            CountBucket::Exact(n) => count == *n,
            CountBucket::FourPlus => count >= Self::OVERFLOW_AT,
        }
    }

    pub fn label(&self) -> String {
        match self {
            CountBucket::Exact(n) => n.to_string(),
            CountBucket::FourPlus => "4+".to_string(),
        }
    }
}

impl FromStr for CountBucket {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4+" => Ok(CountBucket::FourPlus),
            other => other.parse::<u8>().map(CountBucket::Exact).map_err(|_| ()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(ListingKind),
}

impl KindFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn matches(&self, kind: ListingKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(wanted) => *wanted == kind,
        }
    }

    /// Unknown values fall back to `All`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim() {
            "rent" => KindFilter::Only(ListingKind::Rent),
            "sale" => KindFilter::Only(ListingKind::Sale),
            _ => KindFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending id; ids are assigned in posting order.
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Newest, SortKey::PriceLow, SortKey::PriceHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::PriceLow => "Price: low to high",
            SortKey::PriceHigh => "Price: high to low",
        }
    }

    /// Unknown values fall back to `Newest`.
    pub fn parse_lenient(s: &str) -> Self {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .unwrap_or_default()
    }
}

/// Every active predicate must hold for a listing to be shown.
/// Empty sets and `None` mean "not applied".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub property_types: BTreeSet<PropertyType>,
    pub locations: BTreeSet<String>,
    pub bedrooms: BTreeSet<CountBucket>,
    pub bathrooms: BTreeSet<CountBucket>,
    pub max_price: Option<u32>,
    pub kind: KindFilter,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }

    pub fn matches(&self, listing: &HousingListing) -> bool {
        self.matches_query(listing)
            && (self.property_types.is_empty()
                || self.property_types.contains(&listing.property_type))
            && (self.locations.is_empty() || self.locations.contains(&listing.location))
            && matches_buckets(&self.bedrooms, listing.bedrooms)
            && matches_buckets(&self.bathrooms, listing.bathrooms)
            && self.max_price.map_or(true, |cap| listing.price <= cap)
            && self.kind.matches(listing.kind)
    }

    fn matches_query(&self, listing: &HousingListing) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        listing.title.to_lowercase().contains(&needle)
            || listing.location.to_lowercase().contains(&needle)
    }
}

fn matches_buckets(selected: &BTreeSet<CountBucket>, count: u8) -> bool {
    selected.is_empty() || selected.iter().any(|b| b.matches(count))
}

/// Non-numeric input means "no cap". Numeric input always caps: fractions
/// floor to whole units and negative values clamp to zero.
pub fn parse_price_cap(raw: &str) -> Option<u32> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '_'))
        .collect();

    let value: f64 = cleaned.parse().ok()?;
    if value.is_nan() {
        return None;
    }
    // `as` saturates: below zero becomes 0, above u32::MAX becomes u32::MAX.
    Some(value.floor() as u32)
}
