use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub type ListingId = u32;

/// Shown whenever a listing has no image or an image fails to load.
pub const DEFAULT_IMAGE: &str = "/static/img/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListingKind {
    Rent,
    Sale,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Rent => "rent",
            ListingKind::Sale => "sale",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::Rent => "For Rent",
            ListingKind::Sale => "For Sale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Villa,
    Loft,
    Townhouse,
    Penthouse,
    Cabin,
}

impl PropertyType {
    pub const ALL: [PropertyType; 8] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Studio,
        PropertyType::Villa,
        PropertyType::Loft,
        PropertyType::Townhouse,
        PropertyType::Penthouse,
        PropertyType::Cabin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Studio => "studio",
            PropertyType::Villa => "villa",
            PropertyType::Loft => "loft",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Cabin => "cabin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Studio => "Studio",
            PropertyType::Villa => "Villa",
            PropertyType::Loft => "Loft",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Cabin => "Cabin",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// A housing listing. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingListing {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub kind: ListingKind,
    pub location: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area_sqft: u32,
    pub property_type: PropertyType,
    pub images: Vec<String>,
    pub posted: String,
    pub contact_email: String,
    pub amenities: BTreeSet<String>,
}

impl HousingListing {
    pub fn cover_image(&self) -> &str {
        self.images
            .iter()
            .map(String::as_str)
            .find(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_IMAGE)
    }

    /// "$1,850/mo" for rentals, "$420,000" for sales.
    pub fn price_label(&self) -> String {
        match self.kind {
            ListingKind::Rent => format!("${}/mo", group_thousands(self.price)),
            ListingKind::Sale => format!("${}", group_thousands(self.price)),
        }
    }
}

/// A vehicle shown in the "fresh recommendations" grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: ListingId,
    pub title: String,
    /// Already formatted for display.
    pub price: String,
    pub year: u16,
    pub mileage: String,
    pub location: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub featured: bool,
    pub image: String,
    pub rating: u8,
}

impl Recommendation {
    pub const MAX_RATING: u8 = 5;

    pub fn stars(&self) -> u8 {
        self.rating.min(Self::MAX_RATING)
    }

    pub fn image_or_default(&self) -> &str {
        if self.image.trim().is_empty() {
            DEFAULT_IMAGE
        } else {
            &self.image
        }
    }

    /// "Oct 19, 2026", or the raw value when it is not an ISO date.
    pub fn date_label(&self) -> String {
        chrono::NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
