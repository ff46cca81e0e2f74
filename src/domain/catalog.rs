//! Hard-coded sample data and static page configuration.
//!
//! The catalog is built once at startup and shared read-only.

use std::collections::BTreeSet;

use crate::domain::listing::{
    HousingListing, ListingId, ListingKind, PropertyType, Recommendation,
};

pub struct Catalog {
    pub housing: Vec<HousingListing>,
    pub recommendations: Vec<Recommendation>,
}

impl Catalog {
    pub fn sample() -> Self {
        Self {
            housing: HOUSING_SEED.iter().map(HousingSeed::build).collect(),
            recommendations: RECOMMENDATION_SEED
                .iter()
                .map(RecommendationSeed::build)
                .collect(),
        }
    }

    pub fn housing_by_id(&self, id: ListingId) -> Option<&HousingListing> {
        self.housing.iter().find(|l| l.id == id)
    }

    pub fn recommendation_by_id(&self, id: ListingId) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.id == id)
    }

    /// Distinct housing locations, sorted, for the location facet.
    pub fn locations(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.housing.iter().map(|l| l.location.as_str()).collect();
        set.into_iter().collect()
    }

    /// Ceiling for the price slider.
    pub fn max_housing_price(&self) -> u32 {
        self.housing.iter().map(|l| l.price).max().unwrap_or(0)
    }
}

pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

pub struct Category {
    pub slug: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub subcategories: &'static [&'static str],
}

pub struct FooterSection {
    pub heading: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        title: "Find your next home",
        subtitle: "Apartments, houses and lofts from owners near you.",
        image: "/static/img/hero/home.jpg",
        cta_label: "Browse housing",
        cta_href: "/housing",
    },
    HeroSlide {
        title: "Drive something new",
        subtitle: "Fresh vehicle listings every day.",
        image: "/static/img/hero/cars.jpg",
        cta_label: "See vehicles",
        cta_href: "/category/vehicles",
    },
    HeroSlide {
        title: "Sell in minutes",
        subtitle: "Post a listing and reach buyers in your city.",
        image: "/static/img/hero/sell.jpg",
        cta_label: "Start selling",
        cta_href: "/profile",
    },
    HeroSlide {
        title: "Weekend getaways",
        subtitle: "Cabins and villas for a change of scenery.",
        image: "/static/img/hero/cabin.jpg",
        cta_label: "Explore cabins",
        cta_href: "/housing?type=cabin&type=villa",
    },
];

pub const CATEGORIES: &[Category] = &[
    Category {
        slug: "housing",
        label: "Housing",
        icon: "🏠",
        subcategories: &["Apartments", "Houses", "Rooms", "Vacation rentals"],
    },
    Category {
        slug: "vehicles",
        label: "Vehicles",
        icon: "🚗",
        subcategories: &["Cars", "Motorcycles", "Trucks", "Parts"],
    },
    Category {
        slug: "electronics",
        label: "Electronics",
        icon: "💻",
        subcategories: &["Phones", "Computers", "Audio", "Cameras"],
    },
    Category {
        slug: "jobs",
        label: "Jobs",
        icon: "💼",
        subcategories: &["Full-time", "Part-time", "Freelance"],
    },
    Category {
        slug: "services",
        label: "Services",
        icon: "🛠",
        subcategories: &["Cleaning", "Moving", "Repairs", "Lessons"],
    },
    Category {
        slug: "furniture",
        label: "Furniture",
        icon: "🛋",
        subcategories: &["Sofas", "Tables", "Beds", "Storage"],
    },
    Category {
        slug: "fashion",
        label: "Fashion",
        icon: "👗",
        subcategories: &["Women", "Men", "Kids", "Accessories"],
    },
    Category {
        slug: "pets",
        label: "Pets",
        icon: "🐾",
        subcategories: &["Adoption", "Supplies", "Pet sitting"],
    },
];

pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

pub const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        heading: "Listify",
        links: &[("About us", "/"), ("Careers", "/"), ("Press", "/")],
    },
    FooterSection {
        heading: "Browse",
        links: &[
            ("Housing", "/housing"),
            ("Vehicles", "/category/vehicles"),
            ("Electronics", "/category/electronics"),
            ("Jobs", "/category/jobs"),
        ],
    },
    FooterSection {
        heading: "Help",
        links: &[
            ("Safety tips", "/"),
            ("Posting rules", "/"),
            ("Contact", "/"),
        ],
    },
    FooterSection {
        heading: "Account",
        links: &[("Profile", "/profile"), ("Saved listings", "/profile")],
    },
];

struct HousingSeed {
    id: ListingId,
    title: &'static str,
    description: &'static str,
    price: u32,
    kind: ListingKind,
    location: &'static str,
    bedrooms: u8,
    bathrooms: u8,
    area_sqft: u32,
    property_type: PropertyType,
    images: &'static [&'static str],
    posted: &'static str,
    contact_email: &'static str,
    amenities: &'static [&'static str],
}

impl HousingSeed {
    fn build(&self) -> HousingListing {
        HousingListing {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            price: self.price,
            kind: self.kind,
            location: self.location.to_string(),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area_sqft: self.area_sqft,
            property_type: self.property_type,
            images: self.images.iter().map(|s| s.to_string()).collect(),
            posted: self.posted.to_string(),
            contact_email: self.contact_email.to_string(),
            amenities: self.amenities.iter().map(|s| s.to_string()).collect(),
        }
    }
}

struct RecommendationSeed {
    id: ListingId,
    title: &'static str,
    price: &'static str,
    year: u16,
    mileage: &'static str,
    location: &'static str,
    date: &'static str,
    featured: bool,
    image: &'static str,
    rating: u8,
}

impl RecommendationSeed {
    fn build(&self) -> Recommendation {
        Recommendation {
            id: self.id,
            title: self.title.to_string(),
            price: self.price.to_string(),
            year: self.year,
            mileage: self.mileage.to_string(),
            location: self.location.to_string(),
            date: self.date.to_string(),
            featured: self.featured,
            image: self.image.to_string(),
            rating: self.rating,
        }
    }
}

const HOUSING_SEED: &[HousingSeed] = &[
    HousingSeed {
        id: 1,
        title: "Sunny 2BR apartment near the park",
        description: "Bright corner unit with big windows, hardwood floors and a short walk to the park.",
        price: 1450,
        kind: ListingKind::Rent,
        location: "Downtown",
        bedrooms: 2,
        bathrooms: 1,
        area_sqft: 850,
        property_type: PropertyType::Apartment,
        images: &["/static/img/housing/1a.jpg", "/static/img/housing/1b.jpg"],
        posted: "3 weeks ago",
        contact_email: "maria@listify.example",
        amenities: &["Parking", "Laundry", "Balcony"],
    },
    HousingSeed {
        id: 2,
        title: "Cozy studio with city views",
        description: "Compact studio on the 12th floor, fully furnished, utilities included.",
        price: 980,
        kind: ListingKind::Rent,
        location: "Midtown",
        bedrooms: 1,
        bathrooms: 1,
        area_sqft: 420,
        property_type: PropertyType::Studio,
        images: &["/static/img/housing/2a.jpg"],
        posted: "3 weeks ago",
        contact_email: "leasing@midtownliving.example",
        amenities: &["Furnished", "Gym", "Elevator"],
    },
    HousingSeed {
        id: 3,
        title: "Family house with large garden",
        description: "Detached four bedroom house on a quiet street with a fenced garden and double garage.",
        price: 485000,
        kind: ListingKind::Sale,
        location: "Riverside",
        bedrooms: 4,
        bathrooms: 3,
        area_sqft: 2400,
        property_type: PropertyType::House,
        images: &["/static/img/housing/3a.jpg", "/static/img/housing/3b.jpg"],
        posted: "2 weeks ago",
        contact_email: "tom@riversiderealty.example",
        amenities: &["Garden", "Garage", "Fireplace"],
    },
    HousingSeed {
        id: 4,
        title: "Industrial loft in the arts district",
        description: "Open-plan loft with exposed brick, 14ft ceilings and a shared rooftop.",
        price: 2100,
        kind: ListingKind::Rent,
        location: "Arts District",
        bedrooms: 1,
        bathrooms: 1,
        area_sqft: 1100,
        property_type: PropertyType::Loft,
        images: &["/static/img/housing/4a.jpg"],
        posted: "2 weeks ago",
        contact_email: "hello@loftworks.example",
        amenities: &["Rooftop", "Pet friendly"],
    },
    HousingSeed {
        id: 5,
        title: "Modern townhouse with rooftop terrace",
        description: "Three level townhouse, new kitchen, private terrace and one parking spot.",
        price: 2650,
        kind: ListingKind::Rent,
        location: "Riverside",
        bedrooms: 3,
        bathrooms: 2,
        area_sqft: 1600,
        property_type: PropertyType::Townhouse,
        images: &["/static/img/housing/5a.jpg", "/static/img/housing/5b.jpg"],
        posted: "12 days ago",
        contact_email: "anna@listify.example",
        amenities: &["Parking", "Terrace", "Dishwasher"],
    },
    HousingSeed {
        id: 6,
        title: "Penthouse with panoramic skyline views",
        description: "Top floor penthouse with wraparound terrace, concierge and private elevator access.",
        price: 1250000,
        kind: ListingKind::Sale,
        location: "Downtown",
        bedrooms: 5,
        bathrooms: 4,
        area_sqft: 3800,
        property_type: PropertyType::Penthouse,
        images: &["/static/img/housing/6a.jpg"],
        posted: "10 days ago",
        contact_email: "sales@skylineestates.example",
        amenities: &["Concierge", "Terrace", "Pool", "Gym"],
    },
    HousingSeed {
        id: 7,
        title: "Lakeside cabin retreat",
        description: "Wood cabin with a private dock, wood stove and sleeping loft.",
        price: 1150,
        kind: ListingKind::Rent,
        location: "Lakeview",
        bedrooms: 2,
        bathrooms: 1,
        area_sqft: 760,
        property_type: PropertyType::Cabin,
        images: &[],
        posted: "9 days ago",
        contact_email: "cabins@lakeview.example",
        amenities: &["Fireplace", "Lake access"],
    },
    HousingSeed {
        id: 8,
        title: "Mediterranean villa with pool",
        description: "Spacious villa with a heated pool, outdoor kitchen and mature olive trees.",
        price: 890000,
        kind: ListingKind::Sale,
        location: "Hillside",
        bedrooms: 6,
        bathrooms: 5,
        area_sqft: 4500,
        property_type: PropertyType::Villa,
        images: &["/static/img/housing/8a.jpg", "/static/img/housing/8b.jpg"],
        posted: "1 week ago",
        contact_email: "villas@hillside.example",
        amenities: &["Pool", "Garden", "Parking"],
    },
    HousingSeed {
        id: 9,
        title: "Renovated 1BR close to the metro",
        description: "Quiet one bedroom with a new bathroom, two minutes from the station.",
        price: 1280,
        kind: ListingKind::Rent,
        location: "Midtown",
        bedrooms: 1,
        bathrooms: 1,
        area_sqft: 620,
        property_type: PropertyType::Apartment,
        images: &["/static/img/housing/9a.jpg"],
        posted: "6 days ago",
        contact_email: "jon@listify.example",
        amenities: &["Laundry", "Elevator"],
    },
    HousingSeed {
        id: 10,
        title: "Starter home with a sunny yard",
        description: "Single storey three bedroom house, new roof, walking distance to schools.",
        price: 315000,
        kind: ListingKind::Sale,
        location: "Lakeview",
        bedrooms: 3,
        bathrooms: 2,
        area_sqft: 1500,
        property_type: PropertyType::House,
        images: &["/static/img/housing/10a.jpg"],
        posted: "5 days ago",
        contact_email: "keys@lakeviewhomes.example",
        amenities: &["Garden", "Garage"],
    },
    HousingSeed {
        id: 11,
        title: "Shared-wall townhouse for sale",
        description: "End-of-row townhouse with a patio and finished basement.",
        price: 398000,
        kind: ListingKind::Sale,
        location: "Midtown",
        bedrooms: 3,
        bathrooms: 3,
        area_sqft: 1750,
        property_type: PropertyType::Townhouse,
        images: &["/static/img/housing/11a.jpg"],
        posted: "4 days ago",
        contact_email: "offers@midtownhomes.example",
        amenities: &["Patio", "Basement"],
    },
    HousingSeed {
        id: 12,
        title: "Spacious 4BR apartment for families",
        description: "Large apartment with two balconies, storage room and playground in the courtyard.",
        price: 2900,
        kind: ListingKind::Rent,
        location: "Riverside",
        bedrooms: 4,
        bathrooms: 2,
        area_sqft: 1850,
        property_type: PropertyType::Apartment,
        images: &["/static/img/housing/12a.jpg", "/static/img/housing/12b.jpg"],
        posted: "3 days ago",
        contact_email: "family@riversideapts.example",
        amenities: &["Balcony", "Storage", "Playground"],
    },
    HousingSeed {
        id: 13,
        title: "Artist studio with north light",
        description: "Studio apartment with tall north-facing windows, ideal for a workspace.",
        price: 1050,
        kind: ListingKind::Rent,
        location: "Arts District",
        bedrooms: 1,
        bathrooms: 1,
        area_sqft: 500,
        property_type: PropertyType::Studio,
        images: &["/static/img/housing/13a.jpg"],
        posted: "2 days ago",
        contact_email: "studio@loftworks.example",
        amenities: &["Pet friendly"],
    },
    HousingSeed {
        id: 14,
        title: "Mountain cabin for sale",
        description: "Off-grid ready cabin with solar panels, a wood shed and forest views.",
        price: 210000,
        kind: ListingKind::Sale,
        location: "Hillside",
        bedrooms: 2,
        bathrooms: 1,
        area_sqft: 900,
        property_type: PropertyType::Cabin,
        images: &["/static/img/housing/14a.jpg"],
        posted: "1 day ago",
        contact_email: "pines@hillside.example",
        amenities: &["Fireplace", "Solar"],
    },
    HousingSeed {
        id: 15,
        title: "Garden-level 2BR with patio",
        description: "Ground floor apartment with a private patio and in-unit laundry.",
        price: 1690,
        kind: ListingKind::Rent,
        location: "Lakeview",
        bedrooms: 2,
        bathrooms: 2,
        area_sqft: 980,
        property_type: PropertyType::Apartment,
        images: &["/static/img/housing/15a.jpg"],
        posted: "Today",
        contact_email: "rentals@lakeview.example",
        amenities: &["Patio", "Laundry", "Parking"],
    },
];

const RECOMMENDATION_SEED: &[RecommendationSeed] = &[
    RecommendationSeed {
        id: 1,
        title: "Toyota Corolla 1.8 Hybrid",
        price: "$18,900",
        year: 2019,
        mileage: "62,000 km",
        location: "Downtown",
        date: "2026-10-18",
        featured: true,
        image: "/static/img/vehicles/corolla.jpg",
        rating: 5,
    },
    RecommendationSeed {
        id: 2,
        title: "Honda Civic Sport",
        price: "$21,500",
        year: 2020,
        mileage: "48,300 km",
        location: "Midtown",
        date: "2026-10-17",
        featured: false,
        image: "/static/img/vehicles/civic.jpg",
        rating: 4,
    },
    RecommendationSeed {
        id: 3,
        title: "Ford F-150 XLT",
        price: "$34,000",
        year: 2018,
        mileage: "95,000 km",
        location: "Hillside",
        date: "2026-10-17",
        featured: true,
        image: "/static/img/vehicles/f150.jpg",
        rating: 4,
    },
    RecommendationSeed {
        id: 4,
        title: "Volkswagen Golf GTI",
        price: "$24,750",
        year: 2021,
        mileage: "31,200 km",
        location: "Riverside",
        date: "2026-10-16",
        featured: false,
        image: "/static/img/vehicles/golf.jpg",
        rating: 5,
    },
    RecommendationSeed {
        id: 5,
        title: "Tesla Model 3 Long Range",
        price: "$36,900",
        year: 2022,
        mileage: "22,000 km",
        location: "Arts District",
        date: "2026-10-15",
        featured: true,
        image: "/static/img/vehicles/model3.jpg",
        rating: 5,
    },
    RecommendationSeed {
        id: 6,
        title: "Mazda CX-5 Touring",
        price: "$23,400",
        year: 2019,
        mileage: "70,500 km",
        location: "Lakeview",
        date: "2026-10-14",
        featured: false,
        image: "",
        rating: 3,
    },
    RecommendationSeed {
        id: 7,
        title: "Yamaha MT-07",
        price: "$6,800",
        year: 2020,
        mileage: "12,400 km",
        location: "Downtown",
        date: "2026-10-13",
        featured: false,
        image: "/static/img/vehicles/mt07.jpg",
        rating: 4,
    },
    RecommendationSeed {
        id: 8,
        title: "Subaru Outback Premium",
        price: "$27,300",
        year: 2021,
        mileage: "40,100 km",
        location: "Hillside",
        date: "2026-10-12",
        featured: false,
        image: "/static/img/vehicles/outback.jpg",
        rating: 4,
    },
];
