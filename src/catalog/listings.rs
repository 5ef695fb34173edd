// src/catalog/listings.rs
use crate::domain::listing::{AgentSummary, Listing, ListingStatus};

pub const CATEGORIES: [&str; 6] = ["All Types", "Villa", "Penthouse", "Mansion", "Estate", "Chalet"];

pub static LISTINGS: &[Listing] = &[
    Listing {
        id: "1",
        title: "Oceanfront Villa with Private Beach",
        location: "Malibu, California",
        city: "Malibu",
        country: "USA",
        price: 45_000_000,
        price_formatted: "$45,000,000",
        bedrooms: 7,
        bathrooms: 9,
        area: 12_500,
        area_unit: "sq ft",
        category: "Villa",
        status: ListingStatus::ForSale,
        featured: true,
        images: &[
            "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=1200&q=80",
            "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1200&q=80",
        ],
        description: "An extraordinary oceanfront estate offering unparalleled luxury with direct beach access and panoramic Pacific views.",
        amenities: &["Private Beach", "Infinity Pool", "Wine Cellar", "Home Theater", "Smart Home", "Helipad"],
        year_built: 2021,
        roi: Some(4.2),
        agent: AgentSummary {
            name: "Alexandra Sterling",
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&q=80",
            agency: "Sterling Properties",
        },
    },
    Listing {
        id: "2",
        title: "Penthouse at One57",
        location: "Manhattan, New York",
        city: "New York",
        country: "USA",
        price: 38_500_000,
        price_formatted: "$38,500,000",
        bedrooms: 5,
        bathrooms: 6,
        area: 6_890,
        area_unit: "sq ft",
        category: "Penthouse",
        status: ListingStatus::ForSale,
        featured: true,
        images: &[
            "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=1200&q=80",
            "https://images.unsplash.com/photo-1600566753376-12c8ab7fb75b?w=1200&q=80",
        ],
        description: "A masterpiece of urban luxury with 360-degree views of Central Park and the Manhattan skyline.",
        amenities: &["Concierge", "Private Elevator", "Terrace", "Gym", "Spa", "Wine Storage"],
        year_built: 2019,
        roi: Some(3.8),
        agent: AgentSummary {
            name: "Michael Chen",
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80",
            agency: "Prestige NYC",
        },
    },
    Listing {
        id: "3",
        title: "Modern Mansion in Beverly Hills",
        location: "Beverly Hills, California",
        city: "Beverly Hills",
        country: "USA",
        price: 52_000_000,
        price_formatted: "$52,000,000",
        bedrooms: 8,
        bathrooms: 12,
        area: 18_000,
        area_unit: "sq ft",
        category: "Mansion",
        status: ListingStatus::ForSale,
        featured: true,
        images: &[
            "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=1200&q=80",
            "https://images.unsplash.com/photo-1600573472550-8090b5e0745e?w=1200&q=80",
        ],
        description: "Architectural masterpiece featuring museum-quality finishes and world-class amenities in the heart of Beverly Hills.",
        amenities: &["Infinity Edge Pool", "Tennis Court", "Guest House", "Car Gallery", "Outdoor Kitchen", "Security"],
        year_built: 2022,
        roi: Some(5.1),
        agent: AgentSummary {
            name: "Victoria Hayes",
            avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&q=80",
            agency: "Hayes Luxury Estates",
        },
    },
    Listing {
        id: "4",
        title: "Lakeside Estate",
        location: "Lake Como, Italy",
        city: "Lake Como",
        country: "Italy",
        price: 28_000_000,
        price_formatted: "€28,000,000",
        bedrooms: 6,
        bathrooms: 7,
        area: 8_500,
        area_unit: "sq ft",
        category: "Estate",
        status: ListingStatus::ForSale,
        featured: false,
        images: &["https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?w=1200&q=80"],
        description: "Historic villa with private dock and breathtaking views of Lake Como, blending Italian heritage with modern luxury.",
        amenities: &["Private Dock", "Landscaped Gardens", "Pool", "Wine Cellar", "Staff Quarters"],
        year_built: 1920,
        roi: Some(3.2),
        agent: AgentSummary {
            name: "Marco Bellini",
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&q=80",
            agency: "Bellini Immobiliare",
        },
    },
    Listing {
        id: "5",
        title: "Modern Chalet in the Alps",
        location: "Zermatt, Switzerland",
        city: "Zermatt",
        country: "Switzerland",
        price: 19_500_000,
        price_formatted: "CHF 19,500,000",
        bedrooms: 5,
        bathrooms: 5,
        area: 5_200,
        area_unit: "sq ft",
        category: "Chalet",
        status: ListingStatus::ForSale,
        featured: false,
        images: &["https://images.unsplash.com/photo-1518780664697-55e3ad937233?w=1200&q=80"],
        description: "Ski-in/ski-out luxury chalet with panoramic Matterhorn views and world-class alpine amenities.",
        amenities: &["Ski Room", "Spa", "Indoor Pool", "Fireplace", "Mountain Views", "Heated Driveway"],
        year_built: 2020,
        roi: Some(4.5),
        agent: AgentSummary {
            name: "Sophie Laurent",
            avatar: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=200&q=80",
            agency: "Swiss Alpine Properties",
        },
    },
    Listing {
        id: "6",
        title: "Beachfront Paradise",
        location: "Miami Beach, Florida",
        city: "Miami",
        country: "USA",
        price: 32_000_000,
        price_formatted: "$32,000,000",
        bedrooms: 6,
        bathrooms: 8,
        area: 9_800,
        area_unit: "sq ft",
        category: "Villa",
        status: ListingStatus::ForSale,
        featured: false,
        images: &["https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=1200&q=80"],
        description: "Ultra-modern beachfront residence with direct ocean access and resort-style amenities.",
        amenities: &["Beach Access", "Rooftop Lounge", "Elevator", "Smart Home", "Pool", "Boat Dock"],
        year_built: 2023,
        roi: Some(5.8),
        agent: AgentSummary {
            name: "Carlos Rivera",
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&q=80",
            agency: "Rivera Luxury Group",
        },
    },
];

pub fn find(id: &str) -> Option<&'static Listing> {
    LISTINGS.iter().find(|l| l.id == id)
}

pub fn featured() -> impl Iterator<Item = &'static Listing> {
    LISTINGS.iter().filter(|l| l.featured)
}

/// Listings carrying a yield figure, in catalog order.
pub fn with_yield() -> impl Iterator<Item = &'static Listing> {
    LISTINGS.iter().filter(|l| l.roi.is_some())
}

pub fn by_agent(name: &str) -> impl Iterator<Item = &'static Listing> + '_ {
    LISTINGS.iter().filter(move |l| l.agent.name == name)
}

/// Same category first, then the rest of the catalog; never the listing itself.
pub fn similar_to(listing: &Listing, limit: usize) -> Vec<&'static Listing> {
    let same = LISTINGS
        .iter()
        .filter(|l| l.id != listing.id && l.category == listing.category);
    let others = LISTINGS
        .iter()
        .filter(|l| l.id != listing.id && l.category != listing.category);
    same.chain(others).take(limit).collect()
}
