// src/catalog/agents.rs
use crate::domain::agent::Agent;

pub static AGENTS: &[Agent] = &[
    Agent {
        id: "1",
        name: "Alexandra Sterling",
        title: "Principal Agent",
        agency: "Sterling Properties",
        location: "Los Angeles, CA",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&q=80",
        rating: 4.9,
        reviews: 127,
        sales: "$890M+",
        properties: 45,
        specialties: &["Luxury Estates", "Beachfront", "Celebrity Homes"],
        bio: "20+ years specializing in ultra-luxury properties across Southern California.",
        verified: true,
    },
    Agent {
        id: "2",
        name: "Michael Chen",
        title: "Senior Broker",
        agency: "Prestige NYC",
        location: "New York, NY",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&q=80",
        rating: 4.8,
        reviews: 98,
        sales: "$650M+",
        properties: 32,
        specialties: &["Penthouses", "Manhattan", "Investment Properties"],
        bio: "Former Wall Street executive turned luxury real estate specialist.",
        verified: true,
    },
    Agent {
        id: "3",
        name: "Victoria Hayes",
        title: "Luxury Specialist",
        agency: "Hayes Luxury Estates",
        location: "Beverly Hills, CA",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&q=80",
        rating: 5.0,
        reviews: 156,
        sales: "$1.2B+",
        properties: 67,
        specialties: &["Celebrity Estates", "Modern Architecture", "Privacy Estates"],
        bio: "Hollywood's most trusted luxury real estate advisor.",
        verified: true,
    },
    Agent {
        id: "4",
        name: "Marcus Rivera",
        title: "Investment Advisor",
        agency: "Rivera Luxury Group",
        location: "Miami, FL",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&q=80",
        rating: 4.9,
        reviews: 89,
        sales: "$520M+",
        properties: 28,
        specialties: &["Waterfront", "International Buyers", "New Development"],
        bio: "Specializing in South Florida's most exclusive waterfront properties.",
        verified: true,
    },
    Agent {
        id: "5",
        name: "Sophie Laurent",
        title: "European Director",
        agency: "Swiss Alpine Properties",
        location: "Zurich, Switzerland",
        image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400&q=80",
        rating: 4.9,
        reviews: 73,
        sales: "CHF 780M+",
        properties: 41,
        specialties: &["Alpine Chalets", "Lake Properties", "Historic Estates"],
        bio: "Expert in Swiss and French Alps luxury properties.",
        verified: true,
    },
    Agent {
        id: "6",
        name: "Marco Bellini",
        title: "Italian Specialist",
        agency: "Bellini Immobiliare",
        location: "Lake Como, Italy",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&q=80",
        rating: 4.8,
        reviews: 64,
        sales: "€450M+",
        properties: 35,
        specialties: &["Historic Villas", "Lake Como", "Tuscan Estates"],
        bio: "Third-generation luxury real estate specialist in Northern Italy.",
        verified: true,
    },
];

pub fn find(id: &str) -> Option<&'static Agent> {
    AGENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::listings;

    #[test]
    fn find_by_id() {
        assert_eq!(find("5").map(|a| a.name), Some("Sophie Laurent"));
        assert!(find("0").is_none());
    }

    #[test]
    fn agent_pages_resolve_listings_by_name() {
        let victoria = find("3").unwrap();
        let ids: Vec<_> = listings::by_agent(victoria.name).map(|l| l.id).collect();
        assert_eq!(ids, ["3"]);

        // Marcus Rivera has no catalog listing under his name.
        assert_eq!(listings::by_agent(find("4").unwrap().name).count(), 0);
    }
}
