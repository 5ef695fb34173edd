// src/catalog/journal.rs
use crate::domain::journal::{Byline, Post};

pub static FEATURED_POST: Post = Post {
    id: "1",
    title: "The Rise of Sustainable Luxury: How Green Design is Reshaping Premium Real Estate",
    excerpt: "Discover how eco-conscious architecture and sustainable materials are becoming the new standard in ultra-luxury properties worldwide.",
    image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=1200&q=80",
    category: "Trends",
    author: Some(Byline {
        name: "Alexandra Sterling",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&q=80",
    }),
    date: "Jan 28, 2026",
    read_time: "8 min read",
};

pub static POSTS: &[Post] = &[
    Post {
        id: "2",
        title: "2026 Luxury Real Estate Market Outlook",
        excerpt: "Expert predictions on price trends, emerging hotspots, and investment opportunities.",
        image: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=600&q=80",
        category: "Market Analysis",
        author: None,
        date: "Jan 25, 2026",
        read_time: "6 min read",
    },
    Post {
        id: "3",
        title: "Inside a $50M Penthouse: What Makes It Worth the Price",
        excerpt: "An exclusive tour of Manhattan's most expensive new listing and its unparalleled amenities.",
        image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=600&q=80",
        category: "Property Tours",
        author: None,
        date: "Jan 22, 2026",
        read_time: "5 min read",
    },
    Post {
        id: "4",
        title: "The Art of Property Negotiation at the Ultra-Luxury Level",
        excerpt: "Strategies and tactics for securing the best deals on properties above $10 million.",
        image: "https://images.unsplash.com/photo-1600047509807-ba8f99d2cdde?w=600&q=80",
        category: "Guides",
        author: None,
        date: "Jan 19, 2026",
        read_time: "7 min read",
    },
    Post {
        id: "5",
        title: "Smart Home Technology Every Luxury Property Needs",
        excerpt: "From AI-powered climate control to invisible audio systems, the tech features buyers expect.",
        image: "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=600&q=80",
        category: "Technology",
        author: None,
        date: "Jan 16, 2026",
        read_time: "5 min read",
    },
    Post {
        id: "6",
        title: "Investment Properties: Finding the Perfect Balance of Luxury and ROI",
        excerpt: "How to identify properties that offer both lifestyle appeal and strong returns.",
        image: "https://images.unsplash.com/photo-1518780664697-55e3ad937233?w=600&q=80",
        category: "Investment",
        author: None,
        date: "Jan 13, 2026",
        read_time: "6 min read",
    },
    Post {
        id: "7",
        title: "The Most Exclusive Private Islands on the Market",
        excerpt: "A curated selection of island properties offering ultimate privacy and luxury.",
        image: "https://images.unsplash.com/photo-1600573472550-8090b5e0745e?w=600&q=80",
        category: "Property Tours",
        author: None,
        date: "Jan 10, 2026",
        read_time: "4 min read",
    },
];
