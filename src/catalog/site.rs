// src/catalog/site.rs
//
// Marketing copy and figures shown on the static pages.

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub title: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Neutral,
}

#[derive(Debug, Clone, Copy)]
pub struct TrendStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub action: &'static str,
    pub property: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ChartPoint {
    pub month: &'static str,
    /// Millions of dollars.
    pub value: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub subtext: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Office {
    pub city: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

pub static HERO_STATS: &[Stat] = &[
    Stat { value: "$12B+", label: "Properties Listed" },
    Stat { value: "15K+", label: "Happy Clients" },
    Stat { value: "98%", label: "Satisfaction Rate" },
];

pub static VALUE_PROPOSITIONS: &[Feature] = &[
    Feature {
        title: "Global Reach",
        description: "Access exclusive properties across 50+ countries with local market expertise.",
    },
    Feature {
        title: "Smart Analytics",
        description: "AI-powered insights on ROI, market trends, and investment opportunities.",
    },
    Feature {
        title: "Verified Listings",
        description: "Every property is verified by our team to ensure authenticity and accuracy.",
    },
    Feature {
        title: "Elite Network",
        description: "Connect with top-tier agents and high-net-worth investors worldwide.",
    },
    Feature {
        title: "Instant Matching",
        description: "Our algorithm matches you with properties that fit your exact criteria.",
    },
    Feature {
        title: "Concierge Service",
        description: "White-glove support from property search to final acquisition.",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "LUXE transformed our property search from a stressful ordeal into an exciting journey. The platform's intelligence and attention to detail is unmatched.",
        author: "Sarah Chen",
        title: "CEO, Meridian Ventures",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&q=80",
    },
    Testimonial {
        quote: "As an investor, I need data-driven insights and LUXE delivers exactly that. The ROI projections and market analysis have been invaluable.",
        author: "James Morrison",
        title: "Private Investor",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80",
    },
    Testimonial {
        quote: "The concierge service made our international purchase seamless. They handled everything from negotiations to closing with absolute professionalism.",
        author: "Elena Rodriguez",
        title: "Art Collector",
        avatar: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=200&q=80",
    },
];

pub static ABOUT_STATS: &[Stat] = &[
    Stat { value: "$12B+", label: "Properties Sold" },
    Stat { value: "15K+", label: "Happy Clients" },
    Stat { value: "50+", label: "Countries" },
    Stat { value: "98%", label: "Satisfaction" },
];

pub static VALUES: &[Feature] = &[
    Feature {
        title: "Excellence",
        description: "We pursue perfection in every property listing and client interaction.",
    },
    Feature {
        title: "Trust",
        description: "Built on decades of transparent dealings and verified property histories.",
    },
    Feature {
        title: "Innovation",
        description: "Leveraging cutting-edge technology to transform property discovery.",
    },
    Feature {
        title: "Discretion",
        description: "Protecting client privacy with bank-level security and confidentiality.",
    },
];

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alexandra Sterling",
        role: "Founder & CEO",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&q=80",
        bio: "Former Goldman Sachs MD, Harvard MBA",
    },
    TeamMember {
        name: "Michael Chen",
        role: "Chief Technology Officer",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&q=80",
        bio: "Ex-Google, Stanford CS",
    },
    TeamMember {
        name: "Victoria Hayes",
        role: "Head of Global Properties",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&q=80",
        bio: "20+ years luxury real estate",
    },
    TeamMember {
        name: "Marcus Rivera",
        role: "Chief Investment Officer",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&q=80",
        bio: "Former Blackstone Partner",
    },
];

pub static PORTFOLIO_STATS: &[TrendStat] = &[
    TrendStat { label: "Portfolio Value", value: "$4.2M", change: "+12.5%", trend: Trend::Up },
    TrendStat { label: "Saved Properties", value: "24", change: "+3", trend: Trend::Up },
    TrendStat { label: "Scheduled Viewings", value: "5", change: "This week", trend: Trend::Neutral },
    TrendStat { label: "Messages", value: "12", change: "3 unread", trend: Trend::Neutral },
];

pub static RECENT_ACTIVITY: &[Activity] = &[
    Activity { action: "Viewed", property: "Oceanfront Villa", time: "2 hours ago" },
    Activity { action: "Saved", property: "Penthouse at One57", time: "5 hours ago" },
    Activity { action: "Inquiry sent", property: "Modern Mansion", time: "1 day ago" },
    Activity { action: "Viewing scheduled", property: "Lakeside Estate", time: "2 days ago" },
];

pub static PORTFOLIO_HISTORY: &[ChartPoint] = &[
    ChartPoint { month: "Jan", value: 3.2 },
    ChartPoint { month: "Feb", value: 3.4 },
    ChartPoint { month: "Mar", value: 3.3 },
    ChartPoint { month: "Apr", value: 3.6 },
    ChartPoint { month: "May", value: 3.8 },
    ChartPoint { month: "Jun", value: 4.2 },
];

pub static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { label: "Phone", value: "+1 (888) LUXE-123", subtext: "Mon-Fri from 8am to 6pm" },
    ContactChannel { label: "Email", value: "hello@luxe.com", subtext: "We'll respond within 24 hours" },
    ContactChannel { label: "Office", value: "1 Luxury Tower, NYC", subtext: "By appointment only" },
    ContactChannel { label: "Hours", value: "Mon - Sat: 9am - 7pm", subtext: "Sunday by appointment" },
];

pub static OFFICES: &[Office] = &[
    Office { city: "New York", address: "1 Luxury Tower, 5th Avenue", phone: "+1 (212) 555-0100" },
    Office { city: "London", address: "100 Mayfair Lane", phone: "+44 20 7123 4567" },
    Office { city: "Dubai", address: "Palm Jumeirah Tower", phone: "+971 4 123 4567" },
    Office { city: "Hong Kong", address: "88 Victoria Peak Road", phone: "+852 1234 5678" },
];

/// `(form value, label)` pairs for the contact form selects.
pub const CONTACT_INTERESTS: [(&str, &str); 5] = [
    ("buying", "Buying a Property"),
    ("selling", "Selling a Property"),
    ("investing", "Investment Opportunities"),
    ("renting", "Luxury Rentals"),
    ("other", "Other"),
];
pub const CONTACT_BUDGETS: [(&str, &str); 5] = [
    ("1-5m", "$1M - $5M"),
    ("5-10m", "$5M - $10M"),
    ("10-25m", "$10M - $25M"),
    ("25-50m", "$25M - $50M"),
    ("50m+", "$50M+"),
];

pub static INVESTMENT_BENEFITS: &[Feature] = &[
    Feature {
        title: "High Returns",
        description: "Luxury real estate has historically outperformed traditional investments with 8-12% annual returns.",
    },
    Feature {
        title: "Asset Protection",
        description: "Tangible assets provide stability and protection against market volatility and inflation.",
    },
    Feature {
        title: "Global Diversification",
        description: "Access properties across 50+ countries to diversify your portfolio geographically.",
    },
    Feature {
        title: "Data-Driven Insights",
        description: "Make informed decisions with our proprietary market analytics and ROI projections.",
    },
];

pub static MARKET_STATS: &[TrendStat] = &[
    TrendStat { label: "Average ROI", value: "9.2%", change: "+1.5%", trend: Trend::Up },
    TrendStat { label: "Properties Sold", value: "$12B+", change: "+22%", trend: Trend::Up },
    TrendStat { label: "Average Hold Time", value: "4.2 yrs", change: "-0.8", trend: Trend::Up },
    TrendStat { label: "Client Satisfaction", value: "98%", change: "+2%", trend: Trend::Up },
];

pub static INVESTMENT_STEPS: &[Feature] = &[
    Feature {
        title: "Consultation",
        description: "Meet with our investment advisors to discuss your goals, risk tolerance, and timeline.",
    },
    Feature {
        title: "Property Selection",
        description: "Browse curated opportunities with detailed ROI projections and market analysis.",
    },
    Feature {
        title: "Due Diligence",
        description: "Our team handles legal, financial, and structural assessments for your chosen property.",
    },
    Feature {
        title: "Acquisition",
        description: "Seamless transaction management with our global network of legal and financial partners.",
    },
    Feature {
        title: "Management",
        description: "Optional property management services to maximize returns and minimize hassle.",
    },
];

/// Highest point of the portfolio chart, used to scale the bars.
pub fn chart_peak() -> f32 {
    PORTFOLIO_HISTORY
        .iter()
        .map(|p| p.value)
        .fold(0.0_f32, f32::max)
}
