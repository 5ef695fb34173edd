// src/catalog/plans.rs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    /// Empty for free plans.
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static PLANS: &[Plan] = &[
    Plan {
        name: "Explorer",
        price: "Free",
        period: "",
        description: "Perfect for browsing luxury properties",
        features: &[
            "Browse all listings",
            "Save up to 10 properties",
            "Basic property alerts",
            "Market insights (limited)",
            "Email support",
        ],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Investor",
        price: "$99",
        period: "/month",
        description: "For serious property investors",
        features: &[
            "Everything in Explorer",
            "Unlimited saved properties",
            "Advanced analytics & ROI tools",
            "Priority property alerts",
            "Direct agent messaging",
            "Investment reports",
            "Phone support",
        ],
        cta: "Start Free Trial",
        popular: true,
    },
    Plan {
        name: "Elite",
        price: "$499",
        period: "/month",
        description: "White-glove service for UHNW clients",
        features: &[
            "Everything in Investor",
            "Dedicated advisor",
            "Off-market listings access",
            "Custom property sourcing",
            "Legal & tax consultation",
            "Concierge viewing service",
            "24/7 priority support",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

pub static FAQS: &[Faq] = &[
    Faq {
        question: "Can I cancel anytime?",
        answer: "Yes, you can cancel your subscription at any time. Your access will continue until the end of your billing period.",
    },
    Faq {
        question: "What's included in the free trial?",
        answer: "The 14-day free trial includes full access to all Investor plan features with no credit card required.",
    },
    Faq {
        question: "Do you offer agency pricing?",
        answer: "Yes, we offer custom pricing for agencies and teams. Contact our sales team for a personalized quote.",
    },
    Faq {
        question: "How do off-market listings work?",
        answer: "Elite members get exclusive access to properties not listed publicly, sourced through our network of agents and owners.",
    },
];
