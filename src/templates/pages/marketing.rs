// Static pages: about, pricing, investments.

use crate::catalog::plans::{FAQS, PLANS};
use crate::catalog::site;
use crate::domain::listing::Listing;
use crate::templates::components::{section_heading, yield_card};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

pub fn about_page(ctx: &PageContext) -> Markup {
    desktop_layout(
        "About",
        ctx,
        html! {
            section class="section alt" {
                div class="container center" {
                    span class="caption" { "About LUXE" }
                    h1 { "Redefining " span class="gold" { "Luxury" } " Real Estate" }
                }
            }

            section class="container section" {
                div class="grid grid-4" {
                    @for stat in site::ABOUT_STATS {
                        div class="center" {
                            div class="stat-value" { (stat.value) }
                            div class="muted" { (stat.label) }
                        }
                    }
                }
            }

            section class="container section" {
                span class="caption" { "Our Story" }
                h2 { "Built by Experts, for Visionaries" }
                p {
                    "LUXE was born from a simple observation: the world's most exceptional "
                    "properties deserve an equally exceptional platform."
                }
                p {
                    "Our founders, veterans of Goldman Sachs, Google, and Christie's, combined "
                    "their expertise in finance, technology, and luxury markets to create "
                    "something unprecedented."
                }
                p {
                    "Today, we serve over 15,000 clients worldwide, facilitating over "
                    "$12 billion in property transactions annually."
                }
                a href="/contact" class="btn btn-luxury" { "Get in Touch" }
            }

            section class="section alt" {
                div class="container" {
                    (section_heading("Our Values", "What Drives Us"))
                    div class="grid grid-4" {
                        @for value in site::VALUES {
                            div class="card" {
                                div class="card-body" {
                                    h3 { (value.title) }
                                    p class="muted" { (value.description) }
                                }
                            }
                        }
                    }
                }
            }

            section class="container section" {
                (section_heading("Leadership", "Meet the Team"))
                div class="grid grid-4" {
                    @for member in site::TEAM {
                        div class="card" {
                            img class="cover" src=(member.image) alt=(member.name);
                            div class="card-body" {
                                h3 { (member.name) }
                                div class="gold" { (member.role) }
                                p class="muted" { (member.bio) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn pricing_page(ctx: &PageContext) -> Markup {
    desktop_layout(
        "Pricing",
        ctx,
        html! {
            section class="section" {
                div class="container center" {
                    span class="caption" { "Pricing" }
                    h1 { "Simple, Transparent " span class="gold" { "Pricing" } }
                    p class="muted" {
                        "Choose the plan that matches your property journey. "
                        "All plans include access to our curated luxury listings."
                    }
                }
            }

            section class="container" {
                div class="grid grid-3" {
                    @for plan in PLANS {
                        div.card.plan.popular[plan.popular] {
                            div class="card-body form-stack" {
                                @if plan.popular {
                                    span class="badge badge-roi" { "Most Popular" }
                                }
                                h3 { (plan.name) }
                                div { span class="stat-value" { (plan.price) } span class="muted" { (plan.period) } }
                                p class="muted" { (plan.description) }
                                ul class="activity" {
                                    @for feature in plan.features {
                                        li { "\u{2713} " (feature) }
                                    }
                                }
                                a.btn.btn-block.btn-luxury[plan.popular]
                                    href=(if plan.cta == "Contact Sales" { "/contact" } else { "/auth?mode=register" }) { (plan.cta) }
                            }
                        }
                    }
                }
            }

            section class="section alt" {
                div class="container center" {
                    h2 { "Enterprise Solutions" }
                    p class="muted" {
                        "For real estate agencies, developers, and investment firms seeking "
                        "custom integrations and dedicated support."
                    }
                    a href="/contact" class="btn btn-luxury" { "Contact Sales" }
                }
            }

            section class="container section" {
                h2 class="center" { "Frequently Asked Questions" }
                @for faq in FAQS {
                    details class="card" {
                        summary class="card-body" { strong { (faq.question) } }
                        div class="card-body" { p class="muted" { (faq.answer) } }
                    }
                }
            }
        },
    )
}

pub fn investments_page(ctx: &PageContext, opportunities: &[&Listing]) -> Markup {
    desktop_layout(
        "Investments",
        ctx,
        html! {
            section class="hero" {
                div class="container" {
                    span class="caption" { "Investment Platform" }
                    h1 { "Build Wealth Through " span class="gold" { "Luxury Real Estate" } }
                    p class="muted" {
                        "Access institutional-grade investment opportunities in the world's "
                        "most prestigious properties with data-driven insights and expert guidance."
                    }
                    a href="/properties" class="btn btn-luxury" { "Explore Opportunities" }
                }
            }

            section class="section alt" {
                div class="container grid grid-4" {
                    @for stat in site::MARKET_STATS {
                        div class="center" {
                            div class="stat-value" { (stat.value) }
                            div class="muted" { (stat.label) }
                            div class="gold" { (stat.change) " YoY" }
                        }
                    }
                }
            }

            section class="container section" {
                (section_heading("Why Invest With LUXE", "The Smart Way to Invest in Real Estate"))
                div class="grid grid-4" {
                    @for benefit in site::INVESTMENT_BENEFITS {
                        div class="card" {
                            div class="card-body" {
                                h3 { (benefit.title) }
                                p class="muted" { (benefit.description) }
                            }
                        }
                    }
                }
            }

            section class="section alt" {
                div class="container" {
                    span class="caption" { "Featured Opportunities" }
                    h2 { "High-Yield Investment Properties" }
                    div class="grid grid-3" {
                        @for listing in opportunities {
                            (yield_card(listing))
                        }
                    }
                }
            }

            section class="container section" {
                (section_heading("How It Works", "Your Investment Journey"))
                ol class="activity" {
                    @for (i, step) in site::INVESTMENT_STEPS.iter().enumerate() {
                        li {
                            span { span class="gold" { (format!("{:02}", i + 1)) } " " strong { (step.title) } }
                            span class="muted" { (step.description) }
                        }
                    }
                }
            }

            section class="section alt center" {
                div class="container" {
                    h2 { "Ready to Start Building Wealth?" }
                    p class="muted" {
                        "Schedule a consultation with our investment advisors and discover "
                        "opportunities tailored to your financial goals."
                    }
                    a href="/contact" class="btn btn-luxury" { "Schedule Consultation" }
                }
            }
        },
    )
}
