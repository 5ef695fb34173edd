// templates/pages/home.rs

use crate::catalog::{listings, site};
use crate::domain::filter::ViewMode;
use crate::templates::components::{listing_card, section_heading};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

pub fn home_page(ctx: &PageContext) -> Markup {
    desktop_layout(
        "Luxury Real Estate",
        ctx,
        html! {
            section class="hero" {
                div class="container" {
                    span class="caption" { "Luxury Real Estate" }
                    h1 { "Find Your " span class="gold" { "Extraordinary" } " Home" }
                    p class="muted" {
                        "The world's most sophisticated platform for discovering, investing in, "
                        "and acquiring exceptional properties."
                    }
                    p {
                        a href="/properties" class="btn btn-luxury" { "Explore Properties" }
                        " "
                        a href="/investments" class="btn" { "Investment Insights" }
                    }
                    div class="stats" {
                        @for stat in site::HERO_STATS {
                            div {
                                div class="stat-value" { (stat.value) }
                                div class="muted" { (stat.label) }
                            }
                        }
                    }
                    p class="muted" { "Bank-Level Security · Real-Time Market Data" }
                }
            }

            section class="section" {
                div class="container" {
                    (section_heading("Curated Selection", "Featured Properties"))
                    div class="grid grid-3" {
                        @for listing in listings::featured() {
                            (listing_card(listing, ViewMode::Grid))
                        }
                    }
                    p class="center" { a href="/properties" class="btn" { "View All Properties" } }
                }
            }

            section class="section alt" {
                div class="container" {
                    (section_heading("Why LUXE", "A New Standard in Luxury Real Estate"))
                    p class="center muted" {
                        "We've reimagined every aspect of the property experience to deliver "
                        "unmatched value to our clients."
                    }
                    div class="grid grid-3" {
                        @for feature in site::VALUE_PROPOSITIONS {
                            div class="card" {
                                div class="card-body" {
                                    h3 { (feature.title) }
                                    p class="muted" { (feature.description) }
                                }
                            }
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    (section_heading("Testimonials", "Trusted by the Elite"))
                    div class="grid grid-3" {
                        @for t in site::TESTIMONIALS {
                            figure class="card" {
                                div class="card-body" {
                                    blockquote { "\u{201c}" (t.quote) "\u{201d}" }
                                    figcaption class="nav-user" {
                                        img src=(t.avatar) alt=(t.author) class="avatar-sm";
                                        span { strong { (t.author) } br; span class="muted" { (t.title) } }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section class="section alt center" {
                div class="container" {
                    h2 { "Ready to Find Your " span class="gold" { "Dream Property" } "?" }
                    p class="muted" {
                        "Join thousands of discerning clients who have found their perfect "
                        "property through LUXE. Start your journey today."
                    }
                    p {
                        a href="/properties" class="btn btn-luxury" { "Start Exploring" }
                        " "
                        a href="/contact" class="btn" { "Speak to an Advisor" }
                    }
                }
            }
        },
    )
}
