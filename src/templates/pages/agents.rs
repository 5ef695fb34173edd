use crate::domain::agent::{Agent, AgentQuery, ALL_LOCATIONS, LOCATIONS};
use crate::domain::filter::ViewMode;
use crate::domain::listing::Listing;
use crate::templates::components::listing_card;
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

pub fn agents_page(ctx: &PageContext, query: &AgentQuery, agents: &[&Agent]) -> Markup {
    let selected = query.location.as_deref().unwrap_or(ALL_LOCATIONS);

    desktop_layout(
        "Agents",
        ctx,
        html! {
            section class="section alt" {
                div class="container center" {
                    span class="caption" { "Our Agents" }
                    h1 { "Meet Our " span class="gold" { "Elite Advisors" } }
                    p class="muted" {
                        "Work with the world's most accomplished luxury real estate professionals."
                    }
                }
            }

            section class="container" {
                form method="get" action="/agents" class="filters" {
                    div {
                        label for="q" { "Search" }
                        input id="q" type="search" name="q" value=(query.text)
                            placeholder="Search agents or agencies...";
                    }
                    div {
                        label for="location" { "Location" }
                        select id="location" name="location" {
                            @for loc in LOCATIONS {
                                option value=(loc) selected[loc == selected] { (loc) }
                            }
                        }
                    }
                    button type="submit" class="btn btn-luxury" { "Search" }
                }

                @if agents.is_empty() {
                    div class="empty-state" {
                        h3 { "No agents found" }
                        p class="muted" { "Try a different name or location." }
                        a href="/agents" class="btn" { "Show all agents" }
                    }
                } @else {
                    div class="grid grid-3" {
                        @for agent in agents {
                            (agent_card(agent))
                        }
                    }
                }
            }
        },
    )
}

fn agent_card(agent: &Agent) -> Markup {
    html! {
        article class="card" {
            img class="cover" src=(agent.image) alt=(agent.name);
            div class="card-body" {
                h3 {
                    a href={ "/agent/" (agent.id) } { (agent.name) }
                    @if agent.verified { " " span class="badge" title="Verified" { "Verified" } }
                }
                p class="muted" { (agent.title) ", " (agent.agency) }
                p class="muted" { (agent.location) }
                div class="specs" {
                    span { "\u{2605} " (agent.rating) " (" (agent.reviews) " reviews)" }
                    span { (agent.sales) " sold" }
                    span { (agent.properties) " listings" }
                }
                p { (agent.bio) }
                a href={ "/agent/" (agent.id) } class="btn btn-block" { "View Profile" }
            }
        }
    }
}

pub fn agent_detail_page(ctx: &PageContext, agent: &Agent, listings: &[&Listing]) -> Markup {
    desktop_layout(
        agent.name,
        ctx,
        html! {
            section class="section alt" {
                div class="container" {
                    p { a href="/agents" class="btn btn-ghost" { "\u{2190} All Agents" } }
                    div class="nav-user" {
                        img src=(agent.image) alt=(agent.name) class="avatar-lg";
                        div {
                            span class="caption" { (agent.title) }
                            h1 { (agent.name) }
                            p class="muted" { (agent.agency) " \u{00b7} " (agent.location) }
                        }
                    }
                    p { (agent.bio) }
                    div class="grid grid-4" {
                        div { div class="stat-value" { (agent.rating) } div class="muted" { (agent.reviews) " reviews" } }
                        div { div class="stat-value" { (agent.sales) } div class="muted" { "Total Sales" } }
                        div { div class="stat-value" { (agent.properties) } div class="muted" { "Active Listings" } }
                    }
                    ul class="amenities" {
                        @for s in agent.specialties {
                            li class="badge" { (s) }
                        }
                    }
                    p { a href="/contact" class="btn btn-luxury" { "Contact " (agent.name) } }
                }
            }

            section class="section container" {
                h2 { "Listings by " (agent.name) }
                @if listings.is_empty() {
                    p class="muted" { "No listings currently on the market." }
                } @else {
                    div class="grid grid-3" {
                        @for listing in listings {
                            (listing_card(listing, ViewMode::Grid))
                        }
                    }
                }
            }
        },
    )
}
