use crate::catalog::listings::CATEGORIES;
use crate::domain::filter::{ListingQuery, SortKey, ViewMode, ALL_CATEGORIES, PRICE_CEILING};
use crate::domain::listing::Listing;
use crate::templates::components::listing_card;
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

const BEDROOM_STEPS: [u32; 6] = [0, 3, 4, 5, 6, 7];
const PRICE_STEPS: [u64; 7] = [
    0,
    10_000_000,
    20_000_000,
    30_000_000,
    40_000_000,
    50_000_000,
    PRICE_CEILING,
];

pub fn properties_page(ctx: &PageContext, query: &ListingQuery, results: &[&Listing]) -> Markup {
    let selected_category = query.category.as_deref().unwrap_or(ALL_CATEGORIES);

    desktop_layout(
        "Properties",
        ctx,
        html! {
            section class="section alt" {
                div class="container" {
                    span class="caption" { "Exclusive Listings" }
                    h1 { "Discover " span class="gold" { "Exceptional" } " Properties" }
                    p class="muted" {
                        "Browse our curated collection of the world's most prestigious residences."
                    }
                }
            }

            section class="container" {
                form method="get" action="/properties" class="filters" {
                    div {
                        label for="q" { "Search" }
                        input id="q" type="search" name="q" value=(query.text)
                            placeholder="Search by location, property name...";
                    }
                    div {
                        label for="type" { "Property Type" }
                        select id="type" name="type" {
                            @for cat in CATEGORIES {
                                option value=(cat) selected[cat == selected_category] { (cat) }
                            }
                        }
                    }
                    div {
                        label for="min_price" { "Min Price" }
                        select id="min_price" name="min_price" {
                            @for step in &PRICE_STEPS[..PRICE_STEPS.len() - 1] {
                                option value=(step) selected[*step == query.min_price] { (millions(*step)) }
                            }
                        }
                    }
                    div {
                        label for="max_price" { "Max Price" }
                        select id="max_price" name="max_price" {
                            @for step in &PRICE_STEPS[1..] {
                                option value=(step) selected[*step == query.max_price] { (millions(*step)) }
                            }
                        }
                    }
                    div {
                        label for="beds" { "Minimum Bedrooms" }
                        select id="beds" name="beds" {
                            @for n in BEDROOM_STEPS {
                                option value=(n) selected[n == query.min_bedrooms] {
                                    @if n == 0 { "Any" } @else { (n) "+" }
                                }
                            }
                        }
                    }
                    div {
                        label for="sort" { "Sort By" }
                        select id="sort" name="sort" {
                            @for key in SortKey::ALL {
                                option value=(key.as_str()) selected[key == query.sort] { (key.label()) }
                            }
                        }
                    }
                    input type="hidden" name="view" value=(query.view.as_str());
                    button type="submit" class="btn btn-luxury" { "Apply" }
                }

                div class="nav-actions" {
                    p class="muted" {
                        "Showing " strong { (results.len()) } " properties"
                    }
                    @if query.has_active_filters() {
                        a href="/properties" class="btn btn-ghost" { "Clear filters" }
                    }
                    (view_toggle(query, ViewMode::Grid, "Grid"))
                    (view_toggle(query, ViewMode::List, "List"))
                }

                @if results.is_empty() {
                    div class="empty-state" {
                        h3 { "No properties found" }
                        p class="muted" { "Try adjusting your filters to see more results." }
                        a href="/properties" class="btn" { "Clear all filters" }
                    }
                } @else {
                    div class=(match query.view { ViewMode::Grid => "grid grid-3", ViewMode::List => "list" }) {
                        @for listing in results {
                            (listing_card(listing, query.view))
                        }
                    }
                }
            }
        },
    )
}

fn view_toggle(query: &ListingQuery, view: ViewMode, label: &str) -> Markup {
    let target = ListingQuery {
        view,
        ..query.clone()
    };
    let qs = target.to_query_string();
    let href = if qs.is_empty() {
        "/properties".to_string()
    } else {
        format!("/properties?{qs}")
    };
    html! {
        a href=(href) class="btn" aria-pressed=(query.view == view) { (label) }
    }
}

fn millions(amount: u64) -> String {
    if amount >= PRICE_CEILING {
        format!("${}M+", amount / 1_000_000)
    } else {
        format!("${}M", amount / 1_000_000)
    }
}
