use maud::{html, Markup};

use crate::domain::filter::ViewMode;
use crate::domain::listing::Listing;

pub fn listing_card(listing: &Listing, view: ViewMode) -> Markup {
    html! {
        article class="card listing-card" data-view=(view.as_str()) {
            a href={ "/property/" (listing.id) } {
                img class="cover" src=(listing.cover_image()) alt=(listing.title);
            }
            div class="card-body" {
                span class="badge" { (listing.category) }
                " "
                span class="badge" { (listing.status.label()) }
                h3 { a href={ "/property/" (listing.id) } { (listing.title) } }
                p class="muted" { (listing.location) }
                div class="specs" {
                    span { (listing.bedrooms) " Beds" }
                    span { (listing.bathrooms) " Baths" }
                    span { (format_area(listing.area)) " " (listing.area_unit) }
                }
                div class="price" { (listing.price_formatted) }
                @if view == ViewMode::List {
                    p class="muted" { (listing.description) }
                }
            }
        }
    }
}

/// Investment variant with the yield up front.
pub fn yield_card(listing: &Listing) -> Markup {
    html! {
        article class="card listing-card" {
            img class="cover" src=(listing.cover_image()) alt=(listing.title);
            div class="card-body" {
                @if let Some(roi) = listing.roi {
                    span class="badge badge-roi" { (roi) "% ROI" }
                }
                h3 { (listing.title) }
                p class="muted" { (listing.location) }
                div class="specs" {
                    div { div class="price" { (listing.price_formatted) } "Investment" }
                    @if let Some(roi) = listing.roi {
                        div { div class="price gold" { (roi) "%" } "Est. Annual ROI" }
                    }
                }
                a href={ "/property/" (listing.id) } class="btn btn-block" { "View Details" }
            }
        }
    }
}

/// Thousands separators, e.g. 12500 -> "12,500".
pub fn format_area(area: u32) -> String {
    let digits = area.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
