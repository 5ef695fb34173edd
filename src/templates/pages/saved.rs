use crate::domain::listing::Listing;
use crate::templates::components::action_button;
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

pub fn saved_page(ctx: &PageContext, saved: &[&Listing]) -> Markup {
    desktop_layout(
        "Saved Properties",
        ctx,
        html! {
            section class="section alt" {
                div class="container" {
                    span class="caption" { "Your Collection" }
                    h1 { "Saved " span class="gold" { "Properties" } }
                    p class="muted" { (saved.len()) " properties saved" }
                }
            }

            section class="container section" {
                @if saved.is_empty() {
                    div class="empty-state" {
                        h2 { "No saved properties yet" }
                        p class="muted" { "Start exploring and save properties you love." }
                        a href="/properties" class="btn btn-luxury" { "Browse Properties" }
                    }
                } @else {
                    div class="list" {
                        @for listing in saved {
                            article class="card listing-card" {
                                img class="cover" src=(listing.cover_image()) alt=(listing.title);
                                div class="card-body" {
                                    h3 { (listing.title) }
                                    p class="muted" { (listing.location) }
                                    div class="price" { (listing.price_formatted) }
                                    p {
                                        a href={ "/property/" (listing.id) } class="btn btn-luxury" { "View Details" }
                                        " "
                                        (action_button(&format!("/saved/{}/remove", listing.id), "Remove", "btn btn-danger"))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Shown instead of the list when nobody is signed in.
pub fn saved_sign_in_page(ctx: &PageContext) -> Markup {
    desktop_layout(
        "Saved Properties",
        ctx,
        html! {
            section class="section empty-state" {
                div class="container" {
                    h1 { "Save Your Favorites" }
                    p class="muted" { "Sign in to save properties and track your favorites across all devices." }
                    a href="/auth" class="btn btn-luxury" { "Sign In" }
                }
            }
        },
    )
}
