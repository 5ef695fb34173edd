use crate::domain::filter::ViewMode;
use crate::domain::listing::{Gallery, Listing};
use crate::templates::components::{action_button, listing_card, listing_card::format_area};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

pub struct PropertyDetailVm<'a> {
    pub listing: &'a Listing,
    pub gallery: Gallery,
    pub is_saved: bool,
    pub similar: Vec<&'a Listing>,
}

pub fn property_detail_page(ctx: &PageContext, vm: &PropertyDetailVm) -> Markup {
    let l = vm.listing;
    let image = l.images.get(vm.gallery.index).copied().unwrap_or_default();
    let image_href = |i: usize| format!("/property/{}?image={i}", l.id);

    desktop_layout(
        l.title,
        ctx,
        html! {
            section class="container section" {
                p { a href="/properties" class="btn btn-ghost" { "\u{2190} Back to Properties" } }

                div class="gallery" {
                    img src=(image) alt=(l.title);
                    @if vm.gallery.has_controls() {
                        div class="controls" {
                            a href=(image_href(vm.gallery.prev())) class="btn" rel="prev" { "Previous" }
                            span class="muted" { (vm.gallery.index + 1) " / " (vm.gallery.len) }
                            a href=(image_href(vm.gallery.next())) class="btn" rel="next" { "Next" }
                        }
                        div class="thumbs" {
                            @for (i, thumb) in l.images.iter().enumerate() {
                                a href=(image_href(i)) class=[(i == vm.gallery.index).then_some("current")] {
                                    img src=(thumb) alt={ (l.title) " image " (i + 1) };
                                }
                            }
                        }
                    }
                }

                div class="grid grid-2" {
                    div {
                        span class="badge" { (l.status.label()) }
                        " "
                        span class="badge" { (l.category) }
                        h1 { (l.title) }
                        p class="muted" { (l.location) }

                        div class="grid grid-4" {
                            (fact(&l.bedrooms.to_string(), "Bedrooms"))
                            (fact(&l.bathrooms.to_string(), "Bathrooms"))
                            (fact(&format!("{} {}", format_area(l.area), l.area_unit), "Living Area"))
                            (fact(&l.year_built.to_string(), "Year Built"))
                        }

                        h2 { "About This Property" }
                        p class="muted" { (l.description) }

                        h2 { "Amenities & Features" }
                        ul class="amenities" {
                            @for amenity in l.amenities {
                                li class="badge" { (amenity) }
                            }
                        }

                        @if let Some(roi) = l.roi {
                            div class="card" {
                                div class="card-body" {
                                    h2 { "Investment Potential" }
                                    div class="grid grid-4" {
                                        (fact(&format!("{roi}%"), "Estimated ROI"))
                                        (fact("+12%", "Area Growth (5yr)"))
                                        (fact("High", "Demand Score"))
                                    }
                                }
                            }
                        }
                    }

                    aside class="card" {
                        div class="card-body form-stack" {
                            span class="caption" { "Asking Price" }
                            div class="stat-value" { (l.price_formatted) }
                            @let toggle = format!("/saved/{}/toggle", l.id);
                            @if vm.is_saved {
                                (action_button(&toggle, "\u{2665} Saved", "btn btn-block"))
                            } @else {
                                (action_button(&toggle, "\u{2661} Save Property", "btn btn-block"))
                            }
                            a href="/contact" class="btn btn-luxury btn-block" { "Schedule Viewing" }
                            a href="/contact" class="btn btn-block" { "Request Info" }

                            div class="nav-user" {
                                img src=(l.agent.avatar) alt=(l.agent.name) class="avatar-sm";
                                span {
                                    strong { (l.agent.name) } br;
                                    span class="muted" { (l.agent.agency) }
                                }
                            }
                            div class="field-row" {
                                a href="/contact" class="btn" { "Call Agent" }
                                a href="/contact" class="btn" { "Send Message" }
                            }
                        }
                    }
                }
            }

            @if !vm.similar.is_empty() {
                section class="section alt" {
                    div class="container" {
                        h2 { "Similar Properties" }
                        div class="grid grid-3" {
                            @for other in &vm.similar {
                                (listing_card(other, ViewMode::Grid))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn fact(value: &str, label: &str) -> Markup {
    html! {
        div class="card" {
            div class="card-body" {
                div class="stat-value" { (value) }
                div class="muted" { (label) }
            }
        }
    }
}
