use crate::catalog::site::{self, Trend};
use crate::domain::listing::Listing;
use crate::domain::user::User;
use crate::templates::components::{action_button, card};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub user: &'a User,
    /// The first few saved listings.
    pub saved: Vec<&'a Listing>,
}

pub fn dashboard_page(ctx: &PageContext, vm: &DashboardVm) -> Markup {
    let first_name = vm.user.name.split_whitespace().next().unwrap_or(&vm.user.name);

    desktop_layout(
        "Dashboard",
        ctx,
        html! {
            section class="container section" {
                div class="nav-actions" {
                    img src=(vm.user.avatar) alt=(vm.user.name) class="avatar-sm";
                    span class="muted" { (vm.user.email) " \u{00b7} " (vm.user.role.as_str()) }
                    (action_button("/auth/logout", "Sign Out", "btn"))
                }
                h1 { "Welcome back, " (first_name) }
                p class="muted" { "Here's what's happening with your portfolio." }

                div class="grid grid-4" {
                    @for stat in site::PORTFOLIO_STATS {
                        div class="card" {
                            div class="card-body" {
                                div class="muted" { (stat.label) }
                                div class="stat-value" { (stat.value) }
                                span class=[(stat.trend == Trend::Up).then_some("gold")] { (stat.change) }
                            }
                        }
                    }
                }
            }

            section class="container" {
                div class="grid grid-2" {
                    (card("Portfolio Performance", performance_chart()))
                    (card("Recent Activity", html! {
                        ul class="activity" {
                            @for item in site::RECENT_ACTIVITY {
                                li {
                                    span { (item.action) " " strong { (item.property) } }
                                    span class="muted" { (item.time) }
                                }
                            }
                        }
                    }))
                }
            }

            section class="container section" {
                div class="nav-actions" {
                    h2 { "Saved Properties" }
                    a href="/saved" class="btn btn-ghost" { "View All" }
                }
                @if vm.saved.is_empty() {
                    p class="muted" { "Nothing saved yet." }
                } @else {
                    div class="grid grid-4" {
                        @for listing in &vm.saved {
                            a href={ "/property/" (listing.id) } class="card" {
                                img class="cover" src=(listing.cover_image()) alt=(listing.title);
                                div class="card-body" {
                                    strong { (listing.title) }
                                    div class="muted" { (listing.price_formatted) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn performance_chart() -> Markup {
    let peak = site::chart_peak();
    let first = site::PORTFOLIO_HISTORY.first().map(|p| p.value).unwrap_or_default();
    let last = site::PORTFOLIO_HISTORY.last().map(|p| p.value).unwrap_or_default();
    let growth = if first > 0.0 { (last - first) / first * 100.0 } else { 0.0 };

    html! {
        p { span class="stat-value" { "$" (last) "M" } " " span class="gold" { (format!("+{growth:.2}% overall")) } }
        div class="chart" {
            @for point in site::PORTFOLIO_HISTORY {
                @let pct = if peak > 0.0 { point.value / peak * 100.0 } else { 0.0 };
                div class="bar" style=(format!("height: {pct:.0}%")) title=(format!("{}: ${}M", point.month, point.value)) {}
            }
        }
        div class="chart-labels" {
            @for point in site::PORTFOLIO_HISTORY {
                span { (point.month) }
            }
        }
    }
}
