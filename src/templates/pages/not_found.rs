use crate::templates::components::error_panel;
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

const POPULAR: [(&str, &str); 4] = [
    ("Properties", "/properties"),
    ("Agents", "/agents"),
    ("Contact", "/contact"),
    ("About", "/about"),
];

pub fn not_found_page(ctx: &PageContext) -> Markup {
    desktop_layout(
        "Page Not Found",
        ctx,
        html! {
            section class="section empty-state" {
                div class="container" {
                    span class="stat-value gold" { "Lost?" }
                    h1 { "This Page Doesn't Exist" }
                    p class="muted" {
                        "The property you're looking for might have been sold, "
                        "or perhaps you took a wrong turn in the mansion."
                    }
                    p {
                        a href="/" class="btn btn-luxury" { "Back to Home" }
                        " "
                        a href="/properties" class="btn" { "Browse Properties" }
                    }
                    p class="muted" { "Popular destinations:" }
                    nav class="tabs" style="justify-content: center" {
                        @for (label, href) in POPULAR {
                            a href=(href) { (label) }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(ctx: &PageContext, status: u16, message: &str) -> Markup {
    let heading = match status {
        400 => "We couldn't read that request",
        401 => "Please sign in",
        _ => "Something went wrong",
    };
    desktop_layout("Error", ctx, error_panel(status, heading, message))
}
