use maud::{html, Markup};

/// Body of an error page; the router wraps it in the normal layout.
pub fn error_panel(status: u16, heading: &str, message: &str) -> Markup {
    html! {
        section class="section empty-state" {
            div class="container" {
                span class="caption" { "Error " (status) }
                h1 { (heading) }
                p class="muted" { (message) }
                p {
                    a href="/" class="btn btn-luxury" { "Return Home" }
                    " "
                    a href="/properties" class="btn" { "Browse Properties" }
                }
            }
        }
    }
}
