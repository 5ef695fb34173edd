use maud::{html, Markup};

pub mod error;
pub mod listing_card;
pub mod toast;

pub use error::error_panel;
pub use listing_card::{listing_card, yield_card};
pub use toast::toast_banner;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            div class="card-body" {
                h2 { (title) }
                (body)
            }
        }
    }
}

pub fn section_heading(caption: &str, title: &str) -> Markup {
    html! {
        div class="center" {
            span class="caption" { (caption) }
            h2 { (title) }
        }
    }
}

/// A POST form rendered as a single button.
pub fn action_button(action: &str, label: &str, class: &str) -> Markup {
    html! {
        form method="post" action=(action) class="inline" {
            button type="submit" class=(class) { (label) }
        }
    }
}
