use maud::{html, Markup};

use crate::domain::toast::Toast;

pub fn toast_banner(toast: &Toast) -> Markup {
    html! {
        div.toast.destructive[toast.is_destructive()] role="status" {
            strong { (toast.title) }
            @if !toast.description.is_empty() {
                span { (toast.description) }
            }
        }
    }
}
