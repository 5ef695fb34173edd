use chrono::Datelike;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::domain::toast::Toast;
use crate::domain::user::User;
use crate::templates::components::toast_banner;

const STYLES: &str = include_str!("../../../static/luxe.css");

const NAV_LINKS: [(&str, &str); 5] = [
    ("Properties", "/properties"),
    ("Investments", "/investments"),
    ("Agents", "/agents"),
    ("Blog", "/blog"),
    ("About", "/about"),
];

const FOOTER_LINKS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Platform",
        &[
            ("Browse Properties", "/properties"),
            ("Investment Tools", "/investments"),
            ("Market Insights", "/blog"),
            ("Agent Network", "/agents"),
        ],
    ),
    (
        "Company",
        &[
            ("About Us", "/about"),
            ("Pricing", "/pricing"),
            ("Blog", "/blog"),
            ("Contact", "/contact"),
        ],
    ),
    (
        "Account",
        &[
            ("Sign In", "/auth"),
            ("Dashboard", "/dashboard"),
            ("Saved Properties", "/saved"),
        ],
    ),
];

/// Everything the chrome around a page needs to know about the visitor.
#[derive(Debug, Default)]
pub struct PageContext<'a> {
    pub path: &'a str,
    pub user: Option<&'a User>,
    pub toast: Option<Toast>,
}

impl PageContext<'_> {
    fn is_active(&self, href: &str) -> bool {
        self.path == href || self.path.starts_with(&format!("{href}/"))
    }
}

pub fn desktop_layout(title: &str, ctx: &PageContext, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | LUXE" }
                link rel="icon" href="data:,";
                style { (PreEscaped(STYLES)) }
            }
            body {
                (navbar(ctx))
                @if let Some(toast) = &ctx.toast {
                    (toast_banner(toast))
                }
                main { (content) }
                (footer())
            }
        }
    }
}

/// Bare chrome for the sign-in style pages that skip the navbar and footer.
pub fn focused_layout(title: &str, ctx: &PageContext, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | LUXE" }
                link rel="icon" href="data:,";
                style { (PreEscaped(STYLES)) }
            }
            body class="focused" {
                @if let Some(toast) = &ctx.toast {
                    (toast_banner(toast))
                }
                main {
                    a href="/" class="brand" { "LUXE" span class="accent" { "." } }
                    (content)
                }
            }
        }
    }
}

fn navbar(ctx: &PageContext) -> Markup {
    html! {
        header class="navbar" {
            a href="/" class="brand" { "LUXE" span class="accent" { "." } }
            nav {
                ul {
                    @for (label, href) in NAV_LINKS {
                        li {
                            a href=(href) class=[ctx.is_active(href).then_some("active")] { (label) }
                        }
                    }
                }
            }
            div class="nav-actions" {
                @match ctx.user {
                    Some(user) => {
                        a href="/dashboard" class="nav-user" {
                            img src=(user.avatar) alt=(user.name) class="avatar-sm";
                            span { (user.name) }
                        }
                    }
                    None => {
                        a href="/auth" class="btn btn-ghost" { "Sign In" }
                        a href="/auth" class="btn btn-luxury" { "Get Started" }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    let year = chrono::Utc::now().year();
    html! {
        footer class="site-footer" {
            div class="footer-grid" {
                div class="footer-brand" {
                    a href="/" class="brand" { "LUXE" span class="accent" { "." } }
                    p {
                        "The world's most sophisticated real estate platform. Designed for "
                        "discerning buyers, elite agencies, and serious investors."
                    }
                }
                @for (group, links) in FOOTER_LINKS {
                    div {
                        h4 { (group) }
                        ul {
                            @for (label, href) in links {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                }
            }
            p class="copyright" { "© " (year) " LUXE. All rights reserved." }
        }
    }
}
