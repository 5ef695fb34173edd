use crate::domain::journal::{Post, CATEGORIES};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

pub fn blog_page(ctx: &PageContext, featured: &Post, selected: &str, posts: &[&Post]) -> Markup {
    desktop_layout(
        "Journal",
        ctx,
        html! {
            section class="section alt" {
                div class="container" {
                    span class="caption" { "Insights & Stories" }
                    h1 { "The LUXE " span class="gold" { "Journal" } }
                    p class="muted" {
                        "Expert insights on luxury real estate, market trends, "
                        "and the art of exceptional living."
                    }
                }
            }

            nav class="container tabs" {
                @for cat in CATEGORIES {
                    a href={ "/blog?category=" (url_encode(cat)) } class=[(cat == selected).then_some("active")] { (cat) }
                }
            }

            section class="container section" {
                article class="card grid grid-2" {
                    img class="cover" src=(featured.image) alt=(featured.title);
                    div class="card-body" {
                        span class="badge" { "Featured" } " " span class="badge" { (featured.category) }
                        h2 { (featured.title) }
                        p class="muted" { (featured.excerpt) }
                        @if let Some(author) = &featured.author {
                            div class="nav-user" {
                                img src=(author.image) alt=(author.name) class="avatar-sm";
                                span { (author.name) " \u{00b7} " (featured.date) " \u{00b7} " (featured.read_time) }
                            }
                        }
                    }
                }
            }

            section class="container" {
                @if posts.is_empty() {
                    div class="empty-state" {
                        p class="muted" { "No articles in this category yet." }
                    }
                } @else {
                    div class="grid grid-3" {
                        @for post in posts {
                            article class="card" {
                                img class="cover" src=(post.image) alt=(post.title);
                                div class="card-body" {
                                    span class="badge" { (post.category) }
                                    h3 { (post.title) }
                                    p class="muted" { (post.excerpt) }
                                    p class="muted" { (post.date) " \u{00b7} " (post.read_time) }
                                }
                            }
                        }
                    }
                }
            }

            section class="section alt center" {
                div class="container" {
                    h2 { "Stay Informed" }
                    p class="muted" { "Get the latest luxury real estate insights delivered to your inbox." }
                    form class="field-row" onsubmit="return false" {
                        input type="email" name="email" placeholder="Enter your email";
                        button type="button" class="btn btn-luxury" { "Subscribe" }
                    }
                }
            }
        },
    )
}

fn url_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
