use crate::templates::{focused_layout, PageContext};
use maud::{html, Markup};

/// `sent_to` is set once a reset link has been "sent".
pub fn forgot_password_page(ctx: &PageContext, sent_to: Option<&str>) -> Markup {
    focused_layout(
        "Reset Password",
        ctx,
        html! {
            @match sent_to {
                Some(email) => {
                    h1 { "Check Your Email" }
                    p class="muted" {
                        "We've sent password reset instructions to " strong { (email) } ". "
                        "Check your inbox and follow the link to reset your password."
                    }
                    p { a href="/auth" class="btn btn-luxury btn-block" { "Back to Sign In" } }
                    p { a href="/forgot-password" class="btn btn-block" { "Try a different email" } }
                }
                None => {
                    h1 { "Forgot Password?" }
                    p class="muted" { "No worries! Enter your email and we'll send you reset instructions." }
                    form method="post" action="/forgot-password" class="form-stack" {
                        div {
                            label for="email" { "Email Address" }
                            input id="email" type="email" name="email" autocomplete="email" required;
                        }
                        button type="submit" class="btn btn-luxury btn-block" { "Send Reset Link" }
                    }
                    p { a href="/auth" class="muted" { "\u{2190} Back to Sign In" } }
                }
            }
        },
    )
}
