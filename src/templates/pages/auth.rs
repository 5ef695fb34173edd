use crate::domain::user::Role;
use crate::templates::{focused_layout, PageContext};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("register") => AuthMode::Register,
            _ => AuthMode::Login,
        }
    }
}

/// Values echoed back into the form after a rejected attempt. The password
/// is never echoed.
#[derive(Debug, Default)]
pub struct AuthVm {
    pub mode: AuthMode,
    pub email: String,
    pub name: String,
}

pub fn auth_page(ctx: &PageContext, vm: &AuthVm) -> Markup {
    let (heading, blurb, action, submit) = match vm.mode {
        AuthMode::Login => (
            "Welcome back",
            "Enter your credentials to access your account",
            "/auth/login",
            "Sign In",
        ),
        AuthMode::Register => (
            "Create account",
            "Join the world's most sophisticated property platform",
            "/auth/register",
            "Create Account",
        ),
    };

    focused_layout(
        heading,
        ctx,
        html! {
            h1 { (heading) }
            p class="muted" { (blurb) }

            div class="card" {
                div class="card-body" {
                    span class="caption" { "Quick Demo Access" }
                    div class="demo-accounts" {
                        @for role in Role::ALL {
                            form method="post" action="/auth/demo" {
                                input type="hidden" name="role" value=(role.as_str());
                                button type="submit" class="btn btn-block" { (demo_label(role)) }
                            }
                        }
                    }
                }
            }

            p class="divider" { "Or continue with email" }

            form method="post" action=(action) class="form-stack" {
                @if vm.mode == AuthMode::Register {
                    div {
                        label for="name" { "Full Name" }
                        input id="name" name="name" value=(vm.name) autocomplete="name" required;
                    }
                }
                div {
                    label for="email" { "Email" }
                    input id="email" type="email" name="email" value=(vm.email) autocomplete="email" required;
                }
                div {
                    label for="password" { "Password" }
                    input id="password" type="password" name="password" minlength="6" required;
                }
                @if vm.mode == AuthMode::Login {
                    p { a href="/forgot-password" class="muted" { "Forgot password?" } }
                }
                button type="submit" class="btn btn-luxury btn-block" { (submit) }
            }

            p class="muted center" {
                @match vm.mode {
                    AuthMode::Login => { "Don't have an account? " a href="/auth?mode=register" class="gold" { "Sign up" } }
                    AuthMode::Register => { "Already have an account? " a href="/auth" class="gold" { "Sign in" } }
                }
            }

            blockquote class="muted" {
                "\u{201c}The most sophisticated platform for discovering extraordinary properties worldwide.\u{201d}"
                br;
                "Forbes Real Estate"
            }
        },
    )
}

fn demo_label(role: Role) -> &'static str {
    match role {
        Role::Standard => "User",
        Role::Agent => "Agent",
        Role::Admin => "Admin",
    }
}
