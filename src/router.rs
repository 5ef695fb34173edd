use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use http::header::COOKIE;
use maud::Markup;
use tracing::{error, info, warn};

use crate::auth::{AuthError, Profile, SessionStore};
use crate::catalog::{agents, journal, listings};
use crate::config::LatencyConfig;
use crate::db::{Database, ProfileStorage};
use crate::domain::agent::AgentQuery;
use crate::domain::contact::ContactRequest;
use crate::domain::filter::ListingQuery;
use crate::domain::journal::{filter_posts, selected_category};
use crate::domain::listing::{Gallery, Listing};
use crate::domain::saved::SavedList;
use crate::domain::toast::Toast;
use crate::domain::user::Role;
use crate::errors::ServerError;
use crate::responses::{append_cookie, html_response_with_status, no_content, redirect, ResultResp};
use crate::templates::pages::{self, AuthMode, AuthVm, DashboardVm, PropertyDetailVm};
use crate::templates::PageContext;

/// Larger form bodies are rejected with 400.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub struct AppState {
    pub db: Database,
    pub latency: LatencyConfig,
}

type Session = SessionStore<ProfileStorage>;

/// Per-request state: who is asking and what they sent.
struct Visit<'a> {
    path: &'a str,
    query: HashMap<String, String>,
    form: HashMap<String, String>,
    session: Session,
    latency: &'a LatencyConfig,
}

impl Visit<'_> {
    fn render<F>(&mut self, page: F) -> ResultResp
    where
        F: FnOnce(&PageContext) -> Markup,
    {
        self.render_with(200, None, page)
    }

    /// `inline` replaces any queued toast, for forms re-rendered in place.
    fn render_with<F>(&mut self, status: u16, inline: Option<Toast>, page: F) -> ResultResp
    where
        F: FnOnce(&PageContext) -> Markup,
    {
        let toast = match inline {
            Some(t) => Some(t),
            None => Toast::take(self.session.storage_mut())?,
        };
        let ctx = PageContext {
            path: self.path,
            user: self.session.user(),
            toast,
        };
        html_response_with_status(status, page(&ctx))
    }

    fn flash(&mut self, toast: Toast) -> Result<(), ServerError> {
        toast.push(self.session.storage_mut())?;
        Ok(())
    }

    fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    fn field(&self, key: &str) -> String {
        self.form
            .get(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let profile = Profile::resolve(req.headers().get(COOKIE).and_then(|v| v.to_str().ok()));
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_pairs(req.uri().query().unwrap_or_default().as_bytes());
    let form = if method == "POST" {
        read_form(req)
    } else {
        Ok(HashMap::new())
    };

    let session = SessionStore::restore(profile.storage(&app.db), app.latency.auth())?;
    let mut visit = Visit {
        path: &path,
        query,
        form: HashMap::new(),
        session,
        latency: &app.latency,
    };

    let routed = form.and_then(|form| {
        visit.form = form;
        route(&method, &mut visit)
    });
    let mut resp = match routed {
        Ok(resp) => resp,
        Err(ServerError::NotFound) => {
            warn!(%method, %path, "404 Error: User attempted to access non-existent route");
            visit.render_with(404, None, pages::not_found_page)?
        }
        Err(err) => {
            let status = err.status();
            let message = if status >= 500 {
                error!(error = %err, %method, %path, "request failed");
                "Something went wrong on our side. Please try again.".to_string()
            } else {
                err.to_string()
            };
            visit.render_with(status, None, |ctx| pages::error_page(ctx, status, &message))?
        }
    };

    if profile.is_new {
        append_cookie(&mut resp, &profile.set_cookie_header())?;
    }
    Ok(resp)
}

fn route(method: &str, visit: &mut Visit) -> ResultResp {
    let path = visit.path;
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", [""]) => visit.render(pages::home_page),

        ("GET", ["properties"]) => {
            let query = ListingQuery::from_params(&visit.query)?;
            let results = query.apply(listings::LISTINGS);
            visit.render(|ctx| pages::properties_page(ctx, &query, &results))
        }
        ("GET", ["property", id]) => property_detail(visit, id),
        ("POST", ["saved", id, "toggle"]) => toggle_saved(visit, id),
        ("POST", ["saved", id, "remove"]) => remove_saved(visit, id),
        ("GET", ["saved"]) => saved(visit),

        ("GET", ["agents"]) => {
            let query = AgentQuery::from_params(&visit.query);
            let found = query.apply(agents::AGENTS);
            visit.render(|ctx| pages::agents_page(ctx, &query, &found))
        }
        ("GET", ["agent", id]) => {
            let agent = agents::find(id).ok_or(ServerError::NotFound)?;
            let theirs: Vec<&Listing> = listings::by_agent(agent.name).collect();
            visit.render(|ctx| pages::agent_detail_page(ctx, agent, &theirs))
        }

        ("GET", ["blog"]) => {
            let selected = selected_category(visit.query("category"));
            let posts = filter_posts(journal::POSTS, selected);
            visit.render(|ctx| pages::blog_page(ctx, &journal::FEATURED_POST, selected, &posts))
        }
        ("GET", ["about"]) => visit.render(pages::about_page),
        ("GET", ["pricing"]) => visit.render(pages::pricing_page),
        ("GET", ["investments"]) => {
            let opportunities: Vec<&Listing> = listings::with_yield().take(3).collect();
            visit.render(|ctx| pages::investments_page(ctx, &opportunities))
        }

        ("GET", ["contact"]) => {
            visit.render(|ctx| pages::contact_page(ctx, &ContactRequest::default()))
        }
        ("POST", ["contact"]) => submit_contact(visit),
        ("GET", ["forgot-password"]) => visit.render(|ctx| pages::forgot_password_page(ctx, None)),
        ("POST", ["forgot-password"]) => submit_forgot_password(visit),

        ("GET", ["auth"]) => {
            let vm = AuthVm {
                mode: AuthMode::from_param(visit.query("mode")),
                ..Default::default()
            };
            visit.render(|ctx| pages::auth_page(ctx, &vm))
        }
        ("POST", ["auth", "login"]) => login(visit),
        ("POST", ["auth", "register"]) => register(visit),
        ("POST", ["auth", "demo"]) => demo_login(visit),
        ("POST", ["auth", "logout"]) => {
            visit.session.logout()?;
            redirect("/")
        }

        ("GET", ["dashboard"]) => dashboard(visit),
        ("GET", ["favicon.ico"]) => no_content(),

        _ => Err(ServerError::NotFound),
    }
}

fn property_detail(visit: &mut Visit, id: &str) -> ResultResp {
    let listing = listings::find(id).ok_or(ServerError::NotFound)?;
    let requested = visit
        .query("image")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let saved = SavedList::load(visit.session.storage())?;

    let vm = PropertyDetailVm {
        listing,
        gallery: Gallery::new(requested, listing.images.len()),
        is_saved: saved.contains(listing.id),
        similar: listings::similar_to(listing, 3),
    };
    visit.render(|ctx| pages::property_detail_page(ctx, &vm))
}

fn toggle_saved(visit: &mut Visit, id: &str) -> ResultResp {
    let listing = listings::find(id).ok_or(ServerError::NotFound)?;
    let mut saved = SavedList::load(visit.session.storage())?;
    let now_saved = saved.toggle(listing.id);
    saved.persist(visit.session.storage_mut())?;

    let toast = if now_saved {
        Toast::success("Property saved", "Added to your saved list.")
    } else {
        Toast::success(
            "Property removed",
            "The property has been removed from your saved list.",
        )
    };
    visit.flash(toast)?;
    redirect(&format!("/property/{}", listing.id))
}

fn remove_saved(visit: &mut Visit, id: &str) -> ResultResp {
    if !visit.session.is_authenticated() {
        return redirect("/auth");
    }
    let mut saved = SavedList::load(visit.session.storage())?;
    if saved.remove(id) {
        saved.persist(visit.session.storage_mut())?;
        visit.flash(Toast::success(
            "Property removed",
            "The property has been removed from your saved list.",
        ))?;
    }
    redirect("/saved")
}

/// Saved listings in catalog order.
fn saved_listings(visit: &Visit) -> Result<Vec<&'static Listing>, ServerError> {
    let saved = SavedList::load(visit.session.storage())?;
    Ok(listings::LISTINGS
        .iter()
        .filter(|l| saved.contains(l.id))
        .collect())
}

fn saved(visit: &mut Visit) -> ResultResp {
    if !visit.session.is_authenticated() {
        return visit.render(pages::saved_sign_in_page);
    }
    let list = saved_listings(visit)?;
    visit.render(|ctx| pages::saved_page(ctx, &list))
}

fn dashboard(visit: &mut Visit) -> ResultResp {
    let Some(user) = visit.session.user().cloned() else {
        return redirect("/auth");
    };
    let mut saved = saved_listings(visit)?;
    saved.truncate(4);

    let vm = DashboardVm { user: &user, saved };
    visit.render(|ctx| pages::dashboard_page(ctx, &vm))
}

fn login(visit: &mut Visit) -> ResultResp {
    let email = visit.field("email");
    let password = visit.form.get("password").cloned().unwrap_or_default();

    let outcome = visit.session.login(&email, &password).map(|_| ());
    match outcome {
        Ok(()) => {
            visit.flash(Toast::success("Welcome back!", "You've successfully logged in."))?;
            redirect("/dashboard")
        }
        Err(err @ AuthError::InvalidCredentials) => {
            let vm = AuthVm {
                mode: AuthMode::Login,
                email,
                ..Default::default()
            };
            let toast = Toast::failure("Error", err.to_string());
            visit.render_with(401, Some(toast), |ctx| pages::auth_page(ctx, &vm))
        }
        Err(err) => Err(err.into()),
    }
}

fn register(visit: &mut Visit) -> ResultResp {
    let email = visit.field("email");
    let name = visit.field("name");
    let password = visit.form.get("password").cloned().unwrap_or_default();

    let outcome = visit.session.register(&email, &password, &name).map(|_| ());
    match outcome {
        Ok(()) => {
            visit.flash(Toast::success("Account created!", "Welcome to LUXE."))?;
            redirect("/dashboard")
        }
        Err(err @ AuthError::InvalidRegistration) => {
            let vm = AuthVm {
                mode: AuthMode::Register,
                email,
                name,
            };
            let toast = Toast::failure("Error", err.to_string());
            visit.render_with(400, Some(toast), |ctx| pages::auth_page(ctx, &vm))
        }
        Err(err) => Err(err.into()),
    }
}

fn demo_login(visit: &mut Visit) -> ResultResp {
    let role: Role = visit
        .field("role")
        .parse()
        .map_err(ServerError::BadRequest)?;

    visit.session.login_as_demo(role)?;
    visit.flash(Toast::success(
        format!("Demo {role} mode"),
        format!("You're now logged in as a demo {role}."),
    ))?;
    redirect("/dashboard")
}

fn submit_contact(visit: &mut Visit) -> ResultResp {
    let request = ContactRequest::from_form(&visit.form);
    let missing = request.missing_fields();
    if !missing.is_empty() {
        let toast = Toast::failure(
            "Missing information",
            format!("Please fill in: {}", missing.join(", ")),
        );
        return visit.render_with(400, Some(toast), |ctx| pages::contact_page(ctx, &request));
    }

    pause(visit.latency.form());
    info!(
        name = %request.name,
        email = %request.email,
        interest = %request.interest,
        budget = %request.budget,
        "contact request received"
    );
    visit.flash(Toast::success(
        "Message sent!",
        "A LUXE advisor will contact you within 24 hours.",
    ))?;
    redirect("/contact")
}

fn submit_forgot_password(visit: &mut Visit) -> ResultResp {
    let email = visit.field("email");
    if email.is_empty() {
        let toast = Toast::failure("Error", "Please enter your email address.");
        return visit.render_with(400, Some(toast), |ctx| pages::forgot_password_page(ctx, None));
    }

    pause(visit.latency.form());
    info!(%email, "password reset requested (demo mode, nothing sent)");
    let toast = Toast::success(
        "Email sent!",
        "Check your inbox for password reset instructions.",
    );
    visit.render_with(200, Some(toast), |ctx| {
        pages::forgot_password_page(ctx, Some(&email))
    })
}

fn pause(latency: std::time::Duration) {
    if !latency.is_zero() {
        std::thread::sleep(latency);
    }
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;
    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }
    Ok(parse_pairs(&raw))
}

/// Decode `application/x-www-form-urlencoded` pairs. Later duplicates win.
fn parse_pairs(raw: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(raw).into_owned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_percent_decoded() {
        let map = parse_pairs(b"q=lake+como&type=All%20Types&beds=3&beds=4");
        assert_eq!(map.get("q").map(String::as_str), Some("lake como"));
        assert_eq!(map.get("type").map(String::as_str), Some("All Types"));
        assert_eq!(map.get("beds").map(String::as_str), Some("4"));
    }
}
