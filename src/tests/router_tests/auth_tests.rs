use crate::auth::sessions::SESSION_KEY;
use crate::auth::Profile;
use crate::db::KeyValueStore;
use crate::tests::utils::{body_string, location, TestApp};
use http::header::SET_COOKIE;

#[test]
fn first_visit_mints_profile_cookie_once() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.get("/");
    assert_eq!(resp.status(), 200);
    let set = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set.starts_with("luxe_profile="));
    assert!(set.contains("HttpOnly"));

    let resp = browser.get("/");
    assert!(resp.headers().get(SET_COOKIE).is_none());
}

#[test]
fn auth_page_switches_between_modes() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let body = body_string(browser.get("/auth"));
    assert!(body.contains("Welcome back"));

    let body = body_string(browser.get("/auth?mode=register"));
    assert!(body.contains("Create account"));
}

#[test]
fn login_redirects_to_dashboard_with_toast() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post("/auth/login", "email=jane.doe%40example.com&password=secret1");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");

    let body = body_string(browser.get("/dashboard"));
    assert!(body.contains("Welcome back, jane.doe"));
    assert!(body.contains("Welcome back!"));

    // The toast is shown once.
    let body = body_string(browser.get("/dashboard"));
    assert!(!body.contains("Welcome back!"));
}

#[test]
fn short_password_rerenders_login_with_error() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post("/auth/login", "email=a%40b.com&password=123");
    assert_eq!(resp.status(), 401);
    let body = body_string(resp);
    assert!(body.contains("Invalid email or password"));
    assert!(body.contains("a@b.com"));

    let resp = browser.get("/dashboard");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth");
}

#[test]
fn register_requires_a_name() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post("/auth/register", "name=&email=ann%40b.com&password=secret1");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Please fill in all fields correctly"));

    let resp = browser.post("/auth/register", "name=Ann+Lee&email=ann%40b.com&password=secret1");
    assert_eq!(resp.status(), 302);
    let body = body_string(browser.get("/dashboard"));
    assert!(body.contains("Welcome back, Ann"));
    assert!(body.contains("Account created!"));
}

#[test]
fn demo_login_uses_canned_account() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post("/auth/demo", "role=agent");
    assert_eq!(location(&resp), "/dashboard");

    let body = body_string(browser.get("/dashboard"));
    assert!(body.contains("Welcome back, Victoria"));
    assert!(body.contains("Demo agent mode"));
}

#[test]
fn demo_login_rejects_unknown_role() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post("/auth/demo", "role=root");
    assert_eq!(resp.status(), 400);
}

#[test]
fn logout_returns_home_and_guards_dashboard() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.post("/auth/demo", "role=admin");

    let resp = browser.post("/auth/logout", "");
    assert_eq!(location(&resp), "/");

    let resp = browser.get("/dashboard");
    assert_eq!(location(&resp), "/auth");
}

#[test]
fn sessions_are_per_profile() {
    let app = TestApp::new();
    let mut alice = app.browser();
    let mut bob = app.browser();

    alice.post("/auth/demo", "role=user");
    bob.get("/");

    assert_eq!(alice.get("/dashboard").status(), 200);
    assert_eq!(bob.get("/dashboard").status(), 302);
}

#[test]
fn malformed_session_entry_is_dropped() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.get("/");

    let cookie = browser.cookie.clone().unwrap();
    let mut storage = Profile::resolve(Some(cookie.as_str())).storage(&app.state.db);
    storage.set_item(SESSION_KEY, "{not json").unwrap();

    let resp = browser.get("/dashboard");
    assert_eq!(location(&resp), "/auth");
    assert_eq!(storage.get_item(SESSION_KEY).unwrap(), None);
}
