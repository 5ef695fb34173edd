use crate::tests::utils::{body_string, location, TestApp};

#[test]
fn saved_page_asks_anonymous_visitors_to_sign_in() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.get("/saved");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Save Your Favorites"));
}

#[test]
fn saved_page_starts_with_default_list() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.post("/auth/demo", "role=user");

    let body = body_string(browser.get("/saved"));
    assert!(body.contains("4 properties saved"));
    assert!(body.contains("Lakeside Estate"));
    assert!(!body.contains("Beachfront Paradise"));
}

#[test]
fn removing_a_saved_property_flashes_toast() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.post("/auth/demo", "role=user");

    let resp = browser.post("/saved/4/remove", "");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/saved");

    let body = body_string(browser.get("/saved"));
    assert!(body.contains("Property removed"));
    assert!(body.contains("3 properties saved"));
    assert!(!body.contains("Lakeside Estate"));
}

#[test]
fn remove_requires_sign_in() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post("/saved/1/remove", "");
    assert_eq!(location(&resp), "/auth");
}

#[test]
fn toggle_flips_membership() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.post("/auth/demo", "role=user");

    let resp = browser.post("/saved/6/toggle", "");
    assert_eq!(location(&resp), "/property/6");
    assert!(body_string(browser.get("/property/6")).contains("Property saved"));
    assert!(body_string(browser.get("/saved")).contains("Beachfront Paradise"));

    browser.post("/saved/6/toggle", "");
    assert!(body_string(browser.get("/property/6")).contains("Property removed"));
    assert!(!body_string(browser.get("/saved")).contains("Beachfront Paradise"));
}

#[test]
fn toggle_unknown_listing_is_not_found() {
    let app = TestApp::new();
    let mut browser = app.browser();

    assert_eq!(browser.post("/saved/42/toggle", "").status(), 404);
}

#[test]
fn dashboard_previews_saved_listings() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.post("/auth/demo", "role=admin");

    let body = body_string(browser.get("/dashboard"));
    assert!(body.contains("Welcome back, Marcus"));
    assert!(body.contains("Penthouse at One57"));
    assert!(body.contains("Portfolio Performance"));
}
