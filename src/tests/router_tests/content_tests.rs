use crate::tests::utils::{body_string, TestApp};

#[test]
fn static_pages_render() {
    let app = TestApp::new();
    let mut browser = app.browser();

    for (path, needle) in [
        ("/", "LUXE"),
        ("/about", "Meet the Team"),
        ("/pricing", "Most Popular"),
        ("/investments", "High-Yield Investment Properties"),
        ("/blog", "Featured"),
        ("/agents", "Alexandra Sterling"),
        ("/contact", "Send"),
        ("/forgot-password", "Send Reset Link"),
    ] {
        let resp = browser.get(path);
        assert_eq!(resp.status(), 200, "{path}");
        assert!(body_string(resp).contains(needle), "{path} missing {needle}");
    }
}

#[test]
fn agents_europe_filter_matches_european_countries() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let body = body_string(browser.get("/agents?location=Europe"));
    assert!(body.contains("Sophie Laurent"));
    assert!(body.contains("Marco Bellini"));
    assert!(!body.contains("Michael Chen"));
}

#[test]
fn agents_search_by_name() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let body = body_string(browser.get("/agents?q=hayes"));
    assert!(body.contains("Victoria Hayes"));
    assert!(!body.contains("Alexandra Sterling"));
}

#[test]
fn agent_detail_lists_their_properties() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let body = body_string(browser.get("/agent/1"));
    assert!(body.contains("Listings by Alexandra Sterling"));
    assert!(body.contains("Oceanfront Villa with Private Beach"));

    assert_eq!(browser.get("/agent/77").status(), 404);
}

#[test]
fn blog_filters_by_category() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let body = body_string(browser.get("/blog?category=Property+Tours"));
    assert!(body.contains("Inside a $50M Penthouse"));
    assert!(!body.contains("2026 Luxury Real Estate Market Outlook"));

    let body = body_string(browser.get("/blog?category=Gossip"));
    assert!(body.contains("2026 Luxury Real Estate Market Outlook"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.get("/penthouses/on/mars");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("This Page Doesn"));

    assert_eq!(browser.post("/about", "").status(), 404);
}

#[test]
fn favicon_is_empty_and_keeps_pending_toast() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.post("/auth/demo", "role=user");

    let resp = browser.get("/favicon.ico");
    assert_eq!(resp.status(), 204);
    assert!(body_string(resp).is_empty());

    assert!(body_string(browser.get("/dashboard")).contains("Demo user mode"));
}

#[test]
fn layout_declares_inline_icon() {
    let app = TestApp::new();
    let mut browser = app.browser();

    assert!(body_string(browser.get("/")).contains(r#"<link rel="icon" href="data:,">"#));
}
