use crate::tests::utils::{body_string, TestApp};
use pretty_assertions::assert_eq;

#[test]
fn properties_lists_whole_catalog_by_default() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.get("/properties");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Showing <strong>6</strong> properties"));
}

#[test]
fn properties_filters_by_category_and_bedrooms() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let body = body_string(browser.get("/properties?type=Villa&beds=7"));
    assert!(body.contains("Showing <strong>1</strong> properties"));
    assert!(body.contains("Oceanfront Villa with Private Beach"));
    assert!(!body.contains("Beachfront Paradise"));
}

#[test]
fn properties_text_search_is_case_insensitive() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let body = body_string(browser.get("/properties?q=LAKE+COMO"));
    assert!(body.contains("Lakeside Estate"));
    assert!(body.contains("Showing <strong>1</strong> properties"));
}

#[test]
fn properties_empty_result_offers_reset() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let body = body_string(browser.get("/properties?q=atlantis"));
    assert!(body.contains("No properties found"));
}

#[test]
fn properties_rejects_unknown_sort() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.get("/properties?sort=cheapest-first");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("unknown sort key"));
}

#[test]
fn properties_rejects_non_numeric_price() {
    let app = TestApp::new();
    let mut browser = app.browser();

    assert_eq!(browser.get("/properties?min_price=lots").status(), 400);
}

#[test]
fn property_detail_shows_gallery_and_similar() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.get("/property/1");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Oceanfront Villa with Private Beach"));
    assert!(body.contains("/saved/1/toggle"));
    assert!(body.contains("Similar Properties"));
    assert!(body.contains("/property/1?image="));
}

#[test]
fn property_detail_unknown_id_is_not_found() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.get("/property/99");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("This Page Doesn"));
}

#[test]
fn property_detail_wraps_out_of_range_image() {
    let app = TestApp::new();
    let mut browser = app.browser();

    assert_eq!(browser.get("/property/2?image=1000").status(), 200);
    assert_eq!(browser.get("/property/2?image=nope").status(), 200);
}
