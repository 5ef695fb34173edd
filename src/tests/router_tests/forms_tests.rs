use crate::auth::sessions::SESSION_KEY;
use crate::auth::Profile;
use crate::db::KeyValueStore;
use crate::tests::utils::{body_string, location, TestApp};

#[test]
fn contact_with_missing_fields_rerenders_with_values() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post("/contact", "name=Jane+Roe&email=&message=&interest=investing");
    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Missing information"));
    assert!(body.contains("Email, Message"));
    assert!(body.contains("Jane Roe"));
}

#[test]
fn contact_success_redirects_and_confirms() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post(
        "/contact",
        "name=Jane+Roe&email=jane%40roe.com&phone=&interest=buying&budget=5-10m&message=Villa+please",
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/contact");

    let body = body_string(browser.get("/contact"));
    assert!(body.contains("Message sent!"));
    assert!(!body.contains("Jane Roe"));
}

#[test]
fn forgot_password_confirms_address() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post("/forgot-password", "email=jane%40roe.com");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Check Your Email"));
    assert!(body.contains("jane@roe.com"));
    assert!(body.contains("Email sent!"));
}

#[test]
fn forgot_password_requires_email() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let resp = browser.post("/forgot-password", "email=+");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Forgot Password?"));
}

#[test]
fn oversized_form_is_rejected_before_routing() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let form = format!(
        "email=a%40b.com&password=secret1&name={}",
        "x".repeat(70_000)
    );
    let resp = browser.post("/auth/register", &form);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("form body too large"));

    let cookie = browser.cookie.clone().unwrap();
    let storage = Profile::resolve(Some(cookie.as_str())).storage(&app.state.db);
    assert_eq!(storage.get_item(SESSION_KEY).unwrap(), None);
    assert_eq!(browser.get("/dashboard").status(), 302);
}

#[test]
fn form_at_the_limit_is_accepted() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let prefix = "email=a%40b.com&password=secret1&name=";
    let form = format!("{prefix}{}", "x".repeat(64 * 1024 - prefix.len()));
    let resp = browser.post("/auth/register", &form);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/dashboard");
}
