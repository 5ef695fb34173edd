use crate::config::LatencyConfig;
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use astra::{Body, Request, Response};
use http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use http::Method;
use std::io::Read;
use tempfile::TempDir;

/// A fresh database in its own temp dir, with every simulated delay off.
pub struct TestApp {
    pub state: AppState,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db = Database::new(dir.path().join("luxe_test.sqlite3").to_string_lossy());
        init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

        Self {
            state: AppState {
                db,
                latency: LatencyConfig::none(),
            },
            _dir: dir,
        }
    }

    pub fn browser(&self) -> Browser<'_> {
        Browser {
            app: self,
            cookie: None,
        }
    }
}

/// Keeps the profile cookie between requests, like a real browser tab.
pub struct Browser<'a> {
    app: &'a TestApp,
    pub cookie: Option<String>,
}

impl Browser<'_> {
    pub fn get(&mut self, uri: &str) -> Response {
        let req = http::Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(req)
    }

    pub fn post(&mut self, uri: &str, form: &str) -> Response {
        let req = http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.as_bytes().to_vec()))
            .unwrap();
        self.send(req)
    }

    fn send(&mut self, mut req: Request) -> Response {
        if let Some(cookie) = &self.cookie {
            req.headers_mut().insert(COOKIE, cookie.parse().unwrap());
        }
        let resp = handle(req, &self.app.state).expect("Failed to handle request");
        if let Some(set) = resp.headers().get(SET_COOKIE) {
            let pair = set.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }
        resp
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
