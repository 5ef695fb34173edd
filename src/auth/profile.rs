// src/auth/profile.rs
//
// A "browser profile" is whatever holds the `luxe_profile` cookie. Each
// profile gets its own slice of the key-value store.
use crate::auth::token::{generate_profile_token, hash_token, is_well_formed};
use crate::db::{Database, ProfileStorage};

pub const PROFILE_COOKIE: &str = "luxe_profile";

#[derive(Debug, Clone)]
pub struct Profile {
    token: String,
    /// Minted during this request; the caller must send `Set-Cookie`.
    pub is_new: bool,
}

impl Profile {
    /// Reuse the cookie when it is well formed, otherwise mint a fresh token.
    pub fn resolve(cookie_header: Option<&str>) -> Self {
        match cookie_header.and_then(|h| cookie_value(h, PROFILE_COOKIE)) {
            Some(token) if is_well_formed(token) => Self {
                token: token.to_string(),
                is_new: false,
            },
            _ => Self {
                token: generate_profile_token(),
                is_new: true,
            },
        }
    }

    pub fn storage(&self, db: &Database) -> ProfileStorage {
        ProfileStorage::new(db.clone(), hash_token(&self.token))
    }

    pub fn set_cookie_header(&self) -> String {
        format!(
            "{PROFILE_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age=31536000",
            self.token
        )
    }
}

/// Pull one cookie out of a `Cookie:` header value.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then_some(v)
    })
}
