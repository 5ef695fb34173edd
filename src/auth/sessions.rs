// src/auth/sessions.rs
//
// Demo-only session lifecycle. Any well-formed credentials are accepted and
// the "user" is synthesized locally: this is an unconditionally trusting
// simulation, not an authentication contract.
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::db::{KeyValueStore, StorageError};
use crate::domain::user::{Role, User, DEFAULT_AVATAR};

/// Key of the persisted session entry.
pub const SESSION_KEY: &str = "luxe_user";
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Please fill in all fields correctly")]
    InvalidRegistration,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    /// Login or registration is waiting out its simulated latency.
    Authenticating,
    Authenticated(User),
}

#[derive(Debug)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    state: SessionState,
    latency: Duration,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Rehydrate from storage. A persisted entry that no longer parses is
    /// removed and the store starts anonymous.
    pub fn restore(mut storage: S, latency: Duration) -> Result<Self, StorageError> {
        let state = match storage.get_item(SESSION_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => SessionState::Authenticated(user),
                Err(e) => {
                    debug!(error = %e, "discarding malformed session entry");
                    storage.remove_item(SESSION_KEY)?;
                    SessionState::Anonymous
                }
            },
            None => SessionState::Anonymous,
        };

        Ok(Self {
            storage,
            state,
            latency,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Authenticating
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        let previous = self.begin();

        if email.is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
            self.state = previous;
            return Err(AuthError::InvalidCredentials);
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = synthesize_user(email, name);
        info!(email = %user.email, "login accepted (demo mode)");
        self.establish(user, previous)
    }

    pub fn register(&mut self, email: &str, password: &str, name: &str) -> Result<&User, AuthError> {
        let previous = self.begin();

        if email.is_empty() || password.chars().count() < MIN_PASSWORD_LEN || name.is_empty() {
            self.state = previous;
            return Err(AuthError::InvalidRegistration);
        }

        let user = synthesize_user(email, name.to_string());
        info!(email = %user.email, "registration accepted (demo mode)");
        self.establish(user, previous)
    }

    /// Skips validation and latency entirely.
    pub fn login_as_demo(&mut self, role: Role) -> Result<&User, AuthError> {
        let user = demo_user(role);
        info!(role = %role, "demo login");
        let previous = self.state.clone();
        self.establish(user, previous)
    }

    pub fn logout(&mut self) -> Result<(), StorageError> {
        if let Some(user) = self.user() {
            info!(email = %user.email, "logout");
        }
        self.state = SessionState::Anonymous;
        self.storage.remove_item(SESSION_KEY)
    }

    /// Enter `Authenticating` and wait out the simulated round-trip.
    fn begin(&mut self) -> SessionState {
        let previous = std::mem::replace(&mut self.state, SessionState::Authenticating);
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        previous
    }

    fn establish(&mut self, user: User, previous: SessionState) -> Result<&User, AuthError> {
        let json = match serde_json::to_string(&user) {
            Ok(json) => json,
            Err(e) => {
                self.state = previous;
                return Err(StorageError::Backend(format!("serialize session failed: {e}")).into());
            }
        };

        if let Err(e) = self.storage.set_item(SESSION_KEY, &json) {
            self.state = previous;
            return Err(e.into());
        }

        self.state = SessionState::Authenticated(user);
        self.user()
            .ok_or_else(|| StorageError::Backend("session was not established".into()).into())
    }
}

fn synthesize_user(email: &str, name: String) -> User {
    User {
        id: format!("user-{}", chrono::Utc::now().timestamp_millis()),
        email: email.to_string(),
        name,
        avatar: DEFAULT_AVATAR.to_string(),
        role: Role::Standard,
    }
}

/// The three canned accounts offered on the sign-in page.
pub fn demo_user(role: Role) -> User {
    let (id, email, name, avatar) = match role {
        Role::Standard => (
            "demo-user-1",
            "demo@luxe.com",
            "Alex Johnson",
            DEFAULT_AVATAR,
        ),
        Role::Agent => (
            "demo-agent-1",
            "agent@luxe.com",
            "Victoria Hayes",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&q=80",
        ),
        Role::Admin => (
            "demo-admin-1",
            "admin@luxe.com",
            "Marcus Chen",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80",
        ),
    };

    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        role,
    }
}
