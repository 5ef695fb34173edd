pub mod profile;
pub mod sessions;
pub mod token;

pub use profile::Profile;
pub use sessions::{AuthError, SessionStore};
