// errors.rs
use crate::auth::sessions::AuthError;
use crate::db::local_storage::StorageError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Internal Server Error")]
    InternalError,
}

impl From<AuthError> for ServerError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ServerError::Unauthorized(err.to_string()),
            AuthError::InvalidRegistration => ServerError::BadRequest(err.to_string()),
            AuthError::Storage(e) => ServerError::Storage(e),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::DbError(_) | ServerError::Storage(_) | ServerError::InternalError => 500,
        }
    }
}
