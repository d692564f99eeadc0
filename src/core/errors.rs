use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// One violated input rule, shaped like the `errors` entries returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FieldError {
    pub fn body(param: &str, msg: impl Into<String>) -> Self {
        FieldError {
            msg: msg.into(),
            param: Some(param.to_string()),
            location: Some("body".to_string()),
        }
    }

    pub fn message(msg: impl Into<String>) -> Self {
        FieldError {
            msg: msg.into(),
            param: None,
            location: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum DevConnectorError {
    /// One or more input fields failed validation
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// An account with this email is already registered
    #[error("User {0} already exists")]
    UserAlreadyExists(String),

    #[error("Password hashing error: {0}")]
    PasswordHashError(String),

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<bcrypt::BcryptError> for DevConnectorError {
    fn from(err: bcrypt::BcryptError) -> Self {
        DevConnectorError::PasswordHashError(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for DevConnectorError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        DevConnectorError::TokenError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for DevConnectorError {
    fn from(err: tokio::task::JoinError) -> Self {
        DevConnectorError::InternalServerError(format!("Background task failed: {}", err))
    }
}
