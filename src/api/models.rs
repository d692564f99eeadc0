use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::core::constants::{INVALID_BODY, SERVER_ERROR, USER_ALREADY_EXISTS};
use crate::core::errors::{DevConnectorError, FieldError};
use crate::core::models::user::NewUser;

// Missing fields deserialize as empty strings so they fail validation, not parsing.
#[derive(Deserialize, ToSchema, Default)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(req: RegisterRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
            password: req.password,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<FieldError>,
}

// Newtype wrapper for DevConnectorError to implement IntoResponse
pub struct ApiError(pub DevConnectorError);

impl From<DevConnectorError> for ApiError {
    fn from(err: DevConnectorError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let errors = match self.0 {
            DevConnectorError::Validation(errors) => errors,
            DevConnectorError::InvalidBody(detail) => {
                debug!("rejected request body: {}", detail);
                vec![FieldError::message(INVALID_BODY)]
            }
            DevConnectorError::UserAlreadyExists(_) => vec![FieldError::message(USER_ALREADY_EXISTS)],
            err @ (DevConnectorError::PasswordHashError(_)
            | DevConnectorError::TokenError(_)
            | DevConnectorError::StorageError(_)
            | DevConnectorError::InternalServerError(_)) => {
                error!("{}", err);
                return (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR).into_response();
            }
        };
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { errors })).into_response()
    }
}
