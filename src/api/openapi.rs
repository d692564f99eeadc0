use utoipa::OpenApi;

use crate::{
    api::models::{ErrorResponse, RegisterRequest, TokenResponse},
    core::errors::FieldError,
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::register_user),
    components(schemas(RegisterRequest, TokenResponse, ErrorResponse, FieldError)),
    info(
        title = "DevConnector API",
        description = "User registration for the developer network",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
