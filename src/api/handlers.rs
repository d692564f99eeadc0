use crate::{
    api::{extract::JsonOrForm, models::*, openapi::ApiDoc},
    core::services::UserService,
    infrastructure::storage::Storage,
};
use axum::{
    Json, Router,
    extract::State,
    http::{Method, header},
    routing::{get, post},
};
use tower::Layer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;
use std::time::Duration;

pub type AppState = Arc<UserService<Arc<dyn Storage>>>;

// Mounted by the caller under /api/users
pub fn api_routes(service: AppState) -> Router {
    Router::new().route("/", post(register_user)).with_state(service)
}

/// Full application: health check, `/api/users`, Swagger UI and middleware.
///
/// Trailing slashes are trimmed before the API routes are matched, so
/// `/api/users/` reaches the same handler as `/api/users`. Swagger UI sits
/// outside the trimming since it redirects `/swagger-ui` to `/swagger-ui/`.
pub fn app(service: AppState) -> Router {
    let api: NormalizePath<Router> = NormalizePathLayer::trim_trailing_slash().layer(
        Router::new()
            .route("/", get(|| async { "OK" }))
            .nest("/api/users", api_routes(service)),
    );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(api)
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body(
        content = RegisterRequest,
        description = "Also accepted as application/x-www-form-urlencoded",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "User registered, session token issued", body = TokenResponse),
        (status = 400, description = "Validation failed or user already exists", body = ErrorResponse),
        (status = 500, description = "Server error!", body = String, content_type = "text/plain")
    )
)]
pub async fn register_user(
    State(service): State<AppState>,
    JsonOrForm(req): JsonOrForm<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = service.register(req.into()).await?;
    Ok(Json(TokenResponse { token }))
}
