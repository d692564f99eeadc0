use devconnector::{Config, InMemoryStorage, Storage, UserService, api::handlers::app, auth::jwt::JwtService};
use once_cell::sync::Lazy;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&CONFIG.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!(config = ?*CONFIG, "starting devconnector");

    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
    let jwt_service = JwtService::new(CONFIG.jwt_secret.clone(), CONFIG.jwt_expires_in);
    let service = Arc::new(UserService::new(storage, jwt_service, CONFIG.bcrypt_cost));

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(service)).await?;

    Ok(())
}
