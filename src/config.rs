use crate::core::constants::{DEFAULT_BCRYPT_COST, DEFAULT_TOKEN_TTL_SECS, MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use dotenv::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub jwt_secret: String,
    pub jwt_expires_in: u64, // seconds
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expires_in", &self.jwt_expires_in)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            log_level: "info".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_expires_in: DEFAULT_TOKEN_TTL_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.port),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret), // Use a secure secret in production
            jwt_expires_in: env::var("JWT_EXPIRES_IN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.jwt_expires_in),
            bcrypt_cost: bcrypt_cost_or(env::var("BCRYPT_COST").ok(), defaults.bcrypt_cost),
        }
    }
}

// Out-of-range costs would make every registration fail at hash time.
fn bcrypt_cost_or(raw: Option<String>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|cost| (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(cost))
        .unwrap_or(default)
}
