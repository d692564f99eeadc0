pub mod api;
pub mod auth;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::api::handlers::{AppState, api_routes};
pub use crate::config::Config;
pub use crate::core::errors::DevConnectorError;
pub use crate::core::services::UserService;
pub use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};

#[cfg(test)]
mod tests;
