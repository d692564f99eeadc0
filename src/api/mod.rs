pub mod extract;
pub mod handlers;
pub mod models;
pub mod openapi;
