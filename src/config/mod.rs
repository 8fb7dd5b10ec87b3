/// Database configuration and connection management
pub mod database;

/// Seed catalogue loading from a TOML file
pub mod seed;

/// HTTP server settings from environment variables
pub mod server;

pub use server::AppConfig;
