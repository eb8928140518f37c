//! Environment-driven configuration.

const DATABASE_URL_KEY: &str = "DATABASE_URL";
const LISTEN_ADDR_KEY: &str = "LISTEN_ADDR";

const DEFAULT_DATABASE_URL: &str = "sqlite://store_locations.db?mode=rwc";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9080";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file if one
    /// is present. Missing keys fall back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = std::env::var(DATABASE_URL_KEY)
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let listen_addr = std::env::var(LISTEN_ADDR_KEY)
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Self {
            database_url,
            listen_addr,
        }
    }
}
