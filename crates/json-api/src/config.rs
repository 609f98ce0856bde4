//! Server configuration module

use clap::Parser;

/// Comanda JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "comanda-json", about = "Comanda JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8698")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Asset host base URL for image uploads
    #[arg(long, env = "ASSET_HOST_URL")]
    pub asset_host_url: String,

    /// Asset host API key
    #[arg(long, env = "ASSET_HOST_API_KEY", hide_env_values = true)]
    pub asset_host_api_key: String,

    /// Name of the session marker cookie checked by the dashboard gate
    #[arg(long, env = "SESSION_COOKIE", default_value = "auth-token")]
    pub session_cookie: String,

    /// Path unauthenticated dashboard requests are redirected to
    #[arg(long, env = "LOGIN_PATH", default_value = "/login")]
    pub login_path: String,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
