use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on draining the pool after the server stops (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JWT signing secret and token lifetime.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// | Env Var              | Required | Default |
    /// |----------------------|----------|---------|
    /// | `DATABASE_URL`       | **yes**  | --      |
    /// | `DB_MAX_CONNECTIONS` | no       | `20`    |
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(shelfwise_db::DEFAULT_MAX_CONNECTIONS);

        Self {
            url,
            max_connections,
        }
    }
}
