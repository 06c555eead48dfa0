use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/comanda | Work directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | LOG_LEVEL | info | Tracing level filter |
/// | ENVIRONMENT | development | development / staging / production |
/// | PLATFORM_FEE_RATE | 0.05 | Fee rate applied to online orders |
/// | RECENT_COMPLETED_LIMIT | 50 | Rolling window of completed orders |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/comanda HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Tracing level filter
    pub log_level: String,
    /// JWT verification settings
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Fee rate applied to online orders (no store)
    pub platform_fee_rate: f64,
    /// Rolling window size for the recent-completed query
    pub recent_completed_limit: usize,
}

impl Config {
    /// Load configuration from the environment, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/comanda".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            jwt: JwtConfig::from_env(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            platform_fee_rate: std::env::var("PLATFORM_FEE_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.05),
            recent_completed_limit: std::env::var("RECENT_COMPLETED_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
        }
    }

    /// Override selected values, mainly for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rolling log files
    pub fn log_dir(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.work_dir).join("logs")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
