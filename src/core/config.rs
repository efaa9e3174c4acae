/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through an environment variable:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ADMIN_USERNAME | admin | the single admin account |
/// | ADMIN_PASSWORD | password123 | its password |
/// | STATIC_DIR | public | static frontend directory |
/// | SEED_DEMO_DATA | true | seed two demo employees at startup |
/// | ENVIRONMENT | development | development \| production |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 ADMIN_PASSWORD=hunter2 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Admin account username
    pub admin_username: String,
    /// Admin account password (compared byte-for-byte, never hashed)
    pub admin_password: String,
    /// Directory served as the static frontend
    pub static_dir: String,
    /// Seed the demo roster on startup
    pub seed_demo_data: bool,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "password123".into()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Is this a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Is this a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
