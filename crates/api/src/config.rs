use collections_core::error::CoreError;
use collections_core::settings::{check_settings, EnvSettings, SettingsSource};

/// Settings that have no default and must be present at startup.
pub const REQUIRED_SETTINGS: &[&str] = &["DATABASE_URL"];

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Scheme and host that hyperlinks in responses are built on
    /// (default: `http://localhost:3000`).
    pub public_base_url: String,
    /// PostgreSQL connection string.
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `DATABASE_URL`         | required                   |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`    |
    ///
    /// Fails with [`CoreError::MissingSettings`] before reading anything
    /// if a required setting is absent.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_source(&EnvSettings, |name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary lookup; `from_env` is this
    /// with the process environment.
    pub fn from_source<S, F>(source: &S, lookup: F) -> Result<Self, CoreError>
    where
        S: SettingsSource + ?Sized,
        F: Fn(&str) -> Option<String>,
    {
        check_settings(REQUIRED_SETTINGS, source)?;

        let var = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port: u16 = parse_setting("PORT", &var("PORT", "3000"))?;
        let request_timeout_secs: u64 =
            parse_setting("REQUEST_TIMEOUT_SECS", &var("REQUEST_TIMEOUT_SECS", "30"))?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
            public_base_url: var("PUBLIC_BASE_URL", "http://localhost:3000"),
            database_url: var("DATABASE_URL", ""),
        })
    }
}

fn parse_setting<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, CoreError> {
    raw.parse()
        .map_err(|_| CoreError::Validation(format!("{name} has an invalid value '{raw}'")))
}
