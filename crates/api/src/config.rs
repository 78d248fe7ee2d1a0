/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `90`, long enough for a
    /// full seven-platform text generation behind the proxy timeout).
    pub request_timeout_secs: u64,
    /// Directory holding the persisted settings documents.
    pub settings_dir: String,
    /// Base URL of the generation gateway.
    pub genai_api_url: String,
    /// Optional API key for the generation gateway.
    pub genai_api_key: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `90`                       |
    /// | `SETTINGS_DIR`         | `./data/settings`          |
    /// | `GENAI_API_URL`        | `http://localhost:8787`    |
    /// | `GENAI_API_KEY`        | (unset)                    |
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
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let settings_dir =
            std::env::var("SETTINGS_DIR").unwrap_or_else(|_| "./data/settings".into());

        let genai_api_url =
            std::env::var("GENAI_API_URL").unwrap_or_else(|_| "http://localhost:8787".into());

        let genai_api_key = std::env::var("GENAI_API_KEY").ok().filter(|k| !k.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            settings_dir,
            genai_api_url,
            genai_api_key,
        }
    }
}
