use copypatrol_core::leaderboard::DEFAULT_EXCLUDED_USER;

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
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the wiki the diffs belong to, used to build page links.
    pub wiki_base_url: String,
    /// Account whose reviews never appear on the leaderboard.
    pub leaderboard_excluded_user: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                    |
    /// |-----------------------------|----------------------------|
    /// | `HOST`                      | `0.0.0.0`                  |
    /// | `PORT`                      | `3000`                     |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                       |
    /// | `WIKI_BASE_URL`             | `https://en.wikipedia.org` |
    /// | `LEADERBOARD_EXCLUDED_USER` | `Community Tech bot`       |
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

        let wiki_base_url = std::env::var("WIKI_BASE_URL")
            .unwrap_or_else(|_| "https://en.wikipedia.org".into())
            .trim_end_matches('/')
            .to_string();

        let leaderboard_excluded_user = std::env::var("LEADERBOARD_EXCLUDED_USER")
            .unwrap_or_else(|_| DEFAULT_EXCLUDED_USER.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            wiki_base_url,
            leaderboard_excluded_user,
        }
    }
}
