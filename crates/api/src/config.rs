use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`
    /// env var. A single `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry duration).
    pub jwt: JwtConfig,
    /// Base URL of the weather forecast API.
    pub weather_base_url: String,
    /// Upstream location code the forecast is fetched for.
    pub weather_city_code: String,
    /// Path of the bundled audio file served by `GET /music`.
    pub music_path: String,
    /// Username of the seeded demo account.
    pub demo_username: String,
    /// Plaintext password of the seeded demo account, hashed at startup.
    pub demo_password: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                           |
    /// |------------------------|-----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                         |
    /// | `PORT`                 | `8000`                            |
    /// | `CORS_ORIGINS`         | `*`                               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                              |
    /// | `WEATHER_BASE_URL`     | `https://weather.tsukumijima.net` |
    /// | `WEATHER_CITY_CODE`    | `130010`                          |
    /// | `MUSIC_PATH`           | `assets/test.mp3`                 |
    /// | `DEMO_USERNAME`        | `alice`                           |
    /// | `DEMO_PASSWORD`        | `wonderland`                      |
    ///
    /// JWT settings are loaded via [`JwtConfig::from_env`], which
    /// requires `JWT_SECRET` to be set.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let weather_base_url = std::env::var("WEATHER_BASE_URL")
            .unwrap_or_else(|_| "https://weather.tsukumijima.net".into());

        let weather_city_code =
            std::env::var("WEATHER_CITY_CODE").unwrap_or_else(|_| "130010".into());

        let music_path = std::env::var("MUSIC_PATH").unwrap_or_else(|_| "assets/test.mp3".into());

        let demo_username = std::env::var("DEMO_USERNAME").unwrap_or_else(|_| "alice".into());
        let demo_password = std::env::var("DEMO_PASSWORD").unwrap_or_else(|_| "wonderland".into());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            weather_base_url,
            weather_city_code,
            music_path,
            demo_username,
            demo_password,
        }
    }
}
