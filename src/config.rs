use chrono::Duration;
use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB v3 API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// TMDB image CDN base URL
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Watch region used when a request doesn't name one
    #[serde(default = "default_region")]
    pub default_region: String,

    /// Content language used when a request doesn't name one and the
    /// region doesn't imply one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// How long a loaded genre catalog stays fresh
    #[serde(default = "default_genre_cache_ttl_hours")]
    pub genre_cache_ttl_hours: i64,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_region() -> String {
    "US".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_genre_cache_ttl_hours() -> i64 {
    24
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from key/value pairs named like the environment variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Config =
            envy::from_iter(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.genre_cache_ttl()?;
        Ok(config)
    }

    /// Genre catalog TTL; errors when the hour count overflows a `Duration`
    pub fn genre_cache_ttl(&self) -> anyhow::Result<Duration> {
        Duration::try_hours(self.genre_cache_ttl_hours).ok_or_else(|| {
            anyhow::anyhow!(
                "Failed to load config: GENRE_CACHE_TTL_HOURS out of range ({})",
                self.genre_cache_ttl_hours
            )
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
