use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key (v3 auth)
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL that poster paths are appended to
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Image shown on cards whose title has no poster
    #[serde(default = "default_placeholder_image_url")]
    pub placeholder_image_url: String,

    /// External site a title id is appended to for the "open" card action
    #[serde(default = "default_external_title_url")]
    pub external_title_url: String,

    /// Per-request timeout for provider calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_placeholder_image_url() -> String {
    "https://via.placeholder.com/500x750?text=No+Image".to_string()
}

fn default_external_title_url() -> String {
    "https://www.vegamovies.com/movie".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.tmdb_api_key.trim().is_empty() {
            anyhow::bail!("Failed to load config: TMDB_API_KEY cannot be empty");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config = assert_ok!(Config::from_iter(vars(&[("TMDB_API_KEY", "abc123")])));
        assert_eq!(config.tmdb_api_key, "abc123");
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb_image_url, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.external_title_url, "https://www.vegamovies.com/movie");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_iter(vars(&[
            ("TMDB_API_KEY", "abc123"),
            ("TMDB_API_URL", "http://localhost:9000"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.tmdb_api_url, "http://localhost:9000");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_missing_api_key() {
        assert_err!(Config::from_iter(vars(&[])));
    }

    #[test]
    fn test_blank_api_key() {
        assert_err!(Config::from_iter(vars(&[("TMDB_API_KEY", "  ")])));
    }
}
