//! Client configuration.

/// Environment variable that overrides the backend base URL.
pub const API_URL_VAR: &str = "TAPCOIN_API_URL";

/// Where the backend lives when nothing says otherwise (the development
/// backend's default bind address).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration for an [`ApiClient`](crate::ApiClient).
///
/// The only knob is the backend base path; endpoint paths are appended
/// to it verbatim, so it must not end with a slash.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// A config pointing at the given base URL. A single trailing slash
    /// is trimmed so `{base}/click`-style joins stay well-formed.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Reads the base URL from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        match std::env::var(API_URL_VAR) {
            Ok(url) => Self::new(url),
            Err(_) => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_development_backend() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://example.test/api/");
        assert_eq!(config.base_url, "http://example.test/api");
    }
}
