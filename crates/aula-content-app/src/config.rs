//! Runtime configuration for the content viewer.

use std::sync::LazyLock;

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

const DEFAULT_MEDIA_API_BASE: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the media lookup API.
    pub media_api_base: String,
}

impl Config {
    /// Reads `AULA_MEDIA_API_BASE`, falling back to the local dev API.
    /// On wasm the environment is empty, so the default always applies.
    pub fn from_env() -> Self {
        let media_api_base = std::env::var("AULA_MEDIA_API_BASE")
            .unwrap_or_else(|_| DEFAULT_MEDIA_API_BASE.to_string());
        Self { media_api_base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        // The variable is unset in test runs.
        if std::env::var("AULA_MEDIA_API_BASE").is_err() {
            assert_eq!(Config::from_env().media_api_base, DEFAULT_MEDIA_API_BASE);
        }
    }
}
