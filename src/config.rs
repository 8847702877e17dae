use std::env;

/// Application-level constants
pub const APP_NAME: &str = "MASH Category Service";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default Ollama generate endpoint (local instance).
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";

/// Default model identifier for category generation.
pub const DEFAULT_OLLAMA_MODEL: &str = "mash-categories";

/// Bounded wait for one inference round trip, in seconds.
pub const OLLAMA_TIMEOUT_SECS: u64 = 120;

/// Backend configuration, built once at startup and passed into the
/// pipeline explicitly. The pipeline never reads the environment itself.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Full URL of the Ollama generate endpoint.
    pub generate_url: String,
    /// Model identifier sent with every generate request.
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            generate_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
        }
    }
}

impl GenerationConfig {
    /// Read `OLLAMA_URL` and `OLLAMA_MODEL` from the environment, falling
    /// back to the local defaults.
    pub fn from_env() -> Self {
        Self {
            generate_url: env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.into()),
            model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.into()),
        }
    }
}

/// Address the HTTP server binds to (`BIND_ADDR`, default `0.0.0.0:8000`).
pub fn bind_addr() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_local_ollama() {
        let config = GenerationConfig::default();
        assert_eq!(config.generate_url, "http://localhost:11434/api/generate");
        assert_eq!(config.model, "mash-categories");
    }

    #[test]
    fn timeout_is_two_minutes() {
        assert_eq!(OLLAMA_TIMEOUT_SECS, 120);
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
