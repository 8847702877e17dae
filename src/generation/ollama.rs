use serde::{Deserialize, Serialize};

use super::types::LlmClient;
use super::GenerationError;

/// Ollama HTTP client for local LLM inference.
pub struct OllamaClient {
    generate_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaClient {
    /// Create a client targeting an Ollama generate endpoint with a bounded
    /// request timeout.
    pub fn new(generate_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            generate_url: generate_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl LlmClient for OllamaClient {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let body = OllamaGenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.generate_url)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    GenerationError::BackendUnreachable(format!(
                        "cannot connect to Ollama at {}",
                        self.generate_url
                    ))
                } else if e.is_timeout() {
                    GenerationError::BackendUnreachable(format!(
                        "request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    GenerationError::BackendUnreachable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::BackendUnreachable(format!(
                "Ollama returned status {status}: {body}"
            )));
        }

        let parsed: OllamaGenerateResponse = response.json().map_err(|e| {
            GenerationError::BackendUnreachable(format!("invalid reply envelope: {e}"))
        })?;

        Ok(parsed.response)
    }
}

/// Mock LLM client for testing — returns a configurable response.
pub struct MockLlmClient {
    response: String,
}

impl MockLlmClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl LlmClient for MockLlmClient {
    fn generate(&self, _model: &str, _prompt: &str) -> Result<String, GenerationError> {
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_client_returns_configured_response() {
        let client = MockLlmClient::new("test response");
        let result = client.generate("model", "prompt").unwrap();
        assert_eq!(result, "test response");
    }

    #[test]
    fn ollama_client_constructor() {
        let client = OllamaClient::new("http://localhost:11434/api/generate", 120);
        assert_eq!(client.generate_url, "http://localhost:11434/api/generate");
        assert_eq!(client.timeout_secs, 120);
    }

    #[test]
    fn ollama_client_trims_trailing_slash() {
        let client = OllamaClient::new("http://localhost:11434/api/generate/", 60);
        assert_eq!(client.generate_url, "http://localhost:11434/api/generate");
    }
}
