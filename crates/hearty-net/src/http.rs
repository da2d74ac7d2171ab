use crate::{CancellationToken, NetworkClient, NetworkError, Result};
use async_trait::async_trait;
use hearty_common::AppConfig;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// JSON-over-HTTPS client for the report backend.
pub struct HttpNetworkClient {
    base_url: String,
    client: reqwest::Client,
    api_token: Option<SecretString>,
}

impl HttpNetworkClient {
    pub fn new(base_url: &str, timeout: Duration, api_token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NetworkError::Configuration(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_token: api_token.map(SecretString::from),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.network.timeout_secs),
            config.network.api_token.clone(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn exchange(&self, url: &str, body: &Value) -> Result<Value> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_IMPLEMENTED {
            warn!("Backend does not implement {}", url);
            return Err(NetworkError::NotImplemented(url.to_string()));
        }
        if !status.is_success() {
            warn!("Backend returned {} for {}", status, url);
            return Err(NetworkError::BadResponse(format!("HTTP {}", status)));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl NetworkClient for HttpNetworkClient {
    async fn post(&self, path: &str, body: &Value, cancel: &CancellationToken) -> Result<Value> {
        if cancel.is_cancelled() {
            return Err(NetworkError::Cancelled);
        }

        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("POST {} cancelled", url);
                Err(NetworkError::Cancelled)
            }
            result = self.exchange(&url, body) => result,
        }
    }

    fn get_name(&self) -> &'static str {
        "HTTP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client =
            HttpNetworkClient::new("https://api.example.com/", Duration::from_secs(5), None)
                .unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.get_name(), "HTTP");
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let config = AppConfig {
            api_base_url: "https://reports.example.com".to_string(),
            ..AppConfig::default()
        };
        let client = HttpNetworkClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://reports.example.com");
    }
}
