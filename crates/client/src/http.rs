//! reqwest-backed transport.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::config::{ClientConfig, ConfigError};
use crate::transport::{Method, RawResponse, Request, Transport, TransportFailure};

pub struct HttpTransport {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<RawResponse, TransportFailure> {
        let url = self.config.url_for(&request.path);
        let mut req = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }
        if let Some(token) = &self.config.auth_token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(|e| self.failure(e))?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| self.failure(e))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

impl HttpTransport {
    fn failure(&self, err: reqwest::Error) -> TransportFailure {
        if err.is_timeout() {
            TransportFailure::TimedOut(self.config.timeout)
        } else {
            TransportFailure::Unreachable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        let result = HttpTransport::new(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(..))));
    }

    #[test]
    fn keeps_config() {
        let transport = HttpTransport::new(ClientConfig::default().with_token("t")).unwrap();
        assert_eq!(transport.config().auth_token.as_deref(), Some("t"));
    }
}
