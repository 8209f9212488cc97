//! HTTP client for the triage scoring service

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{IntakeError, Result};

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to a default HTTP client without timeouts: {}", e);
                reqwest::Client::new()
            });

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Form-encoded POST with a JSON reply. Error statuses are still decoded
    /// when their body parses, since the service reports domain errors that way.
    pub async fn post_form<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: &[(String, String)],
    ) -> Result<R> {
        let url = self.url(endpoint);
        log::debug!("Making form POST to: {}", url);

        let response = self
            .client
            .post(&url)
            .form(form)
            .send()
            .await
            .map_err(|source| http_error(endpoint, source))?;

        decode_json(endpoint, response).await
    }

    /// Form-encoded POST returning the raw body.
    pub async fn post_form_bytes(
        &self,
        endpoint: &str,
        form: &[(String, String)],
    ) -> Result<Vec<u8>> {
        let url = self.url(endpoint);
        log::debug!("Making form POST to: {}", url);

        let response = self
            .client
            .post(&url)
            .form(form)
            .send()
            .await
            .map_err(|source| http_error(endpoint, source))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("HTTP request to {} failed with status: {}", endpoint, status);
            return Err(IntakeError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| http_error(endpoint, source))?;
        Ok(bytes.to_vec())
    }

    pub async fn post_json<T: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: &T,
    ) -> Result<R> {
        let url = self.url(endpoint);
        log::debug!("Making JSON POST to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| http_error(endpoint, source))?;

        decode_json(endpoint, response).await
    }
}

fn http_error(endpoint: &str, source: reqwest::Error) -> IntakeError {
    log::error!("HTTP request to {} failed: {}", endpoint, source);
    IntakeError::Http {
        endpoint: endpoint.to_string(),
        source,
    }
}

async fn decode_json<R: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<R> {
    let status = response.status();
    log::debug!("HTTP response status from {}: {}", endpoint, status);

    let body = response
        .text()
        .await
        .map_err(|source| http_error(endpoint, source))?;

    match serde_json::from_str::<R>(&body) {
        Ok(decoded) => Ok(decoded),
        Err(_) if !status.is_success() => {
            log::error!("HTTP request to {} failed with status: {}", endpoint, status);
            Err(IntakeError::Status {
                endpoint: endpoint.to_string(),
                status,
            })
        }
        Err(source) => {
            log::error!("Failed to parse JSON from {}: {} - body was: {}", endpoint, source, body);
            Err(IntakeError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })
        }
    }
}
