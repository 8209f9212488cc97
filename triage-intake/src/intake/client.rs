use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::i18n::Language;
use super::state::IntakeForm;
use super::summary::CtasResponse;
use crate::config::BackendConfig;
use crate::error::Result;
use crate::http_client::HttpClient;

pub const CALCULATE_CTAS_ENDPOINT: &str = "/calculate_ctas";
pub const DOWNLOAD_CSV_ENDPOINT: &str = "/download_csv";
pub const SET_LANGUAGE_ENDPOINT: &str = "/set_language";

/// The remote service that owns scoring, CSV rendering and the language
/// preference.
#[async_trait]
pub trait TriageBackend: Send + Sync {
    async fn calculate_ctas(&self, form: &IntakeForm) -> Result<CtasResponse>;

    async fn download_csv(&self, form: &IntakeForm) -> Result<Vec<u8>>;

    async fn set_language(&self, lang: Language) -> Result<LanguageResponse>;
}

/// Triage-specific client wrapper around the generic HttpClient
pub struct TriageClient {
    http_client: HttpClient,
}

impl TriageClient {
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&BackendConfig {
            base_url: base_url.to_string(),
            ..BackendConfig::default()
        })
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            http_client: HttpClient::new(
                &config.base_url,
                Duration::from_secs(config.timeout_seconds),
                Duration::from_secs(config.connect_timeout_seconds),
            ),
        }
    }

    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }
}

#[async_trait]
impl TriageBackend for TriageClient {
    async fn calculate_ctas(&self, form: &IntakeForm) -> Result<CtasResponse> {
        self.http_client
            .post_form(CALCULATE_CTAS_ENDPOINT, &form.to_form_pairs())
            .await
    }

    async fn download_csv(&self, form: &IntakeForm) -> Result<Vec<u8>> {
        self.http_client
            .post_form_bytes(DOWNLOAD_CSV_ENDPOINT, &form.to_form_pairs())
            .await
    }

    async fn set_language(&self, lang: Language) -> Result<LanguageResponse> {
        let request = SetLanguageRequest { language: lang };

        self.http_client
            .post_json(SET_LANGUAGE_ENDPOINT, &request)
            .await
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLanguageRequest {
    pub language: Language,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageResponse {
    pub status: String,
    pub language: Option<String>,
    pub message: Option<String>,
}

impl LanguageResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
