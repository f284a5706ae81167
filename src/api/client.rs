// src/api/client.rs
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use log::{debug, warn};

use crate::api::ApiError;
use crate::api::csrf::{apply_csrf_header, TokenSource};
use crate::api::types::{
    PasswordAnalysisRequest, PasswordAnalysisResponse,
    PasswordGenerationRequest, PasswordGenerationResponse,
    PassphraseGenerationRequest, PassphraseGenerationResponse,
};
use crate::core::config::Config;

// Resolved endpoint URLs, read from configuration once at startup (the
// host page's data-url attribute in the original service).
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub page_url: String,
    pub generate_url: String,
    pub passphrase_url: String,
    pub analyze_url: String,
}

impl Endpoints {
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_url: config.page_url(),
            generate_url: config.generate_url(),
            passphrase_url: config.passphrase_url(),
            analyze_url: config.analyze_url(),
        }
    }
}

/// HTTP client for the password service. Every request issued through it
/// passes through the CSRF decoration; there is no bypass path.
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    token_source: TokenSource,
}

impl ApiClient {
    pub fn new(config: &Config, token_source: TokenSource) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            endpoints: Endpoints::from_config(config),
            token_source,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Acquire the current CSRF token without issuing a POST
    pub async fn fetch_token(&self) -> Result<String, ApiError> {
        Ok(self.token_source.acquire(&self.http).await?)
    }

    /// Request a password from the service
    pub async fn generate_password(
        &self,
        request: &PasswordGenerationRequest,
    ) -> Result<PasswordGenerationResponse, ApiError> {
        self.post_json(&self.endpoints.generate_url, request).await
    }

    /// Request a passphrase from the service
    pub async fn generate_passphrase(
        &self,
        request: &PassphraseGenerationRequest,
    ) -> Result<PassphraseGenerationResponse, ApiError> {
        self.post_json(&self.endpoints.passphrase_url, request).await
    }

    /// Submit passwords for analysis
    pub async fn analyze_passwords(
        &self,
        request: &PasswordAnalysisRequest,
    ) -> Result<PasswordAnalysisResponse, ApiError> {
        self.post_json(&self.endpoints.analyze_url, request).await
    }

    // The decorated POST. The token is re-acquired for every request, and
    // the body is decoded as JSON regardless of HTTP status: the service
    // reports application errors through the body's error field, and the
    // response types discriminate on it.
    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let token = self.token_source.acquire(&self.http).await?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        apply_csrf_header(&mut headers, &token)?;

        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!("Service responded with status {}", status);
        }
        debug!("Response data: {}", text);

        Ok(serde_json::from_str(&text)?)
    }
}
