use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::ports::api_client::{ApiClient, ApiRequest, ApiResponse};
use crate::shared::csrf::{method_requires_csrf, CsrfConfig, CsrfToken};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// `ApiClient` backed by reqwest
#[derive(Clone)]
pub struct ReqwestApiClient {
    base_url: String,
    csrf_token: Option<CsrfToken>,
    csrf_config: CsrfConfig,
    http_client: Client,
    timeout: Duration,
}

impl ReqwestApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        csrf_token: Option<CsrfToken>,
    ) -> ClientResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            csrf_token,
            csrf_config: CsrfConfig::default(),
            http_client,
            timeout,
        })
    }

    pub fn with_csrf_token(mut self, token: Option<CsrfToken>) -> Self {
        self.csrf_token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Fetch a server-rendered page and pull the CSRF token out of its form
    pub async fn discover_csrf_token(&self, page_path: &str) -> ClientResult<Option<CsrfToken>> {
        let response = self.send(ApiRequest::get(page_path)).await?.error_for_status()?;
        Ok(CsrfToken::from_form_markup(&response.body))
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        let url = self.url(&request.path);

        let mut builder = self.http_client.request(method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if method_requires_csrf(request.method.as_str(), self.csrf_config.validate_get) {
            match &self.csrf_token {
                Some(token) => {
                    builder = builder.header(self.csrf_config.header_name.as_str(), token.as_str());
                }
                None => warn!("Sending {} {} without a CSRF token", request.method, url),
            }
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!("{} {}", request.method, url);

        match builder.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                metrics::counter!(
                    "atlas_api_requests_total",
                    "method" => request.method.to_string(),
                    "status" => status.to_string()
                )
                .increment(1);

                let body = response
                    .text()
                    .await
                    .map_err(|e| ClientError::Network(format!("Failed to read body: {}", e)))?;
                Ok(ApiResponse { status, body })
            }
            Err(e) => {
                metrics::counter!(
                    "atlas_api_requests_total",
                    "method" => request.method.to_string(),
                    "status" => "network_error"
                )
                .increment(1);

                let error_msg = if e.is_timeout() {
                    format!(
                        "Connection timeout after {} seconds: {}",
                        self.timeout.as_secs(),
                        e
                    )
                } else if e.is_connect() {
                    format!("Connection failed: {}", e)
                } else {
                    format!("Network error: {}", e)
                };

                warn!("{} {} failed: {}", request.method, url, error_msg);
                Err(ClientError::Network(error_msg))
            }
        }
    }
}
