use crate::domain::errors::ClientResult;
use crate::domain::ports::api_client::{ApiClient, ApiRequest, ApiResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Status-checking front of an [`ApiClient`].
///
/// Both network failures and non-2xx statuses come back as `Err`, so
/// callers handle them identically.
#[derive(Clone)]
pub struct ApiGateway {
    client: Arc<dyn ApiClient>,
}

impl ApiGateway {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        self.client.send(request).await?.error_for_status()
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> ClientResult<T> {
        let response = self.execute(ApiRequest::get(path).with_query(query)).await?;
        response.json()
    }
}

/// Something that can re-fetch its own data, such as a list or a stats block
#[async_trait]
pub trait Reloadable: Send + Sync {
    async fn reload(&self);
}
