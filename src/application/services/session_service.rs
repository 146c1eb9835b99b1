use super::gateway::ApiGateway;
use super::remote_resource::RemoteResource;
use serde_json::Value;

pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/user/";

/// Who is signed in, as reported by the backend session
#[derive(Clone)]
pub struct SessionService {
    current_user: RemoteResource<Option<Value>>,
}

impl SessionService {
    pub fn new(api: ApiGateway) -> Self {
        Self {
            current_user: RemoteResource::new(api, CURRENT_USER_ENDPOINT),
        }
    }

    pub async fn load_current_user(&self) -> bool {
        self.current_user.load().await
    }

    pub async fn current_user(&self) -> Option<Value> {
        self.current_user.get().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current_user().await.is_some()
    }
}
