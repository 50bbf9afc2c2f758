use super::client::ApiClient;
use super::types::{ApiError, LoginRequest, LoginResponse, UserResponse};

impl ApiClient {
    /// Exchanges credentials for the user id plus full profile. Persisting
    /// the session is the auth state's job, not the client's.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request);
        self.expect_json(request).await
    }

    pub async fn fetch_user(&self, user_id: &str) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.http_client().get(format!(
            "{}/users/{}",
            base_url,
            Self::encode_path_segment(user_id)
        ));
        self.expect_json(request).await
    }
}
