use super::client::ApiClient;
use super::types::{ApiError, ProcessData};

impl ApiClient {
    /// Lists processes, optionally scoped to one user. The server refreshes
    /// each record's runtime state (pid liveness) before answering.
    pub async fn list_processes(&self, user_id: Option<&str>) -> Result<Vec<ProcessData>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self.http_client().get(format!("{}/processes", base_url));
        if let Some(user_id) = user_id {
            request = request.query(&[("user_id", user_id)]);
        }
        self.expect_json(request).await
    }

    pub async fn create_process(&self, process: &ProcessData) -> Result<ProcessData, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/processes", base_url))
            .json(process);
        self.expect_json(request).await
    }

    /// Updates keyed by the target email; the server rejects edits while the
    /// process is active.
    pub async fn update_process(&self, process: &ProcessData) -> Result<ProcessData, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .put(format!(
                "{}/processes/{}",
                base_url,
                Self::encode_path_segment(&process.email)
            ))
            .json(process);
        self.expect_json(request).await
    }

    pub async fn stop_process(&self, email: &str) -> Result<ProcessData, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.http_client().post(format!(
            "{}/processes/{}/stop",
            base_url,
            Self::encode_path_segment(email)
        ));
        self.expect_json(request).await
    }

    pub async fn delete_process(&self, email: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.http_client().delete(format!(
            "{}/processes/{}",
            base_url,
            Self::encode_path_segment(email)
        ));
        let response = self.send(request).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.error_from_response(response).await)
        }
    }
}
