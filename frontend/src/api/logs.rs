use super::client::ApiClient;
use super::types::{ApiError, LogsResponse};

/// The dialog only ever shows the most recent window; there is no paging
/// beyond re-issuing the same request.
pub const LOG_WINDOW_LIMIT: u32 = 250;

impl ApiClient {
    pub async fn fetch_logs(
        &self,
        email: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<String>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!(
                "{}/logs/{}",
                base_url,
                Self::encode_path_segment(email)
            ))
            .query(&[("limit", limit.to_string()), ("offset", offset.to_string())]);
        let response: LogsResponse = self.expect_json(request).await?;
        Ok(response.logs)
    }
}
