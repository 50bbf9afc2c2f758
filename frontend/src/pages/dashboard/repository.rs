use crate::api::{ApiClient, ApiError, ProcessData, LOG_WINDOW_LIMIT};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProcessesRepository {
    client: Rc<ApiClient>,
}

impl ProcessesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, user_id: Option<&str>) -> Result<Vec<ProcessData>, ApiError> {
        self.client.list_processes(user_id).await
    }

    pub async fn create(&self, payload: &ProcessData) -> Result<(), ApiError> {
        self.client.create_process(payload).await.map(|_| ())
    }

    pub async fn update(&self, payload: &ProcessData) -> Result<(), ApiError> {
        self.client.update_process(payload).await.map(|_| ())
    }

    pub async fn stop(&self, email: &str) -> Result<(), ApiError> {
        self.client.stop_process(email).await.map(|_| ())
    }

    pub async fn delete(&self, email: &str) -> Result<(), ApiError> {
        self.client.delete_process(email).await
    }

    /// Most recent log window for one account, newest last.
    pub async fn logs(&self, email: &str) -> Result<Vec<String>, ApiError> {
        self.client.fetch_logs(email, LOG_WINDOW_LIMIT, 0).await
    }
}
