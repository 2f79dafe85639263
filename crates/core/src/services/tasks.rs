use async_trait::async_trait;

use crate::client::TaskClient;
use crate::error::ClientError;
use crate::model::Task;

/// The two operations front ends need from the task backend.
#[async_trait]
pub trait TaskService: Send + Sync {
    async fn create_task(&self, title: &str) -> Result<(), ClientError>;

    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError>;
}

#[async_trait]
impl TaskService for TaskClient {
    async fn create_task(&self, title: &str) -> Result<(), ClientError> {
        TaskClient::create_task(self, title).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        TaskClient::list_tasks(self).await
    }
}
