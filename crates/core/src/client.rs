//! HTTP client for the LifeOS task endpoints.

use reqwest::{Client, Url};

use crate::config::AppConfig;
use crate::error::ClientError;
use crate::model::Task;

const TASKS_SEGMENT: &str = "tasks";

#[derive(Debug, Clone)]
pub struct TaskClient {
    http: Client,
    api_base: Url,
}

impl TaskClient {
    pub fn new(api_base: Url) -> Self {
        Self {
            http: Client::new(),
            api_base,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base().clone())
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// `{base}/tasks`, keeping any path prefix on the base.
    pub fn tasks_url(&self) -> Result<Url, ClientError> {
        let mut url = self.api_base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| ClientError::Endpoint(self.api_base.to_string()))?
            .pop_if_empty()
            .push(TASKS_SEGMENT);
        Ok(url)
    }

    /// Sends `POST {base}/tasks?title=...`.
    ///
    /// Any response that arrives counts as success: the status is only logged and
    /// the body is never read.
    pub async fn create_task(&self, title: &str) -> Result<(), ClientError> {
        let url = self.tasks_url()?;
        let response = self
            .http
            .post(url)
            .query(&[("title", title)])
            .send()
            .await?;
        tracing::debug!(status = %response.status(), "create task answered");
        Ok(())
    }

    /// Fetches `GET {base}/tasks` and decodes the body as a JSON array of tasks.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let url = self.tasks_url()?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let tasks: Vec<Task> = serde_json::from_slice(&body)?;
        tracing::debug!(status = %status, count = tasks.len(), "list tasks answered");
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("http://127.0.0.1:8000", "http://127.0.0.1:8000/tasks")]
    #[case("http://127.0.0.1:8000/", "http://127.0.0.1:8000/tasks")]
    #[case("https://host.example/api/v1", "https://host.example/api/v1/tasks")]
    #[case("https://host.example/api/v1/?debug=1", "https://host.example/api/v1/tasks")]
    fn tasks_url_appends_segment(#[case] base: &str, #[case] expected: &str) {
        let client = TaskClient::new(Url::parse(base).expect("url"));
        assert_eq!(client.tasks_url().expect("tasks url").as_str(), expected);
    }

    #[test]
    fn tasks_url_rejects_opaque_base() {
        let client = TaskClient::new(Url::parse("data:text/plain,hi").expect("url"));
        let err = client.tasks_url().expect_err("opaque base");
        assert!(matches!(err, ClientError::Endpoint(_)));
    }
}
