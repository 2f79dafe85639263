use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Context, Result};
use lifeos_core::{AppConfig, Task, TaskClient, TaskService};

use crate::cli::{AddArgs, CliCommand};
use crate::tui::constants::EMPTY_TASKS_PLACEHOLDER;

/// Build a runtime for a single headless command and run it to completion.
pub fn execute_blocking<W: Write>(config: &AppConfig, command: CliCommand, writer: W) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    let client = TaskClient::from_config(config);
    tracing::debug!(api_base = %config.api_base(), "running headless command");
    runtime.block_on(execute(&client, command, writer))
}

/// Run a one-shot command against the task service and print the outcome.
pub async fn execute<W: Write>(
    service: &dyn TaskService,
    command: CliCommand,
    mut writer: W,
) -> Result<()> {
    match command {
        CliCommand::List => handle_list(service, &mut writer).await,
        CliCommand::Add(args) => handle_add(service, &args, &mut writer).await,
        CliCommand::Tui(_) => Err(anyhow!("launch interactive surfaces directly")),
    }
}

async fn handle_list<W: Write>(service: &dyn TaskService, mut writer: W) -> Result<()> {
    let tasks = service.list_tasks().await.map_err(|err| {
        let reason = if err.is_transport() {
            "is the backend running?"
        } else if err.is_decode() {
            "unexpected response body"
        } else {
            "unusable api base"
        };
        let message = format!("failed to load tasks ({reason})");
        anyhow::Error::new(err).context(message)
    })?;
    TaskListing(&tasks).write_to(&mut writer)
}

async fn handle_add<W: Write>(
    service: &dyn TaskService,
    args: &AddArgs,
    mut writer: W,
) -> Result<()> {
    let title = args.title();
    if title.is_empty() {
        return Err(anyhow!("task title cannot be empty"));
    }

    service
        .create_task(&title)
        .await
        .context("failed to add task")?;
    writeln!(writer, "Added \"{}\"", title)?;
    handle_list(service, writer).await
}

struct TaskListing<'a>(&'a [Task]);

impl TaskListing<'_> {
    fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for TaskListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{}", EMPTY_TASKS_PLACEHOLDER);
        }
        let rows: Vec<String> = self.0.iter().map(|task| format!("- {}", task)).collect();
        write!(f, "{}", rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lifeos_core::ClientError;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct MemoryService {
        tasks: Mutex<Vec<Task>>,
        fail_list: bool,
    }

    #[async_trait]
    impl TaskService for MemoryService {
        async fn create_task(&self, title: &str) -> Result<(), ClientError> {
            self.tasks.lock().push(Task::new(title, "medium", 10));
            Ok(())
        }

        async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
            if self.fail_list {
                return Err(serde_json::from_str::<Vec<Task>>("oops")
                    .expect_err("invalid json")
                    .into());
            }
            Ok(self.tasks.lock().clone())
        }
    }

    async fn run(service: &MemoryService, command: CliCommand) -> Result<String> {
        let mut output = Vec::new();
        execute(service, command, &mut output).await?;
        Ok(String::from_utf8(output).expect("utf8"))
    }

    #[tokio::test]
    async fn list_prints_placeholder_when_empty() {
        let service = MemoryService::default();
        let output = run(&service, CliCommand::List).await.expect("list");
        assert_eq!(output, "No tasks added yet.\n");
    }

    #[tokio::test]
    async fn add_creates_then_prints_refreshed_rows() {
        let service = MemoryService::default();
        service.tasks.lock().push(Task::new("Walk", "easy", 5));

        let args = AddArgs {
            title: vec!["Renew".into(), "passport".into()],
        };
        let output = run(&service, CliCommand::Add(args)).await.expect("add");

        assert_eq!(
            output,
            "Added \"Renew passport\"\n- Walk (easy) - 5 pts\n- Renew passport (medium) - 10 pts\n"
        );
    }

    #[tokio::test]
    async fn add_rejects_blank_title() {
        let service = MemoryService::default();
        let args = AddArgs {
            title: vec![String::new()],
        };

        assert!(run(&service, CliCommand::Add(args)).await.is_err());
        assert!(service.tasks.lock().is_empty());
    }

    #[tokio::test]
    async fn list_failure_propagates() {
        let service = MemoryService {
            fail_list: true,
            ..MemoryService::default()
        };

        let err = run(&service, CliCommand::List).await.expect_err("failure");
        assert!(err.to_string().contains("failed to load tasks"));
    }
}
