//! Controller for the Tasks panel: the add-task form and the task list kept in
//! step with the backend collection.

use lifeos_core::{ClientError, Task};

use super::buffer::TextBuffer;
use super::constants::EMPTY_TASKS_PLACEHOLDER;
use super::message::{Effect, Message, PanelId, ReloadToken};
use super::subscription::Subscriptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    FormRendered,
    Submitting,
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TaskRows {
    /// Nothing has been loaded during this activation.
    Unloaded,
    Placeholder,
    Rows(Vec<String>),
}

impl TaskRows {
    fn from_tasks(tasks: &[Task]) -> Self {
        if tasks.is_empty() {
            TaskRows::Placeholder
        } else {
            TaskRows::Rows(tasks.iter().map(Task::to_string).collect())
        }
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        match self {
            TaskRows::Unloaded => Vec::new(),
            TaskRows::Placeholder => vec![EMPTY_TASKS_PLACEHOLDER.to_string()],
            TaskRows::Rows(rows) => rows.clone(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Submission {
    /// The title field was empty; nothing was sent.
    Blocked,
    Sent(Effect),
}

#[derive(Debug)]
pub(crate) struct TaskPanel {
    id: PanelId,
    form: TextBuffer,
    phase: Phase,
    pending_creates: usize,
    rows: TaskRows,
    latest_reload: ReloadToken,
    reloading: bool,
    subscriptions: Subscriptions,
}

impl TaskPanel {
    /// Render an empty form and list, and ask for the first reload.
    pub(crate) fn activate(id: PanelId) -> (Self, Effect) {
        let mut panel = Self {
            id,
            form: TextBuffer::new(),
            phase: Phase::FormRendered,
            pending_creates: 0,
            rows: TaskRows::Unloaded,
            latest_reload: ReloadToken(0),
            reloading: false,
            subscriptions: Subscriptions::default(),
        };
        let effect = panel.begin_reload();
        (panel, effect)
    }

    pub(crate) fn id(&self) -> PanelId {
        self.id
    }

    pub(crate) fn form(&self) -> &TextBuffer {
        &self.form
    }

    pub(crate) fn form_mut(&mut self) -> &mut TextBuffer {
        &mut self.form
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn rows(&self) -> &TaskRows {
        &self.rows
    }

    pub(crate) fn is_reloading(&self) -> bool {
        self.reloading
    }

    pub(crate) fn subscriptions_mut(&mut self) -> &mut Subscriptions {
        &mut self.subscriptions
    }

    pub(crate) fn submit(&mut self) -> Submission {
        if self.form.is_empty() {
            return Submission::Blocked;
        }
        let title = self.form.as_str().to_string();
        self.phase = Phase::Submitting;
        self.pending_creates += 1;
        tracing::debug!(panel = %self.id, "submitting task");
        Submission::Sent(Effect::CreateTask(title))
    }

    pub(crate) fn on_message(&mut self, message: Message) -> Effect {
        match message {
            Message::TaskCreated { result, .. } => self.finish_create(result),
            Message::TasksLoaded { token, result, .. } => {
                self.finish_reload(token, result);
                Effect::None
            }
        }
    }

    /// The form is reset and the list reloaded whether or not the create call
    /// succeeded.
    fn finish_create(&mut self, result: Result<(), ClientError>) -> Effect {
        self.pending_creates = self.pending_creates.saturating_sub(1);
        match result {
            Ok(()) => tracing::info!(panel = %self.id, "task added"),
            Err(err) => tracing::error!(panel = %self.id, error = %err, "failed to add task"),
        }
        self.form.clear();
        if self.pending_creates == 0 {
            self.phase = Phase::FormRendered;
        }
        self.begin_reload()
    }

    fn begin_reload(&mut self) -> Effect {
        self.latest_reload = ReloadToken(self.latest_reload.0 + 1);
        self.reloading = true;
        Effect::ReloadTasks(self.latest_reload)
    }

    fn finish_reload(&mut self, token: ReloadToken, result: Result<Vec<Task>, ClientError>) {
        if token != self.latest_reload {
            tracing::debug!(
                panel = %self.id,
                token = token.0,
                latest = self.latest_reload.0,
                "discarding superseded reload"
            );
            return;
        }
        self.reloading = false;
        match result {
            Ok(tasks) => {
                tracing::debug!(panel = %self.id, count = tasks.len(), "tasks reloaded");
                self.rows = TaskRows::from_tasks(&tasks);
            }
            Err(err) => tracing::error!(panel = %self.id, error = %err, "failed to load tasks"),
        }
    }
}
