//! Async adapters that turn task panel effects into service calls.

use std::sync::Arc;

use lifeos_core::TaskService;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::tui::message::{Effect, Message, PanelId, ReloadToken};
use crate::tui::tasks::TaskPanel;

#[derive(Clone)]
pub(crate) struct Dispatcher {
    runtime: Handle,
    service: Arc<dyn TaskService>,
    outbox: UnboundedSender<Message>,
}

impl Dispatcher {
    pub(crate) fn new(
        runtime: Handle,
        service: Arc<dyn TaskService>,
        outbox: UnboundedSender<Message>,
    ) -> Self {
        Self {
            runtime,
            service,
            outbox,
        }
    }

    /// Spawn the call `effect` asks for; the panel keeps its handle.
    pub(crate) fn dispatch(&self, panel: &mut TaskPanel, effect: Effect) {
        let handle = match effect {
            Effect::CreateTask(title) => self.create_command(panel.id(), title),
            Effect::ReloadTasks(token) => self.reload_command(panel.id(), token),
            Effect::None => return,
        };
        let subscriptions = panel.subscriptions_mut();
        subscriptions.track(handle);
        tracing::trace!(in_flight = subscriptions.active(), "dispatched panel effect");
    }

    fn create_command(&self, panel: PanelId, title: String) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let outbox = self.outbox.clone();
        self.runtime.spawn(async move {
            let result = service.create_task(&title).await;
            if outbox.send(Message::TaskCreated { panel, result }).is_err() {
                tracing::debug!(%panel, "event loop closed before create completed");
            }
        })
    }

    fn reload_command(&self, panel: PanelId, token: ReloadToken) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let outbox = self.outbox.clone();
        self.runtime.spawn(async move {
            let result = service.list_tasks().await;
            let message = Message::TasksLoaded {
                panel,
                token,
                result,
            };
            if outbox.send(message).is_err() {
                tracing::debug!(%panel, token = token.0, "event loop closed before reload completed");
            }
        })
    }
}
