use std::time::Instant;

use ratatui::style::{Color, Style};
use tokio::sync::mpsc::UnboundedReceiver;

use super::constants::{STATUS_TITLE_REQUIRED, STATUS_TTL};
use super::message::{Effect, Message};
use super::shell::{Shell, View};
use super::tasks::Submission;
use crate::config::AppConfig;

pub(crate) mod commands;
mod input;
mod render;

use commands::Dispatcher;

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Hint => Style::default().fg(Color::Yellow),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Hint,
}

pub(crate) struct App {
    config: AppConfig,
    shell: Shell,
    dispatcher: Dispatcher,
    inbox: UnboundedReceiver<Message>,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(
        config: AppConfig,
        dispatcher: Dispatcher,
        inbox: UnboundedReceiver<Message>,
        initial_view: View,
    ) -> Self {
        let mut app = Self {
            config,
            shell: Shell::new(),
            dispatcher,
            inbox,
            status: None,
            should_quit: false,
        };
        if initial_view != app.shell.active_view() {
            app.show_view(initial_view);
        }
        app.set_status_info(format!("Using task service at {}", app.config.api_base()));
        app
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub(crate) fn show_view(&mut self, view: View) {
        let effect = self.shell.show_view(view);
        self.status = None;
        self.run_effect(effect);
    }

    /// Apply every completion that has arrived since the last frame.
    pub(crate) fn drain_messages(&mut self) {
        while let Ok(message) = self.inbox.try_recv() {
            self.on_message(message);
        }
    }

    pub(crate) fn on_message(&mut self, message: Message) {
        let id = message.panel();
        match self.shell.panel_for(id) {
            Some(panel) => {
                let effect = panel.on_message(message);
                self.dispatcher.dispatch(panel, effect);
            }
            None => tracing::debug!(panel = %id, "dropping completion for a replaced panel"),
        }
    }

    fn submit_task(&mut self) {
        let Some(panel) = self.shell.tasks_panel_mut() else {
            return;
        };
        match panel.submit() {
            Submission::Blocked => self.set_status_hint(STATUS_TITLE_REQUIRED),
            Submission::Sent(effect) => {
                self.dispatcher.dispatch(panel, effect);
                self.status = None;
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match self.shell.tasks_panel_mut() {
            Some(panel) => self.dispatcher.dispatch(panel, effect),
            None if effect != Effect::None => {
                tracing::debug!(?effect, "no task panel to run effect for")
            }
            None => {}
        }
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        self.status = Some(StatusMessage::new(message, StatusKind::Info));
    }

    pub(crate) fn set_status_hint<T: Into<String>>(&mut self, message: T) {
        self.status = Some(StatusMessage::new(message, StatusKind::Hint));
    }
}
