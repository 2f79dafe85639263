//! Values passed between the task panel, the async dispatcher and the event loop.

use std::fmt;

use lifeos_core::{ClientError, Task};

/// Identifies one activation of the Tasks panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct PanelId(pub(crate) u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// Sequence number of a list reload within one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct ReloadToken(pub(crate) u64);

/// Work the task panel asks the dispatcher to run off the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Effect {
    None,
    CreateTask(String),
    ReloadTasks(ReloadToken),
}

/// Completions posted back to the event loop.
#[derive(Debug)]
pub(crate) enum Message {
    TaskCreated {
        panel: PanelId,
        result: Result<(), ClientError>,
    },
    TasksLoaded {
        panel: PanelId,
        token: ReloadToken,
        result: Result<Vec<Task>, ClientError>,
    },
}

impl Message {
    pub(crate) fn panel(&self) -> PanelId {
        match self {
            Message::TaskCreated { panel, .. } | Message::TasksLoaded { panel, .. } => *panel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_reports_its_panel() {
        let message = Message::TaskCreated {
            panel: PanelId(3),
            result: Ok(()),
        };
        assert_eq!(message.panel(), PanelId(3));
        assert_eq!(message.panel().to_string(), "panel#3");
    }
}
