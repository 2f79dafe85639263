//! Navigation shell: owns whichever panel currently fills the content region.

use clap::ValueEnum;

use super::message::{Effect, PanelId};
use super::tasks::TaskPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum View {
    #[default]
    Dashboard,
    Tasks,
    Fitness,
    Health,
    Leaderboard,
}

impl View {
    pub const ALL: &'static [View] = &[
        View::Dashboard,
        View::Tasks,
        View::Fitness,
        View::Health,
        View::Leaderboard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Tasks => "Tasks",
            View::Fitness => "Fitness",
            View::Health => "Health",
            View::Leaderboard => "Leaderboard",
        }
    }

    /// Body text for the static panels. Tasks renders its own content.
    pub fn body(self) -> &'static [&'static str] {
        match self {
            View::Dashboard => &[
                "Welcome to LifeOS.",
                "Your daily productivity and health overview.",
            ],
            View::Tasks => &[],
            View::Fitness => &["Fitness tracking coming soon."],
            View::Health => &["Medication and health insights."],
            View::Leaderboard => &["Competitive rankings will appear here."],
        }
    }

    pub fn index(self) -> usize {
        View::ALL
            .iter()
            .position(|view| *view == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }

    pub fn from_digit(digit: char) -> Option<View> {
        let index = digit.to_digit(10)?.checked_sub(1)? as usize;
        View::ALL.get(index).copied()
    }
}

#[derive(Debug)]
pub(crate) enum Panel {
    Static(View),
    Tasks(TaskPanel),
}

impl Panel {
    pub(crate) fn view(&self) -> View {
        match self {
            Panel::Static(view) => *view,
            Panel::Tasks(_) => View::Tasks,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Shell {
    active: Panel,
    activations: u64,
}

impl Shell {
    /// Starts on the Dashboard.
    pub(crate) fn new() -> Self {
        Self {
            active: Panel::Static(View::Dashboard),
            activations: 0,
        }
    }

    pub(crate) fn active_view(&self) -> View {
        self.active.view()
    }

    pub(crate) fn active(&self) -> &Panel {
        &self.active
    }

    /// Replace the content region with `view`. Always a full re-render: the
    /// previous panel is dropped along with its form state and in-flight calls.
    pub(crate) fn show_view(&mut self, view: View) -> Effect {
        tracing::debug!(from = self.active_view().title(), to = view.title(), "showing view");
        match view {
            View::Tasks => {
                self.activations += 1;
                let (panel, effect) = TaskPanel::activate(PanelId(self.activations));
                self.active = Panel::Tasks(panel);
                effect
            }
            other => {
                self.active = Panel::Static(other);
                Effect::None
            }
        }
    }

    pub(crate) fn tasks_panel_mut(&mut self) -> Option<&mut TaskPanel> {
        match &mut self.active {
            Panel::Tasks(panel) => Some(panel),
            Panel::Static(_) => None,
        }
    }

    /// The active task panel, but only if it is the activation `id` refers to.
    pub(crate) fn panel_for(&mut self, id: PanelId) -> Option<&mut TaskPanel> {
        self.tasks_panel_mut().filter(|panel| panel.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::message::ReloadToken;
    use crate::tui::tasks::TaskRows;
    use lifeos_core::Task;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn starts_on_dashboard() {
        let shell = Shell::new();
        assert_eq!(shell.active_view(), View::Dashboard);
    }

    #[rstest]
    #[case(View::Dashboard)]
    #[case(View::Fitness)]
    #[case(View::Health)]
    #[case(View::Leaderboard)]
    fn static_views_need_no_work(#[case] view: View) {
        let mut shell = Shell::new();
        assert_eq!(shell.show_view(view), Effect::None);
        assert_eq!(shell.active_view(), view);
        assert!(!view.body().is_empty());
    }

    #[test]
    fn returning_to_tasks_starts_fresh() {
        let mut shell = Shell::new();
        let first = shell.show_view(View::Tasks);
        assert_eq!(first, Effect::ReloadTasks(ReloadToken(1)));
        {
            let panel = shell.tasks_panel_mut().expect("tasks panel");
            panel.form_mut().insert_char('x');
            panel.on_message(crate::tui::message::Message::TasksLoaded {
                panel: PanelId(1),
                token: ReloadToken(1),
                result: Ok(vec![Task::new("Walk", "easy", 5)]),
            });
        }

        shell.show_view(View::Health);
        let second = shell.show_view(View::Tasks);

        assert_eq!(second, Effect::ReloadTasks(ReloadToken(1)));
        let panel = shell.tasks_panel_mut().expect("tasks panel");
        assert_eq!(panel.id(), PanelId(2));
        assert!(panel.form().is_empty());
        assert_eq!(panel.rows(), &TaskRows::Unloaded);
    }

    #[test]
    fn reshowing_tasks_replaces_the_panel() {
        let mut shell = Shell::new();
        shell.show_view(View::Tasks);
        shell.show_view(View::Tasks);

        assert!(shell.panel_for(PanelId(1)).is_none());
        assert!(shell.panel_for(PanelId(2)).is_some());
    }

    #[test]
    fn view_cycling_wraps() {
        assert_eq!(View::Dashboard.prev(), View::Leaderboard);
        assert_eq!(View::Leaderboard.next(), View::Dashboard);
        assert_eq!(View::Tasks.next(), View::Fitness);
    }

    #[rstest]
    #[case('1', Some(View::Dashboard))]
    #[case('2', Some(View::Tasks))]
    #[case('5', Some(View::Leaderboard))]
    #[case('0', None)]
    #[case('6', None)]
    #[case('x', None)]
    fn digits_map_to_views(#[case] digit: char, #[case] expected: Option<View>) {
        assert_eq!(View::from_digit(digit), expected);
    }
}
