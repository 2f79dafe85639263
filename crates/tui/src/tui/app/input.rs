use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::shell::View;

use super::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavAction {
    Quit,
    NextView,
    PrevView,
    Show(View),
}

impl NavAction {
    /// Keys that navigate regardless of which panel is showing.
    fn global(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }
        match key.code {
            KeyCode::Tab => Some(Self::NextView),
            KeyCode::BackTab => Some(Self::PrevView),
            _ => None,
        }
    }

    /// Extra shortcuts on static panels, where typing has no meaning.
    fn on_static_panel(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::NextView),
            KeyCode::Left | KeyCode::Char('h') => Some(Self::PrevView),
            KeyCode::Char(digit) => View::from_digit(digit).map(Self::Show),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) {
        if let Some(action) = NavAction::global(&key) {
            self.execute_nav_action(action);
            return;
        }

        match self.shell.active_view() {
            View::Tasks => self.handle_tasks_key(key),
            _ => {
                if let Some(action) = NavAction::on_static_panel(&key) {
                    self.execute_nav_action(action);
                }
            }
        }
    }

    fn execute_nav_action(&mut self, action: NavAction) {
        let current = self.shell.active_view();
        match action {
            NavAction::Quit => self.should_quit = true,
            NavAction::NextView => self.show_view(current.next()),
            NavAction::PrevView => self.show_view(current.prev()),
            NavAction::Show(view) => self.show_view(view),
        }
    }

    fn handle_tasks_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit_task();
            return;
        }

        let Some(panel) = self.shell.tasks_panel_mut() else {
            return;
        };
        let form = panel.form_mut();
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.insert_char(ch)
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Delete => form.delete_char(),
            KeyCode::Left => form.move_left(),
            KeyCode::Right => form.move_right(),
            KeyCode::Home => form.move_home(),
            KeyCode::End => form.move_end(),
            _ => {}
        }
    }
}
