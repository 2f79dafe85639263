use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::tui::constants::{
    APP_VERSION, HELP_STATIC, HELP_TASKS, SUBMIT_LABEL, TITLE_PLACEHOLDER,
};
use crate::tui::helpers::{
    accent_title, inset_rect, tail_fit, BG_ACCENT, BG_BASE, BG_PANEL, FG_ACCENT, FG_MUTED,
};
use crate::tui::shell::{Panel, View};
use crate::tui::tasks::{Phase, TaskPanel, TaskRows};

use super::App;

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_tabs(f, chunks[1]);
        self.draw_body(f, chunks[2]);
        self.draw_footer(f, chunks[3]);
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let left_line = Line::from(vec![
            Span::styled(
                format!(" LifeOS v{} ", APP_VERSION),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("- {}", self.shell.active_view().title())),
        ]);
        f.render_widget(
            Paragraph::new(left_line).style(Style::default().bg(BG_BASE)),
            cols[0],
        );

        let right_line = Line::from(vec![Span::styled(
            self.config.api_base().to_string(),
            Style::default().fg(Color::DarkGray),
        )]);
        let right_para = Paragraph::new(right_line)
            .alignment(Alignment::Right)
            .style(Style::default().bg(BG_BASE));
        f.render_widget(right_para, cols[1]);
    }

    fn draw_tabs(&self, f: &mut Frame<'_>, area: Rect) {
        let titles: Vec<Line> = View::ALL
            .iter()
            .enumerate()
            .map(|(idx, view)| Line::from(format!("{} {}", idx + 1, view.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.shell.active_view().index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(accent_title("Views"))
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(BG_PANEL)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Green)
                    .bg(BG_ACCENT)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
    }

    fn draw_body(&self, f: &mut Frame<'_>, area: Rect) {
        match self.shell.active() {
            Panel::Static(view) => draw_static(f, area, *view),
            Panel::Tasks(panel) => draw_tasks(f, area, panel),
        }
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.style())])
        } else {
            Line::from(vec![Span::raw("Ready")])
        };
        f.render_widget(Paragraph::new(status_line), lines[0]);

        let help = match self.shell.active_view() {
            View::Tasks => HELP_TASKS,
            _ => HELP_STATIC,
        };
        let help_line = Line::from(vec![Span::styled(
            help,
            Style::default().fg(Color::DarkGray),
        )]);
        f.render_widget(Paragraph::new(help_line), lines[1]);
    }
}

fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(accent_title(title))
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(BG_PANEL))
}

fn draw_static(f: &mut Frame<'_>, area: Rect, view: View) {
    let block = panel_block(view.title());
    let inner = inset_rect(block.inner(area), 1);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(view.body().len());
    for (idx, text) in view.body().iter().enumerate() {
        let style = if idx == 0 {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(FG_MUTED)
        };
        lines.push(Line::from(Span::styled(*text, style)));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_tasks(f: &mut Frame<'_>, area: Rect, panel: &TaskPanel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    draw_task_form(f, chunks[0], panel);
    draw_task_list(f, chunks[1], panel);
}

fn draw_task_form(f: &mut Frame<'_>, area: Rect, panel: &TaskPanel) {
    let title = match panel.phase() {
        Phase::FormRendered => "New task".to_string(),
        Phase::Submitting => "New task · adding".to_string(),
    };
    let block = panel_block(&title);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let form = panel.form();
    // One spare cell so the cursor can sit after the last char.
    let visible = usize::from(inner.width.saturating_sub(1));
    let input_line = if form.is_empty() {
        Line::from(Span::styled(TITLE_PLACEHOLDER, Style::default().fg(FG_MUTED)))
    } else {
        let (shown, _) = tail_fit(form.as_str(), visible);
        Line::from(Span::styled(shown, Style::default().fg(Color::White)))
    };
    f.render_widget(Paragraph::new(input_line), rows[0]);

    if rows[1].height > 0 {
        let hint = Line::from(vec![
            Span::styled("Enter: ", Style::default().fg(FG_MUTED)),
            Span::styled(
                SUBMIT_LABEL,
                Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]);
        f.render_widget(Paragraph::new(hint), rows[1]);
    }

    let (_, skipped) = tail_fit(form.as_str(), visible);
    let column = form.cursor_column().saturating_sub(skipped);
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    let x = rows[0].x + column.min(inner.width.saturating_sub(1));
    f.set_cursor(x, rows[0].y);
}

fn draw_task_list(f: &mut Frame<'_>, area: Rect, panel: &TaskPanel) {
    let title = if panel.is_reloading() {
        "Your tasks · refreshing"
    } else {
        "Your tasks"
    };
    let block = panel_block(title);
    let items: Vec<ListItem> = match panel.rows() {
        TaskRows::Rows(rows) => rows
            .iter()
            .map(|row| ListItem::new(Line::from(format!("- {row}"))))
            .collect(),
        other => other
            .lines()
            .into_iter()
            .map(|line| ListItem::new(Line::from(Span::styled(line, Style::default().fg(FG_MUTED)))))
            .collect(),
    };
    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(Color::White));
    f.render_widget(list, area);
}
