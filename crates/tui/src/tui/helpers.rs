use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const BG_BASE: Color = Color::Rgb(14, 17, 23);
pub const BG_PANEL: Color = Color::Rgb(22, 26, 34);
pub const BG_ACCENT: Color = Color::Rgb(32, 37, 47);
pub const FG_ACCENT: Color = Color::Rgb(120, 161, 255);
pub const FG_MUTED: Color = Color::Rgb(98, 104, 117);

pub fn accent_title(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
    )])
}

/// Shrink `area` by `padding` cells on every side, never past zero.
pub fn inset_rect(area: Rect, padding: u16) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let px = padding.min(area.width / 2);
    let py = padding.min(area.height / 2);
    Rect {
        x: area.x + px,
        y: area.y + py,
        width: area.width.saturating_sub(px * 2),
        height: area.height.saturating_sub(py * 2),
    }
}

/// Clip `text` to the last `width` chars so the cursor end stays visible.
pub fn tail_fit(text: &str, width: usize) -> (String, usize) {
    let total = text.chars().count();
    if total <= width {
        return (text.to_string(), 0);
    }
    let skipped = total - width;
    (text.chars().skip(skipped).collect(), skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inset_rect_never_underflows() {
        let area = Rect::new(2, 3, 3, 1);
        let inner = inset_rect(area, 4);
        assert_eq!(inner, Rect::new(3, 3, 1, 1));
    }

    #[test]
    fn tail_fit_keeps_the_end() {
        assert_eq!(tail_fit("short", 10), ("short".to_string(), 0));
        assert_eq!(tail_fit("abcdefgh", 3), ("fgh".to_string(), 5));
    }
}
