//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts.
///
/// The spin hint is dimmed while the trigger is disabled.
pub fn render_footer(frame: &mut Frame, area: Rect, trigger_enabled: bool) {
    let key = Style::default().fg(Color::Yellow);
    let spin_key = if trigger_enabled {
        key
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = vec![Line::from(vec![
        Span::styled("space", spin_key),
        Span::raw(": spin | "),
        Span::styled("l", key),
        Span::raw(": logs | "),
        Span::styled("↑/↓", key),
        Span::raw(": scroll | "),
        Span::styled("q", key),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn footer_row(width: u16, trigger_enabled: bool) -> (String, Color) {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, trigger_enabled);
            })
            .unwrap();
        let content = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        (content, buf.buffer[(0, 1)].fg)
    }

    #[test]
    fn render_footer_contains_all_shortcuts() {
        let (content, _) = footer_row(80, true);
        assert!(content.contains("spin"));
        assert!(content.contains("logs"));
        assert!(content.contains("scroll"));
        assert!(content.contains("quit"));
    }

    #[test]
    fn spin_hint_dimmed_while_spinning() {
        assert_eq!(footer_row(80, true).1, Color::Yellow);
        assert_eq!(footer_row(80, false).1, Color::DarkGray);
    }

    #[test]
    fn render_footer_small_area() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, true);
            })
            .unwrap();
    }
}
