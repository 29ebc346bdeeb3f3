//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, segments: usize, font: &str, spins: u64) {
    let theme = ColorTheme::default();
    let text = vec![Line::from(vec![
        Span::styled("SpinWheel", theme.header_style()),
        Span::raw(format!(
            " | {segments} segments | Font: {font} | Spins: {spins}"
        )),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" SpinWheel ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn header_shows_wheel_summary() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, 8, "builtin 8x8", 2);
            })
            .unwrap();

        let content: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(content.contains("8 segments"));
        assert!(content.contains("builtin 8x8"));
        assert!(content.contains("Spins: 2"));
    }

    #[test]
    fn header_small_area() {
        let backend = TestBackend::new(10, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, 1, "x", 0);
            })
            .unwrap();
    }
}
