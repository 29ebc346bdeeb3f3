//! Scrollable spin history panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Maximum number of lines kept in the panel.
pub const LOG_CAPACITY: usize = 500;

/// Scroll state for the log panel.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    /// Current scroll offset (first visible line index).
    pub offset: usize,
    /// Whether auto-scroll to bottom is enabled.
    pub auto_scroll: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Follow the newest line if auto-scroll is on.
    pub fn on_new_message(&mut self, total_logs: usize) {
        if self.auto_scroll {
            self.offset = total_logs.saturating_sub(1);
        }
    }

    /// The oldest line was evicted; keep the same lines in view.
    pub fn on_evicted(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, total_logs: usize) {
        self.page_down(1, total_logs);
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(page_size);
    }

    /// Move down; reaching the last line turns auto-scroll back on.
    pub fn page_down(&mut self, page_size: usize, total_logs: usize) {
        let last = total_logs.saturating_sub(1);
        self.offset = (self.offset + page_size).min(last);
        if self.offset >= last {
            self.auto_scroll = true;
        }
    }

    pub fn home(&mut self) {
        self.auto_scroll = false;
        self.offset = 0;
    }

    pub fn end(&mut self, total_logs: usize) {
        self.auto_scroll = true;
        self.offset = total_logs.saturating_sub(1);
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the log panel starting at `scroll_offset`.
///
/// When following the tail, the window is pulled back so the last line
/// sits at the bottom of the panel instead of the top.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String], scroll: &LogScrollState) {
    let theme = ColorTheme::default();
    let visible_height = area.height.saturating_sub(2) as usize;
    let total = logs.len();
    let first = if scroll.auto_scroll {
        total.saturating_sub(visible_height)
    } else {
        scroll.offset.min(total.saturating_sub(1))
    };

    let items: Vec<ListItem> = logs
        .iter()
        .skip(first)
        .take(visible_height)
        .map(|log| ListItem::new(Line::raw(log.as_str())).style(theme.log_style(log)))
        .collect();

    let title = if total > visible_height {
        let pct = (first * 100) / total.saturating_sub(visible_height).max(1);
        format!(" History ({}%) ", pct.min(100))
    } else {
        " History ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.muted_style()),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn scroll_state_initial() {
        let state = LogScrollState::new();
        assert_eq!(state.offset, 0);
        assert!(state.auto_scroll);
    }

    #[test]
    fn new_message_follows_tail() {
        let mut state = LogScrollState::new();
        state.on_new_message(10);
        assert_eq!(state.offset, 9);

        state.scroll_up();
        state.on_new_message(11);
        assert_eq!(state.offset, 8);
    }

    #[test]
    fn scroll_up_at_zero() {
        let mut state = LogScrollState::new();
        state.scroll_up();
        assert_eq!(state.offset, 0);
        assert!(!state.auto_scroll);
    }

    #[test]
    fn scroll_down_to_bottom_enables_auto_scroll() {
        let mut state = LogScrollState::new();
        state.auto_scroll = false;
        state.offset = 8;
        state.scroll_down(10);
        assert_eq!(state.offset, 9);
        assert!(state.auto_scroll);
    }

    #[test]
    fn paging() {
        let mut state = LogScrollState::new();
        state.offset = 15;
        state.page_up(10);
        assert_eq!(state.offset, 5);
        assert!(!state.auto_scroll);

        state.page_down(10, 50);
        assert_eq!(state.offset, 15);
        assert!(!state.auto_scroll);

        state.page_down(100, 50);
        assert_eq!(state.offset, 49);
        assert!(state.auto_scroll);
    }

    #[test]
    fn home_and_end() {
        let mut state = LogScrollState::new();
        state.offset = 50;
        state.home();
        assert_eq!(state.offset, 0);
        assert!(!state.auto_scroll);
        state.end(30);
        assert_eq!(state.offset, 29);
        assert!(state.auto_scroll);
    }

    #[test]
    fn eviction_keeps_view() {
        let mut state = LogScrollState::new();
        state.offset = 3;
        state.on_evicted();
        assert_eq!(state.offset, 2);
        state.home();
        state.on_evicted();
        assert_eq!(state.offset, 0);
    }

    fn rendered_rows(logs: &[String], scroll: &LogScrollState) -> Vec<String> {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_logs(frame, area, logs, scroll);
            })
            .unwrap();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn tail_fills_the_panel() {
        let logs: Vec<String> = (1..=10).map(|i| format!("line {i}")).collect();
        let rows = rendered_rows(&logs, &LogScrollState::new());
        assert!(rows[1].contains("line 8"));
        assert!(rows[3].contains("line 10"));
        assert!(rows[0].contains("History (100%)"));
    }

    #[test]
    fn manual_offset_is_respected() {
        let logs: Vec<String> = (1..=10).map(|i| format!("line {i}")).collect();
        let mut scroll = LogScrollState::new();
        scroll.home();
        let rows = rendered_rows(&logs, &scroll);
        assert!(rows[1].contains("line 1 "));
        assert!(rows[0].contains("History (0%)"));
    }

    #[test]
    fn empty_logs() {
        let rows = rendered_rows(&[], &LogScrollState::new());
        assert!(rows[0].contains("History"));
    }
}
