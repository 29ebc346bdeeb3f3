//! Spin progress and result panels.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;
use spinwheel_core::constants::result_status;
use spinwheel_core::SpinOutcome;

use crate::styles::ColorTheme;

/// Render the spin progress as a gauge titled with the status text.
pub fn render_progress(frame: &mut Frame, area: Rect, status: &str, progress: f64) {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {status} ")),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress);

    frame.render_widget(gauge, area);
}

/// Render the last outcome, or a hint before the first spin.
pub fn render_result(frame: &mut Frame, area: Rect, outcome: Option<&SpinOutcome>) {
    let theme = ColorTheme::default();
    let text = match outcome {
        Some(outcome) => vec![
            Line::from(Span::styled(result_status(&outcome.label), theme.success_style())),
            Line::from(Span::styled(
                format!(
                    "segment {} at {:.2}° in {} ms",
                    outcome.index, outcome.final_angle_degrees, outcome.elapsed_ms
                ),
                theme.muted_style(),
            )),
        ],
        None => vec![Line::from(Span::styled("No spins yet", theme.muted_style()))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Result ")
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(text).block(block), area);
}
