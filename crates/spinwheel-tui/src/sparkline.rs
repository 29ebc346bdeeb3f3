//! Wheel speed history.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Sparkline};
use ratatui::Frame;

/// Number of samples kept.
pub const HISTORY_LEN: usize = 60;

/// Ring buffer of per-frame angular speed in degrees.
#[derive(Debug, Clone, Default)]
pub struct SpeedHistory {
    samples: VecDeque<f64>,
    last_angle: Option<f64>,
}

impl SpeedHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `angle_degrees`; the sample is the clockwise
    /// distance turned since the previous frame.
    pub fn record(&mut self, angle_degrees: f64) {
        if let Some(last) = self.last_angle {
            self.push((angle_degrees - last).rem_euclid(360.0));
        }
        self.last_angle = Some(angle_degrees);
    }

    /// Forget the previous frame so the next spin starts a fresh delta.
    pub fn reset_anchor(&mut self) {
        self.last_angle = None;
    }

    fn push(&mut self, sample: f64) {
        if self.samples.len() == HISTORY_LEN {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Samples scaled to hundredths of a degree for the sparkline widget.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scaled(&self) -> Vec<u64> {
        self.samples.iter().map(|&v| (v * 100.0) as u64).collect()
    }
}

/// Render the speed history.
pub fn render_sparkline(frame: &mut Frame, area: Rect, history: &SpeedHistory) {
    let title = match history.latest() {
        Some(speed) => format!(" Speed {speed:.1}°/frame "),
        None => " Speed ".to_string(),
    };
    let data = history.scaled();
    let sparkline = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(&data)
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(sparkline, area);
}
