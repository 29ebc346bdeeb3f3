//! TUI application model (Elm architecture).
//!
//! The model owns the animator and the raster renderer. Animator callbacks
//! reach the model as [`TuiMessage`]s through the bridge observer and are
//! applied in [`TuiApp::update`]; the view only reads model state.

use std::io;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use spinwheel_core::constants::{result_status, STATUS_IDLE};
use spinwheel_core::{
    ObserverSet, SpinAnimator, SpinObserver, SpinOutcome, SpinRequest, TickOutcome,
};
use spinwheel_render::{RenderObserver, WheelRenderer};
use tracing::{debug, warn};

use crate::bridge::TuiBridgeObserver;
use crate::chart::{render_progress, render_result};
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogScrollState, LOG_CAPACITY};
use crate::messages::TuiMessage;
use crate::sparkline::{render_sparkline, SpeedHistory};
use crate::wheel_view::render_wheel;

/// Poll timeout while no spin is running.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Lines moved by PageUp / PageDown.
const PAGE_SIZE: usize = 10;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether the spin trigger is enabled.
    pub trigger_enabled: bool,
    /// Status line shown above the wheel.
    pub status: String,
    /// Progress of the running spin.
    pub progress: f64,
    /// Outcome of the most recent spin.
    pub last_outcome: Option<SpinOutcome>,
    /// Number of finished spins.
    pub spins: u64,
    /// Spin history lines.
    pub logs: Vec<String>,
    pub log_scroll: LogScrollState,
    /// Show the history panel.
    pub show_logs: bool,
    /// Per-frame angular speed.
    pub speed: SpeedHistory,
    pub terminal_width: u16,
    pub terminal_height: u16,
    animator: SpinAnimator,
    renderer: RenderObserver,
    bridge: TuiBridgeObserver,
    tx: Sender<TuiMessage>,
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create the app and draw the wheel at rest.
    #[must_use]
    pub fn new(animator: SpinAnimator, renderer: WheelRenderer) -> Self {
        let (tx, rx) = unbounded();
        let mut app = Self {
            should_quit: false,
            trigger_enabled: true,
            status: STATUS_IDLE.to_string(),
            progress: 0.0,
            last_outcome: None,
            spins: 0,
            logs: Vec::new(),
            log_scroll: LogScrollState::new(),
            show_logs: true,
            speed: SpeedHistory::new(),
            terminal_width: 80,
            terminal_height: 24,
            bridge: TuiBridgeObserver::new(tx.clone()),
            renderer: RenderObserver::new(renderer),
            animator,
            tx,
            rx,
        };
        if let Err(err) = app.renderer.on_frame(&app.animator.state()) {
            warn!(error = %err, "initial frame not drawn");
            app.push_log(format!("[ERROR] {err}"));
        }
        let summary = format!(
            "Loaded {} segments, labels drawn with {}",
            app.animator.model().len(),
            app.renderer.renderer().font_name()
        );
        app.push_log(summary);
        app
    }

    /// Sender for feeding messages into the update cycle.
    #[must_use]
    pub fn sender(&self) -> Sender<TuiMessage> {
        self.tx.clone()
    }

    #[must_use]
    pub fn animator(&self) -> &SpinAnimator {
        &self.animator
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::TriggerEnabled(enabled) => {
                self.trigger_enabled = enabled;
            }
            TuiMessage::Status(text) => {
                self.status = text;
            }
            TuiMessage::Frame(state) => {
                self.speed.record(state.angle_degrees);
            }
            TuiMessage::Progress(progress) => {
                self.progress = progress;
            }
            TuiMessage::Complete(outcome) => {
                self.spins += 1;
                self.push_log(format!(
                    "Spin #{}: {} at {:.2}° in {} ms",
                    self.spins,
                    result_status(&outcome.label),
                    outcome.final_angle_degrees,
                    outcome.elapsed_ms
                ));
                self.last_outcome = Some(outcome);
            }
            TuiMessage::Notice(text) => {
                self.push_log(format!("[WARN] {text}"));
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Spin => self.request_spin(),
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::ToggleLogs => {
                self.show_logs = !self.show_logs;
            }
            KeyAction::ScrollUp => self.log_scroll.scroll_up(),
            KeyAction::ScrollDown => self.log_scroll.scroll_down(self.logs.len()),
            KeyAction::PageUp => self.log_scroll.page_up(PAGE_SIZE),
            KeyAction::PageDown => self.log_scroll.page_down(PAGE_SIZE, self.logs.len()),
            KeyAction::Home => self.log_scroll.home(),
            KeyAction::End => self.log_scroll.end(self.logs.len()),
            KeyAction::None => {}
        }
    }

    /// Start a spin; ignored while one is running.
    pub fn request_spin(&mut self) {
        let observers = ObserverSet::new().with(&self.renderer).with(&self.bridge);
        match self.animator.spin(&observers) {
            SpinRequest::Started(target) => {
                self.speed.reset_anchor();
                debug!(
                    chosen = target.chosen_segment_index,
                    target_angle = target.target_angle_degrees,
                    "spin started from the terminal"
                );
            }
            SpinRequest::AlreadySpinning => {
                debug!("spin key ignored while spinning");
            }
        }
    }

    /// Advance the animation if its timer is due.
    ///
    /// Returns whether a tick ran.
    pub fn tick_if_due(&mut self) -> bool {
        if !self.animator.is_tick_due() {
            return false;
        }
        let observers = ObserverSet::new().with(&self.renderer).with(&self.bridge);
        if let TickOutcome::Finished(outcome) = self.animator.tick(&observers) {
            debug!(label = %outcome.label, "terminal spin settled");
        }
        true
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > LOG_CAPACITY {
            self.logs.remove(0);
            self.log_scroll.on_evicted();
        }
        self.log_scroll.on_new_message(self.logs.len());
    }

    /// Split the screen into header, wheel, side panel and footer.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer[1]);

        (outer[0], main[0], main[1], outer[2])
    }

    /// Split the side panel into gauge, result, speed and (optionally) logs.
    #[must_use]
    pub fn compute_side_layout(side: Rect, show_logs: bool) -> (Rect, Rect, Rect, Option<Rect>) {
        if show_logs {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(4),
                    Constraint::Length(5),
                    Constraint::Min(3),
                ])
                .split(side);
            (chunks[0], chunks[1], chunks[2], Some(chunks[3]))
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(4),
                    Constraint::Min(5),
                ])
                .split(side);
            (chunks[0], chunks[1], chunks[2], None)
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, wheel_area, side_area, footer_area) = Self::compute_layout(frame.area());
        let renderer = self.renderer.renderer();

        render_header(
            frame,
            header_area,
            self.animator.model().len(),
            renderer.font_name(),
            self.spins,
        );

        let anchors = renderer.label_anchors(&self.animator.state());
        render_wheel(frame, wheel_area, renderer.frame(), &anchors);

        let (gauge_area, result_area, speed_area, logs_area) =
            Self::compute_side_layout(side_area, self.show_logs);
        render_progress(frame, gauge_area, &self.status, self.progress);
        render_result(frame, result_area, self.last_outcome.as_ref());
        render_sparkline(frame, speed_area, &self.speed);
        if let Some(logs_area) = logs_area {
            render_logs(frame, logs_area, &self.logs, &self.log_scroll);
        }

        render_footer(frame, footer_area, self.trigger_enabled);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// The poll timeout is the time left until the next animation tick, so
    /// the loop sleeps in the terminal poll rather than spinning. The
    /// pending tick is cancelled before the terminal is restored.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        self.animator.cancel();
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            let timeout = self.animator.time_until_next_tick().unwrap_or(IDLE_TICK);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_message(TuiMessage::KeyPress(map_key(key_event)));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            self.tick_if_due();
            self.update();
        }
    }
}
