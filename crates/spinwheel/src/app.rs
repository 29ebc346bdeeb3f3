//! Application entry point and dispatch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use spinwheel_cli::{run_spin, CLIResultPresenter, ProgressBarObserver};
use spinwheel_core::{LoggingObserver, ObserverSet, SpinAnimator, WheelConfig, WheelModel};
use spinwheel_render::{RenderObserver, WheelRenderer};
use spinwheel_tui::TuiApp;
use tracing::info;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        spinwheel_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let wheel = WheelConfig::DEFAULT;
    let model = wheel.model().context("building the wheel")?;

    if config.headless {
        run_headless(config, &wheel, model)
    } else {
        run_tui(config, &wheel, model)
    }
}

fn animator(config: &AppConfig, wheel: &WheelConfig, model: WheelModel) -> SpinAnimator {
    SpinAnimator::new(model, wheel).with_picker(config.picker())
}

fn run_headless(config: &AppConfig, wheel: &WheelConfig, model: WheelModel) -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    ctrlc_handler(Arc::clone(&interrupted))?;

    let snapshot = config
        .snapshot
        .as_ref()
        .map(|_| RenderObserver::new(WheelRenderer::new(&model, wheel)));
    let progress = if config.quiet || config.json {
        ProgressBarObserver::hidden()
    } else {
        ProgressBarObserver::new()
    };
    let logging = LoggingObserver::new();

    let mut observers = ObserverSet::new().with(&progress).with(&logging);
    if let Some(renderer) = &snapshot {
        observers.register(renderer);
    }

    let mut animator = animator(config, wheel, model);
    let outcome = run_spin(&mut animator, &observers, &interrupted)?;

    if let (Some(path), Some(renderer)) = (&config.snapshot, &snapshot) {
        renderer
            .renderer()
            .save_png(path)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        info!(path = %path.display(), "snapshot written");
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.json);
    presenter
        .present_outcome(&outcome)
        .context("printing the result")?;
    Ok(())
}

fn run_tui(config: &AppConfig, wheel: &WheelConfig, model: WheelModel) -> Result<()> {
    let renderer = WheelRenderer::new(&model, wheel);
    let mut app = TuiApp::new(animator(config, wheel, model), renderer);
    app.run().context("terminal UI failed")?;
    Ok(())
}

fn ctrlc_handler(interrupted: Arc<AtomicBool>) -> Result<()> {
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .context("installing the Ctrl+C handler")
}
