use anyhow::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use std::time::{Duration, Instant};

mod actions;
mod demo;
mod logger;
mod reducer;
mod state;
mod surface;
mod view;

use actions::{Action, action_for_key};
use dbug_config::OverlayConfig;
use dbug_core::{Aggregator, Overlay};
use demo::DemoProducers;
use state::AppState;
use surface::TerminalSurface;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting dbug-overlay, logging to {}", log_file.display());

    let config = OverlayConfig::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, AppState::new(config));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }

    log::info!("Exiting dbug-overlay");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
) -> Result<()> {
    let overlay = Overlay::new(state.config.overlay_options());
    // All producers register before the first tick
    let demo = DemoProducers::register(&overlay);
    let mut aggregator = Aggregator::new(overlay);
    let mut surface = TerminalSurface::new();

    let started = Instant::now();
    let tick_interval = Duration::from_millis(state.config.tick_interval_ms.max(1));

    loop {
        demo.update(state.frame, started.elapsed());

        let outcome = aggregator.tick(&state.config.settings(), &mut surface);
        log::trace!("Tick {}: {:?}", state.frame, outcome);
        state = reducer::reduce(state, &Action::Tick);

        terminal.draw(|frame| {
            let area = frame.area();
            view::render(&state, &surface, area, frame);
        })?;

        if !state.running {
            break;
        }

        // Handle events until the next tick is due
        if event::poll(tick_interval)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = action_for_key(key) {
                        log::debug!("Action: {:?}", action);
                        state = reducer::reduce(state, &action);
                    }
                }
            }
        }

        if !state.running {
            break;
        }
    }

    Ok(())
}
