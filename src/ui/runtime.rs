use crate::cli::RunSettings;
use crate::error::AppError;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::time::Instant;

/// Animates the sort until the user quits. Exhaustion only stops the
/// animation; the final state stays on screen.
pub fn run(settings: &RunSettings, data: Vec<u32>) -> Result<(), AppError> {
    let (mut terminal, guard) = setup_terminal().map_err(AppError::Terminal)?;
    let mut app = App::new(
        settings.algorithm,
        data,
        settings.frame_interval,
        settings.steps_per_frame,
        Instant::now(),
    );
    let events = EventHandler::new();

    loop {
        terminal
            .draw(|frame| draw(frame, &app, Instant::now()))
            .map_err(AppError::Terminal)?;
        if app.should_quit() {
            break;
        }

        let timeout = app.poll_timeout(Instant::now());
        match events.next(timeout).map_err(AppError::Terminal)? {
            AppEvent::Key(key) => handle_key(&mut app, key, Instant::now()),
            AppEvent::Resize(cols, rows) => tracing::debug!(cols, rows, "terminal resized"),
            AppEvent::Tick => {}
        }
        app.on_tick(Instant::now());
    }

    drop(guard);
    tracing::info!(steps = app.playback().steps(), "playback closed");
    Ok(())
}
