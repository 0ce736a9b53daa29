use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

// Event poll timeout, also the animation frame interval
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    tracing::info!(mode = %app.mode, "starting dashboard");

    while app.running {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code).await;
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            _ => {
                // Ignore mouse, focus and paste events
            }
        }
    }

    tracing::info!("dashboard closed");
    Ok(())
}
