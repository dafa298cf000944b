use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use pass_window::Ticker;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::keys::handle_key;

/// Upper bound on how long a keystroke or tick waits to be drawn.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ticker: &mut Ticker,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app);
                }
            }
        }

        // The ticker runs on this same single-threaded runtime.
        tokio::task::yield_now().await;

        if let Some(now) = ticker.poll_tick() {
            app.on_tick(now);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
