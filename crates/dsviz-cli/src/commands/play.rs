use std::io;
use std::path::Path;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use dsviz_core::{AppConfig, Error, Operations, Player};
use dsviz_tui::{event::EventHandler, load_theme, TerminalSurface};

pub async fn run(config: &AppConfig, path: &Path, no_animate: bool) -> Result<()> {
    // Parse before touching the terminal so errors print normally
    let operations = Operations::from_path(path)?;

    let mut animation = config.animation.clone();
    if no_animate {
        animation.enabled = false;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("dsviz"))?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let events = EventHandler::new(config.ui.tick_rate_ms).spawn(action_tx);
    let (diagnostic_tx, diagnostic_rx) = mpsc::unbounded_channel();

    let surface = TerminalSurface::new(terminal, load_theme(&config.ui.theme), animation.fps)
        .with_actions(action_rx)
        .with_diagnostics(diagnostic_rx);
    let mut player = Player::new(surface, animation).with_diagnostics(diagnostic_tx);

    let result = match player.play(&operations).await {
        Ok(report) => player
            .surface_mut()
            .wait_for_quit()
            .await
            .map(|_| Some(report)),
        Err(Error::Interrupted) => Ok(None),
        Err(e) => Err(e),
    };

    // Restore terminal; dropping the surface closes the action channel
    let mut terminal = player.into_surface().into_terminal();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    events.await?;

    match result? {
        Some(report) => {
            info!(steps = report.steps, "Playback complete");
            println!(
                "Played {} steps ({} skipped, {} warnings)",
                report.steps, report.skipped, report.diagnostics
            );
        }
        None => println!("Playback interrupted"),
    }
    Ok(())
}
