use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use notepeek_core::{AppConfig, NoteList};
use notepeek_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme, ui, App,
};

pub async fn run(config: Arc<AppConfig>, notes: NoteList) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    info!(notes = notes.len(), theme = %config.ui.theme.name, "Starting notes screen");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Notepeek"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), theme, notes);
    if app.screen.source().is_empty() {
        app.set_status("No notes loaded");
    }

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let result = main_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    // Track if we need high frame rate for smooth animation
    // This is checked at the END of each iteration to determine NEXT iteration's tick rate
    let mut needs_fast_update = false;

    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;
        app.after_draw(Instant::now());

        // Handle events (use faster tick rate during animations or an unreleased gesture)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, now),
                // The next draw re-lays out; hit regions follow
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            info!("Quitting");
            break;
        }
    }

    Ok(())
}
