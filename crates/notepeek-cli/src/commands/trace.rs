use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use notepeek_core::animation::TimedValue;
use notepeek_core::{AppConfig, FocusTarget, ListScreen, NoteList, ScreenFrame};
use notepeek_tui::search_input::SearchInput;

/// Gesture sequence to simulate
#[derive(Debug, Clone, Default)]
pub struct TraceOptions {
    /// Overscroll offset when the pointer is released on the first frame
    pub pull: f64,
    /// Tap the search control on the first frame
    pub tap: bool,
    pub cancel_at_ms: Option<u64>,
    /// Typed once the input gains focus
    pub query: Option<String>,
    pub frames: u32,
}

pub fn run(config: &AppConfig, notes: NoteList, options: TraceOptions) -> Result<()> {
    info!(?options, "Tracing gesture");
    let frames = simulate(config, notes, &options, Instant::now());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for frame in &frames {
        serde_json::to_writer(&mut out, frame)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Run the screen frame by frame at the configured animation rate
pub fn simulate(
    config: &AppConfig,
    notes: NoteList,
    options: &TraceOptions,
    start: Instant,
) -> Vec<ScreenFrame> {
    let frame_interval = Duration::from_millis((1000 / config.ui.animation_fps.max(1) as u64).max(1));
    let bounce = Duration::from_millis(config.animation.bounce_duration_ms);

    let mut screen = ListScreen::new(notes, &config.animation);
    let mut input = SearchInput::new(config.ui.keyboard_height_px);
    let mut query_typed = false;

    // The pull is released on the first frame and the list springs back to 0
    let mut list_offset = TimedValue::new(options.pull, config.animation.easing);
    if options.pull != 0.0 {
        screen.on_scroll(options.pull);
        screen.on_drag_release(options.pull, start);
        list_offset.animate_to(0.0, bounce, start);
    }
    if options.tap {
        screen.on_search_tap(start);
    }

    let cancel_at = options.cancel_at_ms.map(|ms| start + Duration::from_millis(ms));
    let mut cancelled = false;

    (0..options.frames)
        .map(|i| {
            let now = start + frame_interval * i;

            if let Some(at) = cancel_at {
                if !cancelled && now >= at {
                    screen.on_cancel(now);
                    cancelled = true;
                }
            }

            screen.on_scroll(list_offset.sample(now));
            let frame = screen.tick(now);

            let target: &mut dyn FocusTarget = &mut input;
            screen.apply_focus_intents(Some(target));
            if let Some(height) = input.take_keyboard_change() {
                screen.on_keyboard_change(height);
            }

            if let Some(query) = &options.query {
                if input.is_focused() && !query_typed {
                    screen.on_query_change(query);
                    query_typed = true;
                }
            }
            if frame.empty_state.is_some() {
                screen.on_empty_layout(now);
            }

            frame
        })
        .collect()
}
