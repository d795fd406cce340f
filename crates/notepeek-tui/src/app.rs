use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use notepeek_core::{AppConfig, FocusTarget, ListScreen, NoteList, ScreenFrame};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::input::Action;
use crate::metrics::CellMetrics;
use crate::scroll::ListViewport;
use crate::search_input::SearchInput;
use crate::theme::Theme;

/// Rows each note occupies: title, description, separator
pub const NOTE_ROWS: u16 = 3;

/// Pixels moved per scroll key press or wheel notch
pub const SCROLL_STEP_PX: f64 = 16.0;

/// Rows taken by `count` notes, saturating at the largest terminal height
pub fn list_rows(count: usize) -> u16 {
    NOTE_ROWS.saturating_mul(u16::try_from(count).unwrap_or(u16::MAX))
}

/// Screen regions from the last draw, used for mouse hit-testing
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRects {
    pub header: Rect,
    pub list: Rect,
    pub status: Rect,
    /// Search container, clickable while visible
    pub search_hit: Rect,
    /// Cancel button, clickable while visible
    pub cancel_hit: Rect,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub screen: ListScreen,
    pub viewport: ListViewport,
    pub input: SearchInput,
    /// Frame evaluated by the last `tick()`
    pub frame: ScreenFrame,
    pub metrics: CellMetrics,
    pub layout: LayoutRects,
    pub pending_key: Option<char>,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, notes: NoteList) -> Self {
        let metrics = CellMetrics::new(config.ui.px_per_col, config.ui.px_per_row);
        let mut screen = ListScreen::new(notes, &config.animation);
        let frame = screen.tick(Instant::now());
        Self {
            viewport: ListViewport::new(&config.animation, metrics.px_per_row),
            input: SearchInput::new(config.ui.keyboard_height_px),
            screen,
            frame,
            metrics,
            layout: LayoutRects::default(),
            pending_key: None,
            should_quit: false,
            status_message: None,
            theme,
            config,
        }
    }

    /// Whether typed characters go to the search query
    pub fn is_input_mode(&self) -> bool {
        self.input.is_focused()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    fn content_height_px(&self) -> f64 {
        self.metrics.rows_to_px(list_rows(self.screen.visible().len()))
    }

    /// Advance scrolling and animations to `now`, then hand focus changes to the input
    pub fn tick(&mut self, now: Instant) {
        self.viewport.set_bounces(self.screen.bounces_enabled());
        self.viewport.set_bounds(
            self.content_height_px(),
            self.metrics.rows_to_px(self.layout.list.height),
        );

        let update = self.viewport.update(now);
        self.screen.on_scroll(update.offset);
        if let Some(offset) = update.released {
            self.screen.on_drag_release(offset, now);
        }

        self.frame = self.screen.tick(now);

        let target: &mut dyn FocusTarget = &mut self.input;
        self.screen.apply_focus_intents(Some(target));
        if let Some(height) = self.input.take_keyboard_change() {
            debug!(height, "Keyboard height changed");
            self.screen.on_keyboard_change(height);
        }
    }

    /// Called after each draw; the empty view counts as laid out once drawn
    pub fn after_draw(&mut self, now: Instant) {
        if self.frame.empty_state.is_some() {
            self.screen.on_empty_layout(now);
        }
    }

    /// Check if we need high frame rate for the next iteration
    pub fn needs_fast_update(&self) -> bool {
        self.screen.is_animating() || self.viewport.needs_update()
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        // Clear pending key on any action except PendingG
        if action != Action::PendingG && action != Action::JumpToTop {
            self.clear_pending_key();
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ScrollDown => {
                self.viewport.scroll_by(SCROLL_STEP_PX, now);
            }
            Action::ScrollUp => {
                self.viewport.scroll_by(-SCROLL_STEP_PX, now);
            }
            Action::JumpToTop => {
                self.clear_pending_key();
                self.viewport.jump_to_top(now);
            }
            Action::JumpToBottom => {
                self.viewport.jump_to_bottom(now);
            }
            Action::PendingG => {
                self.pending_key = Some('g');
            }
            Action::Search => {
                self.clear_status();
                self.screen.on_search_tap(now);
            }
            Action::Cancel => {
                self.screen.on_cancel(now);
            }
            Action::InputChar(c) => {
                let mut query = self.screen.query().to_string();
                query.push(c);
                self.screen.on_query_change(&query);
            }
            Action::Backspace => {
                let mut query = self.screen.query().to_string();
                if query.pop().is_some() {
                    self.screen.on_query_change(&query);
                }
            }
            Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        let position = Position::new(event.column, event.row);
        let cancel_visible = self.frame.header.cancel_button.opacity > 0.0;
        let search_visible = self.frame.header.search_container.opacity > 0.0;

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if cancel_visible && self.layout.cancel_hit.contains(position) {
                    self.handle_action(Action::Cancel, now);
                } else if search_visible && self.layout.search_hit.contains(position) {
                    self.handle_action(Action::Search, now);
                } else if self.layout.list.contains(position) {
                    self.viewport.begin_drag(event.row);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.viewport.is_dragging() {
                    let offset = self.viewport.drag_to(event.row);
                    self.screen.on_scroll(offset);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(offset) = self.viewport.end_drag(now) {
                    self.screen.on_drag_release(offset, now);
                }
            }
            MouseEventKind::ScrollDown => {
                self.viewport.scroll_by(SCROLL_STEP_PX, now);
            }
            MouseEventKind::ScrollUp => {
                self.viewport.scroll_by(-SCROLL_STEP_PX, now);
            }
            _ => {}
        }
    }
}
