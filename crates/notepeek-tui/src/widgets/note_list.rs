use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use notepeek_core::header::SEARCH_ACTIVATION_THRESHOLD_Y;
use unicode_width::UnicodeWidthStr;

use super::{centered_x, fill, put};
use crate::app::{App, NOTE_ROWS};

const PULL_HINT: &str = "↓ Pull to search";
const RELEASE_HINT: &str = "↑ Release to search";

pub struct NoteListWidget;

impl NoteListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let buf = frame.buffer_mut();
        let background = Style::default().bg(theme.primary);

        for y in 0..area.height as i32 {
            fill(buf, area, 0, y, area.width as i32, background);
        }

        // Negative offsets pull the whole list down
        let scroll_y = app.frame.scroll_y;
        let offset_rows = app.metrics.rows(scroll_y);
        let query = app.screen.query();
        let rule = "─".repeat(area.width.saturating_sub(4) as usize);

        for (i, note) in app.screen.visible().iter().enumerate() {
            let top = i as i32 * NOTE_ROWS as i32 - offset_rows;
            if top >= area.height as i32 {
                break;
            }
            let title_style = background.fg(theme.headline).add_modifier(Modifier::BOLD);
            put(buf, area, 2, top, &note.title, title_style);
            if !query.is_empty() {
                if let Some(start) = note.title.find(query) {
                    let x = 2 + note.title[..start].width() as i32;
                    put(buf, area, x, top, query, title_style.fg(theme.highlight));
                }
            }
            put(buf, area, 2, top + 1, &note.description, background.fg(theme.subheadline));
            put(buf, area, 2, top + 2, &rule, background.fg(theme.tertiary));
        }

        // Hint in the gap opened above the first note
        if offset_rows < 0 && app.frame.bounces {
            let hint = if scroll_y < SEARCH_ACTIVATION_THRESHOLD_Y {
                RELEASE_HINT
            } else {
                PULL_HINT
            };
            let row = (-offset_rows - 1) / 2;
            put(buf, area, centered_x(area, hint), row, hint, background.fg(theme.tertiary));
        }
    }
}
