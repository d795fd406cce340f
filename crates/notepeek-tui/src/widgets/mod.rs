mod empty_state;
mod fab;
mod header;
mod keyboard;
mod note_list;
mod status_bar;

pub use empty_state::EmptyStateWidget;
pub use fab::FabWidget;
pub use header::{HeaderHits, HeaderWidget};
pub use keyboard::KeyboardWidget;
pub use note_list::NoteListWidget;
pub use status_bar::StatusBarWidget;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Elements fainter than this are not drawn
pub(crate) const MIN_VISIBLE_OPACITY: f64 = 0.05;

/// Write `text` at a signed offset inside `area`, clipping anything outside it
///
/// Returns the clipped rect actually covered, if any.
pub(crate) fn put(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, style: Style) -> Option<Rect> {
    if y < 0 || y >= area.height as i32 {
        return None;
    }
    let row = area.y + y as u16;
    let mut col = x;
    let mut covered: Option<(u16, u16)> = None;

    for ch in text.chars() {
        let width = ch.width().unwrap_or(0) as i32;
        if width == 0 {
            continue;
        }
        if col >= 0 && col + width <= area.width as i32 {
            let cell_x = area.x + col as u16;
            buf[(cell_x, row)].set_char(ch).set_style(style);
            covered = Some(match covered {
                Some((start, _)) => (start, cell_x + width as u16),
                None => (cell_x, cell_x + width as u16),
            });
        }
        col += width;
    }

    covered.map(|(start, end)| Rect::new(start, row, end - start, 1))
}

/// Fill a row segment with a background style
pub(crate) fn fill(buf: &mut Buffer, area: Rect, x: i32, y: i32, width: i32, style: Style) -> Option<Rect> {
    put(buf, area, x, y, &" ".repeat(width.max(0) as usize), style)
}

/// Column that centers `text` in `area`
pub(crate) fn centered_x(area: Rect, text: &str) -> i32 {
    (area.width as i32 - text.width() as i32) / 2
}
