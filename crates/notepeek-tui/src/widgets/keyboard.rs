use ratatui::{layout::Rect, style::Style, Frame};

use super::{centered_x, fill, put};
use crate::app::App;

const KEY_ROWS: [&str; 3] = ["q w e r t y u i o p", "a s d f g h j k l", "z x c v b n m ⌫"];

/// Soft keyboard tray shown while the search input has focus
pub struct KeyboardWidget;

impl KeyboardWidget {
    /// Rows the tray covers at the bottom of `area`
    pub fn height(area: Rect, app: &App) -> u16 {
        let rows = app.metrics.rows(app.screen.keyboard_height()).max(0);
        u16::try_from(rows).unwrap_or(u16::MAX).min(area.height)
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let height = Self::height(area, app);
        if height == 0 {
            return;
        }

        let theme = &app.theme;
        let tray = Rect::new(area.x, area.bottom() - height, area.width, height);
        let buf = frame.buffer_mut();
        let background = Style::default().bg(theme.surface);

        for y in 0..height as i32 {
            fill(buf, tray, 0, y, tray.width as i32, background);
        }
        for (i, keys) in KEY_ROWS.iter().enumerate() {
            let y = 1 + i as i32;
            put(buf, tray, centered_x(tray, keys), y, keys, background.fg(theme.subheadline));
        }
    }
}
