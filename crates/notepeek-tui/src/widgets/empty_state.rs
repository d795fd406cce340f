use ratatui::{layout::Rect, style::Style, Frame};

use super::{centered_x, put, MIN_VISIBLE_OPACITY};
use crate::app::App;

const MESSAGE: &str = "No Results!";

pub struct EmptyStateWidget;

impl EmptyStateWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(style) = app.frame.empty_state else {
            return;
        };
        if style.opacity < MIN_VISIBLE_OPACITY {
            return;
        }

        let theme = &app.theme;
        let x = centered_x(area, MESSAGE) + app.metrics.cols(style.translate_x);
        let y = area.height as i32 / 3 + app.metrics.rows(style.translate_y);
        put(
            frame.buffer_mut(),
            area,
            x,
            y,
            MESSAGE,
            Style::default()
                .fg(theme.fade(theme.subheadline, style.opacity))
                .bg(theme.primary),
        );
    }
}
