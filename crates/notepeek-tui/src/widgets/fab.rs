use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use super::put;
use crate::app::App;

const LABEL: &str = " ✎ New ";
/// Columns between the button and the right edge
const RIGHT_MARGIN: i32 = 2;
/// Rows between the button and the bottom edge
const BOTTOM_MARGIN: i32 = 1;

/// Floating action button, lifted above the keyboard while the list is empty
pub struct FabWidget;

impl FabWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let style = app.frame.fab;

        let x = area.width as i32 - RIGHT_MARGIN - LABEL.chars().count() as i32
            + app.metrics.cols(style.translate_x);
        let y = area.height as i32 - 1 - BOTTOM_MARGIN + app.metrics.rows(style.translate_y);

        put(
            frame.buffer_mut(),
            area,
            x,
            y,
            LABEL,
            Style::default()
                .fg(theme.primary)
                .bg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        );
    }
}
