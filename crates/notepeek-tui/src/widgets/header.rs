use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use super::{fill, put, MIN_VISIBLE_OPACITY};
use crate::app::App;

const MENU_ICON: &str = "☰";
const SEARCH_ICON: &str = "⌕";
const TITLE: &str = "NOTES";
const PLACEHOLDER: &str = "Search Here";
const CANCEL: &str = "Cancel";

/// Row of the header content inside its 3-row area
const CONTENT_ROW: i32 = 1;
const LEFT_PAD: i32 = 2;
/// Width of the search container at scale 1
const CONTAINER_BASE_COLS: f64 = 4.0;
/// Circle travel that reveals the whole container
const CIRCLE_TRAVEL_PX: f64 = 50.0;

/// Clickable regions drawn this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderHits {
    pub search: Rect,
    pub cancel: Rect,
}

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) -> HeaderHits {
        let theme = &app.theme;
        let metrics = app.metrics;
        let styles = app.frame.header;
        let buf = frame.buffer_mut();
        let mut hits = HeaderHits::default();

        for y in 0..area.height as i32 {
            fill(buf, area, 0, y, area.width as i32, Style::default().bg(theme.primary));
        }
        let on_bg = |fg, opacity| Style::default().fg(theme.fade(fg, opacity)).bg(theme.primary);

        // Menu icon slides out to the left
        let menu = styles.menu_icon;
        if menu.opacity >= MIN_VISIBLE_OPACITY {
            put(
                buf,
                area,
                LEFT_PAD + metrics.cols(menu.translate_x),
                CONTENT_ROW + metrics.rows(menu.translate_y),
                MENU_ICON,
                on_bg(theme.tertiary, menu.opacity),
            );
        }

        // Title drops away and fades out
        let title = styles.title;
        if title.opacity >= MIN_VISIBLE_OPACITY {
            put(
                buf,
                area,
                LEFT_PAD + 3 + metrics.cols(title.translate_x),
                CONTENT_ROW + metrics.rows(title.translate_y),
                TITLE,
                on_bg(theme.subheadline, title.opacity).add_modifier(Modifier::BOLD),
            );
        }

        // Search bar fades in across most of the header
        let bar_width = (area.width as i32 * 4 / 5).max(1);
        let bar = styles.search_bar;
        if bar.opacity >= MIN_VISIBLE_OPACITY {
            let bar_bg = theme.fade(theme.input_background, bar.opacity);
            fill(buf, area, LEFT_PAD, CONTENT_ROW, bar_width, Style::default().bg(bar_bg));

            let query = app.screen.query();
            let (text, fg) = if query.is_empty() {
                (PLACEHOLDER.to_string(), theme.subheadline)
            } else {
                (query.to_string(), theme.headline)
            };
            let text = if app.is_input_mode() { format!("{}▏", text) } else { text };
            put(
                buf,
                area,
                LEFT_PAD + 1,
                CONTENT_ROW,
                &text,
                Style::default().fg(theme.fade(fg, bar.opacity)).bg(bar_bg),
            );
        }

        // Search container: right-aligned, grows with overscroll, the circle fills it
        let container = styles.search_container;
        if container.opacity >= MIN_VISIBLE_OPACITY {
            let width = ((CONTAINER_BASE_COLS * container.scale).round() as i32).max(3);
            let right = area.width as i32 - LEFT_PAD + metrics.cols(container.translate_x);
            let left = right - width;
            let row = CONTENT_ROW + metrics.rows(container.translate_y);

            let reveal = (-styles.search_circle.translate_y / CIRCLE_TRAVEL_PX).clamp(0.0, 1.0);
            let revealed = (width as f64 * reveal).round() as i32;

            let filled = Style::default().bg(theme.fade(theme.secondary, container.opacity));
            let circle = Style::default().bg(theme.fade(theme.circle, container.opacity));
            let covered = fill(buf, area, left, row, revealed, filled);
            let rest = fill(buf, area, left + revealed, row, width - revealed, circle);

            let icon_x = left + width / 2;
            let icon_bg = if icon_x < left + revealed { filled } else { circle };
            put(
                buf,
                area,
                icon_x,
                row,
                SEARCH_ICON,
                icon_bg.fg(theme.fade(theme.headline, container.opacity)),
            );

            if let Some(rect) = match (covered, rest) {
                (Some(a), Some(b)) => Some(a.union(b)),
                (a, b) => a.or(b),
            } {
                hits.search = rect;
            }
        }

        // Cancel rises into place once search is nearly active
        let cancel = styles.cancel_button;
        if cancel.opacity >= MIN_VISIBLE_OPACITY {
            if let Some(rect) = put(
                buf,
                area,
                LEFT_PAD + bar_width + 2,
                CONTENT_ROW + metrics.rows(cancel.translate_y),
                CANCEL,
                on_bg(theme.subheadline, cancel.opacity),
            ) {
                hits.cancel = rect;
            }
        }

        hits
    }
}
