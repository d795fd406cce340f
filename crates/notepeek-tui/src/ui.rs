//! Screen layout and draw order

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::widgets::{
    EmptyStateWidget, FabWidget, HeaderWidget, KeyboardWidget, NoteListWidget, StatusBarWidget,
};

/// Header rows; the animated content sits on the middle one
pub const HEADER_HEIGHT: u16 = 3;

/// Draw the whole screen and record the regions used for mouse hit-testing
pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Main layout: header + list + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);
    let (header, body, status) = (main_layout[0], main_layout[1], main_layout[2]);

    NoteListWidget::render(frame, body, app);
    EmptyStateWidget::render(frame, body, app);
    FabWidget::render(frame, body, app);
    KeyboardWidget::render(frame, body, app);
    // Header last so content pulled past the top never covers it
    let hits = HeaderWidget::render(frame, header, app);
    StatusBarWidget::render(frame, status, app);

    app.layout.header = header;
    app.layout.list = body;
    app.layout.status = status;
    app.layout.search_hit = hits.search;
    app.layout.cancel_hit = hits.cancel;
}
