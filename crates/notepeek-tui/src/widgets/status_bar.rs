use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let screen = &app.screen;

        let mode_str = if app.is_input_mode() {
            "SEARCH"
        } else if app.frame.activation.progress > 0.0 {
            "OPENING"
        } else {
            "LIST"
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else if screen.query().is_empty() {
            format!(" {} | Notes: {}", mode_str, screen.source().len())
        } else {
            format!(
                " {} | Notes: {}/{} | \"{}\"",
                mode_str,
                screen.visible().len(),
                screen.source().len(),
                screen.query()
            )
        };

        let help_hint = if app.is_input_mode() {
            " Esc:cancel ↑/↓:scroll "
        } else {
            " q:quit j/k:scroll /:search "
        };
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.headline).bg(theme.surface)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.surface)),
            Span::styled(help_hint, Style::default().fg(theme.subheadline).bg(theme.surface)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
