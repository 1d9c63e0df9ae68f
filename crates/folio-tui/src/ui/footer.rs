//! Footer / key hint rendering.

use crate::state::AppState;
use crate::ui::{self, Palette};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let hints: &[(&str, &str)] = if app.detail.overlay.is_open() {
        &[("Esc:", " close  ")]
    } else if app.settings.overlay.is_open() {
        &[("←/→:", " theme  "), ("↵:", " save  "), ("Esc:", " cancel  ")]
    } else if app.search.overlay.is_open() {
        &[
            ("Tab:", " field  "),
            ("←/→:", " choose  "),
            ("↵:", " search  "),
            ("Esc:", " cancel  "),
        ]
    } else {
        &[
            ("j/k:", " ↑↓  "),
            ("↵:", " details  "),
            ("m:", " show more  "),
            ("/:", " search  "),
            ("s:", " settings  "),
            ("q:", " quit"),
        ]
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Style::default().fg(ui::PRIMARY)),
                Span::styled(*action, Style::default().fg(palette.text_secondary)),
            ]
        })
        .collect();

    let hints = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.surface));
    f.render_widget(hints, area);
}
