//! UI components and rendering.

pub mod footer;
pub mod header;
pub mod layout;
pub mod list;
pub mod overlays;
pub mod theme;

pub use theme::*;

use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Draw the whole screen: header, list, show-more button, footer, then any open overlays.
pub fn render(f: &mut Frame, app: &mut AppState) {
    let palette = Palette::from_tokens(app.theme.tokens);

    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.text)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(3), // Show more
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    header::render(f, chunks[0], app, &palette);
    list::render(f, chunks[1], app, &palette);
    list::render_button(f, chunks[2], app, &palette);
    footer::render(f, chunks[3], app, &palette);

    if app.search.overlay.is_open() {
        overlays::render_search(f, app, &palette);
    }
    if app.settings.overlay.is_open() {
        overlays::render_settings(f, app, &palette);
    }
    if app.detail.overlay.is_open() {
        overlays::render_detail(f, app, &palette);
    }
}
