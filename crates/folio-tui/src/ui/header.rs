//! Header rendering.

use crate::state::AppState;
use crate::ui::{self, Palette};
use folio_core::build_info::BUILD_INFO;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let store = &app.store;
    let sep = Span::styled(" | ", Style::default().fg(palette.text_muted));

    let count = if store.match_count() == store.catalog().books.len() {
        format!("{} books", format_count(store.match_count()))
    } else {
        format!(
            "{} of {} books",
            format_count(store.match_count()),
            format_count(store.catalog().books.len())
        )
    };

    let spans = vec![
        Span::styled(
            "folio",
            Style::default()
                .fg(ui::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled("⌕ search ", Style::default().fg(ui::ACCENT)),
        Span::styled("/", Style::default().fg(palette.text_secondary)),
        sep.clone(),
        Span::styled("⚙ settings ", Style::default().fg(ui::ACCENT)),
        Span::styled("s", Style::default().fg(palette.text_secondary)),
        sep.clone(),
        Span::styled("≡ ", Style::default().fg(palette.text_secondary)),
        Span::styled(count, Style::default().fg(palette.text_secondary)),
        sep,
        Span::styled(
            format!("◐ {}", app.theme.active),
            Style::default().fg(palette.text_secondary),
        ),
    ];

    let build_info = BUILD_INFO.compact();
    let build_width = (build_info.len() as u16).min(area.width.saturating_sub(2));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);

    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(build_width)])
        .split(inner);

    let left = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.surface));
    let right = Paragraph::new(build_info)
        .style(
            Style::default()
                .fg(palette.text_muted)
                .bg(palette.surface)
                .add_modifier(Modifier::DIM),
        )
        .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (count, ch) in s.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
