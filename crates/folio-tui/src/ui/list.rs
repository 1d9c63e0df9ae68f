//! Book list and "show more" button rendering.

use crate::state::{AppState, NO_RESULTS_MESSAGE};
use crate::ui::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState, palette: &Palette) {
    let viewport_height = area.height.saturating_sub(2) as usize; // borders
    app.ui.list_area = area;
    app.ui.viewport_height = viewport_height.max(1);
    app.ui.update_scroll(app.list.selected_index);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(
            " books ({}/{}) ",
            app.store.rendered(),
            app.store.match_count()
        ))
        .style(Style::default().bg(palette.surface));

    if app.list.message_visible {
        let message = Paragraph::new(Line::styled(
            NO_RESULTS_MESSAGE,
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(message, area);
        return;
    }

    let items = &app.list.items;
    let selected = app.list.selected_index;
    let start = app.ui.scroll_offset.min(items.len());
    let end = (start + viewport_height).min(items.len());

    // Marker, spaces and the " · " separator.
    let title_budget = (area.width.saturating_sub(4) as usize) * 3 / 5;

    let rows: Vec<ListItem> = items[start..end]
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = start + i == selected;
            let marker = if is_selected { "▸" } else { " " };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(crate::ui::PRIMARY)),
                Span::raw(" "),
                Span::styled("▣ ", Style::default().fg(palette.text_muted)),
                Span::styled(
                    truncate(&item.title, title_budget),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" · ", Style::default().fg(palette.text_muted)),
                Span::styled(&item.author, Style::default().fg(palette.text_secondary)),
            ]);

            let style = if is_selected {
                Style::default().bg(palette.elevated)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(rows).block(block), area);
}

pub fn render_button(f: &mut Frame, area: Rect, app: &mut AppState, palette: &Palette) {
    app.ui.button_area = area;
    let button = &app.show_more;

    let (border, text) = if button.disabled {
        (palette.border, palette.text_muted)
    } else {
        (crate::ui::PRIMARY, palette.text)
    };

    let label = Line::from(vec![
        Span::styled("Show more", Style::default().fg(text)),
        Span::styled(
            format!(" ({})", button.remaining),
            Style::default().fg(crate::ui::ACCENT),
        ),
    ]);

    let widget = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(palette.surface)),
        );

    f.render_widget(widget, area);
}

/// Cut `text` to `max_width` display columns, ending in `…` when shortened.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("Emma", 10), "Emma");
        assert_eq!(truncate("Pride and Prejudice", 8), "Pride a…");
        assert_eq!(truncate("ワンピース", 5), "ワン…");
        assert_eq!(truncate("abc", 0), "");
    }
}
