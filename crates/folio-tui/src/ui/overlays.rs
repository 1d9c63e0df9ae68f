//! Overlay rendering (search, settings, book detail).

use crate::state::{AppState, SearchField, SelectControl};
use crate::ui::layout::{centered_fixed_rect, centered_rect};
use crate::ui::{self, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TITLE_LABEL: &str = "Title:  ";

pub fn render_search(f: &mut Frame, app: &AppState, palette: &Palette) {
    let root = f.area();
    let width = ((root.width as f32) * 0.6) as u16;
    let width = width.max(40).min(root.width.saturating_sub(2));
    let area = centered_fixed_rect(width, 9, root);
    f.render_widget(Clear, area);

    let block = overlay_block(" search ", palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(1), // Genre
            Constraint::Length(1), // Author
            Constraint::Length(1),
            Constraint::Min(0), // Hints
        ])
        .split(inner);

    let form = &app.search.form;
    let field_width = inner.width.saturating_sub(TITLE_LABEL.len() as u16).max(1) as usize;
    let scroll = form.title.visual_scroll(field_width);
    let title_focused = form.focus == SearchField::Title;

    let title = Paragraph::new(Line::from(vec![
        Span::styled(TITLE_LABEL, label_style(title_focused, palette)),
        Span::styled(form.title.value(), Style::default().fg(palette.text)),
    ]))
    .scroll((0, scroll as u16))
    .style(field_style(title_focused, palette));
    f.render_widget(title, rows[0]);

    f.render_widget(
        select_line("Genre:  ", &form.genre, form.focus == SearchField::Genre, palette),
        rows[2],
    );
    f.render_widget(
        select_line("Author: ", &form.author, form.focus == SearchField::Author, palette),
        rows[3],
    );
    f.render_widget(hint_line("Enter: search   Esc: cancel   Tab: next field", palette), rows[5]);

    if title_focused {
        let cursor = form.title.visual_cursor().saturating_sub(scroll);
        let cursor_x = rows[0].x + TITLE_LABEL.len() as u16 + cursor as u16;
        f.set_cursor_position((cursor_x.min(rows[0].right().saturating_sub(1)), rows[0].y));
    }
}

pub fn render_settings(f: &mut Frame, app: &AppState, palette: &Palette) {
    let area = centered_fixed_rect(44, 6, f.area());
    f.render_widget(Clear, area);

    let block = overlay_block(" settings ", palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    f.render_widget(
        select_line("Theme:  ", &app.settings.form.theme, true, palette),
        rows[0],
    );
    let (dark, light) = app.theme.tokens.css_values();
    f.render_widget(
        Paragraph::new(Line::styled(
            format!("dark {dark}  light {light}"),
            Style::default().fg(palette.text_muted),
        )),
        rows[1],
    );
    f.render_widget(hint_line("Enter: save   Esc: cancel", palette), rows[2]);
}

pub fn render_detail(f: &mut Frame, app: &AppState, palette: &Palette) {
    let content = &app.detail.content;

    // Backdrop: the cover reference, washed out, behind the card.
    let backdrop = centered_rect(80, 80, f.area());
    f.render_widget(Clear, backdrop);
    f.render_widget(
        Paragraph::new(Line::styled(
            content.blur.as_str(),
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::DIM | Modifier::ITALIC),
        ))
        .style(Style::default().bg(palette.elevated)),
        backdrop,
    );

    let area = shrink(backdrop, 3, 2);
    f.render_widget(Clear, area);

    let block = overlay_block(" book ", palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("▣ ", Style::default().fg(ui::ACCENT)),
            Span::styled(
                content.image.as_str(),
                Style::default()
                    .fg(palette.text_secondary)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::raw(""),
        Line::styled(
            content.title.as_str(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            content.subtitle.as_str(),
            Style::default().fg(palette.text_secondary),
        ),
        Line::raw(""),
        Line::styled(content.description.as_str(), Style::default().fg(palette.text)),
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(palette.surface)),
        rows[0],
    );
    f.render_widget(hint_line("Esc: close", palette), rows[1]);
}

fn overlay_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui::PRIMARY))
        .title(title)
        .style(Style::default().bg(palette.surface).fg(palette.text))
}

fn label_style(focused: bool, palette: &Palette) -> Style {
    if focused {
        Style::default().fg(ui::PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_secondary)
    }
}

fn field_style(focused: bool, palette: &Palette) -> Style {
    if focused {
        Style::default().bg(palette.elevated)
    } else {
        Style::default().bg(palette.surface)
    }
}

fn select_line<'a>(
    label: &'a str,
    select: &'a SelectControl,
    focused: bool,
    palette: &Palette,
) -> Paragraph<'a> {
    let arrows = if focused { ui::PRIMARY } else { palette.text_muted };
    Paragraph::new(Line::from(vec![
        Span::styled(label, label_style(focused, palette)),
        Span::styled("‹ ", Style::default().fg(arrows)),
        Span::styled(select.label(), Style::default().fg(palette.text)),
        Span::styled(" ›", Style::default().fg(arrows)),
    ]))
    .style(field_style(focused, palette))
}

fn hint_line<'a>(text: &'a str, palette: &Palette) -> Paragraph<'a> {
    Paragraph::new(Line::styled(
        text,
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::ITALIC),
    ))
}

fn shrink(r: Rect, horizontal: u16, vertical: u16) -> Rect {
    let dx = horizontal.min(r.width / 2);
    let dy = vertical.min(r.height / 2);
    Rect {
        x: r.x + dx,
        y: r.y + dy,
        width: r.width - dx * 2,
        height: r.height - dy * 2,
    }
}
