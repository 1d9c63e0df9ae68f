//! Main application loop and event handling.

use crate::state::{AppState, SearchField};
use crate::ui;
use crate::wiring::{Control, Payload, Wiring};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tui_input::InputRequest;

/// Run the TUI application
pub fn run(app: &mut AppState, wiring: &Wiring) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let res = run_app(&mut terminal, app, wiring);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    wiring: &Wiring,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => handle_key_event(app, wiring, key),
                Event::Mouse(mouse) => handle_mouse_event(app, wiring, mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Route a key to the top-most open overlay, else to the list.
pub fn handle_key_event(app: &mut AppState, wiring: &Wiring, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.detail.overlay.is_open() {
        handle_detail_keys(app, wiring, key.code);
    } else if app.settings.overlay.is_open() {
        handle_settings_keys(app, wiring, key.code);
    } else if app.search.overlay.is_open() {
        handle_search_keys(app, wiring, key.code, key.modifiers);
    } else {
        handle_list_keys(app, wiring, key.code);
    }
}

/// Handle keys while the detail overlay is open
fn handle_detail_keys(app: &mut AppState, wiring: &Wiring, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
        wiring.dispatch(app, Control::ListClose, Payload::Click);
    }
}

/// Handle keys while the settings overlay is open
fn handle_settings_keys(app: &mut AppState, wiring: &Wiring, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            wiring.dispatch(app, Control::SettingsCancel, Payload::Click);
        }
        KeyCode::Enter => {
            let data = app.settings.form.form_data();
            wiring.dispatch(app, Control::SettingsForm, Payload::Submit(data));
        }
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
            app.settings.form.theme.select_previous();
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char(' ') => {
            app.settings.form.theme.select_next();
        }
        _ => {}
    }
}

/// Handle keys while the search overlay is open
fn handle_search_keys(app: &mut AppState, wiring: &Wiring, key: KeyCode, modifiers: KeyModifiers) {
    match key {
        KeyCode::Esc => {
            wiring.dispatch(app, Control::SearchCancel, Payload::Click);
            return;
        }
        // Enter always submits; it never reaches the text field.
        KeyCode::Enter => {
            let data = app.search.form.form_data();
            wiring.dispatch(app, Control::SearchForm, Payload::Submit(data));
            return;
        }
        _ => {}
    }

    let form = &mut app.search.form;
    match key {
        KeyCode::Tab => {
            form.focus_next();
            return;
        }
        KeyCode::BackTab => {
            form.focus_previous();
            return;
        }
        _ => {}
    }

    if form.focus == SearchField::Title {
        let request = match (key, modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(InputRequest::DeleteLine),
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => Some(InputRequest::DeletePrevWord),
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                Some(InputRequest::InsertChar(c))
            }
            (KeyCode::Backspace, _) => Some(InputRequest::DeletePrevChar),
            (KeyCode::Delete, _) => Some(InputRequest::DeleteNextChar),
            (KeyCode::Left, _) => Some(InputRequest::GoToPrevChar),
            (KeyCode::Right, _) => Some(InputRequest::GoToNextChar),
            (KeyCode::Home, _) => Some(InputRequest::GoToStart),
            (KeyCode::End, _) => Some(InputRequest::GoToEnd),
            (KeyCode::Down, _) => {
                form.focus_next();
                None
            }
            _ => None,
        };
        if let Some(request) = request {
            form.edit_title(request);
        }
        return;
    }

    match key {
        KeyCode::Left => form.cycle_focused(false),
        KeyCode::Right | KeyCode::Char(' ') => form.cycle_focused(true),
        KeyCode::Up => form.focus_previous(),
        KeyCode::Down => form.focus_next(),
        _ => {}
    }
}

/// Handle keys on the list when no overlay is open
fn handle_list_keys(app: &mut AppState, wiring: &Wiring, key: KeyCode) {
    match key {
        KeyCode::Char('j') | KeyCode::Down => app.list.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.list.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.list.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.list.select_last(),
        KeyCode::Enter => {
            if let Some(id) = app.selected_id().map(str::to_string) {
                wiring.dispatch(app, Control::ListItems, Payload::Preview(id));
            }
        }
        KeyCode::Char('m') | KeyCode::Char(' ') => {
            wiring.dispatch(app, Control::ListButton, Payload::Click);
        }
        KeyCode::Char('/') => {
            wiring.dispatch(app, Control::HeaderSearch, Payload::Click);
        }
        KeyCode::Char('s') => {
            wiring.dispatch(app, Control::HeaderSettings, Payload::Click);
        }
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Clicks on list rows and the show-more button; wheel scrolls the selection.
pub fn handle_mouse_event(app: &mut AppState, wiring: &Wiring, mouse: MouseEvent) {
    let overlay_open = app.search.overlay.is_open()
        || app.settings.overlay.is_open()
        || app.detail.overlay.is_open();
    if overlay_open {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.ui.is_on_button(mouse.column, mouse.row) {
                wiring.dispatch(app, Control::ListButton, Payload::Click);
                return;
            }

            let Some(index) = app.ui.list_index_at(mouse.column, mouse.row) else {
                return;
            };
            if let Some(id) = app.list.item_id_at(index).map(str::to_string) {
                app.list.selected_index = index;
                wiring.dispatch(app, Control::ListItems, Payload::Preview(id));
            }
        }
        MouseEventKind::ScrollDown => app.list.select_next(),
        MouseEventKind::ScrollUp => app.list.select_previous(),
        _ => {}
    }
}
