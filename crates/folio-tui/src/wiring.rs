//! Control-to-handler registry.
//!
//! Every interactive control has a stable name. Input handling translates
//! keys and clicks into `(Control, Payload)` pairs and hands them to
//! [`Wiring::dispatch`], which runs the handler registered for that control.

use crate::state::{AppState, FormData};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Named interactive controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    HeaderSearch,
    HeaderSettings,
    SearchCancel,
    SettingsCancel,
    SearchForm,
    SettingsForm,
    ListButton,
    ListItems,
    ListClose,
}

impl Control {
    pub const ALL: [Control; 9] = [
        Control::HeaderSearch,
        Control::HeaderSettings,
        Control::SearchCancel,
        Control::SettingsCancel,
        Control::SearchForm,
        Control::SettingsForm,
        Control::ListButton,
        Control::ListItems,
        Control::ListClose,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Control::HeaderSearch => "header-search",
            Control::HeaderSettings => "header-settings",
            Control::SearchCancel => "search-cancel",
            Control::SettingsCancel => "settings-cancel",
            Control::SearchForm => "search-form",
            Control::SettingsForm => "settings-form",
            Control::ListButton => "list-button",
            Control::ListItems => "list-items",
            Control::ListClose => "list-close",
        }
    }
}

/// Data carried by an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Plain activation
    Click,
    /// Form submission
    Submit(FormData),
    /// Activation of a list item, by book id
    Preview(String),
}

pub type Handler = fn(&mut AppState, Payload);

/// Registry of one handler per control.
#[derive(Default)]
pub struct Wiring {
    handlers: HashMap<Control, Handler>,
}

impl Wiring {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handlers for every control of the catalog browser.
    pub fn standard() -> Self {
        let mut wiring = Self::new();
        wiring.on(Control::HeaderSearch, |app, _| app.open_search());
        wiring.on(Control::HeaderSettings, |app, _| app.open_settings());
        wiring.on(Control::SearchCancel, |app, _| app.close_search());
        wiring.on(Control::SettingsCancel, |app, _| app.close_settings());
        wiring.on(Control::SearchForm, |app, payload| {
            if let Payload::Submit(data) = payload {
                app.submit_search(&data);
            }
        });
        wiring.on(Control::SettingsForm, |app, payload| {
            if let Payload::Submit(data) = payload {
                app.submit_settings(&data);
            }
        });
        wiring.on(Control::ListButton, |app, _| app.show_more());
        wiring.on(Control::ListItems, |app, payload| {
            if let Payload::Preview(id) = payload {
                app.select_preview(&id);
            }
        });
        wiring.on(Control::ListClose, |app, _| app.close_detail());
        wiring
    }

    /// Register `handler` for `control`, replacing any previous one.
    pub fn on(&mut self, control: Control, handler: Handler) {
        self.handlers.insert(control, handler);
    }

    pub fn is_wired(&self, control: Control) -> bool {
        self.handlers.contains_key(&control)
    }

    /// Run the handler for `control`. Returns false when none is registered.
    pub fn dispatch(&self, app: &mut AppState, control: Control, payload: Payload) -> bool {
        match self.handlers.get(&control) {
            Some(handler) => {
                debug!(control = control.name(), ?payload, "dispatch");
                handler(app, payload);
                true
            }
            None => {
                warn!(control = control.name(), "no handler registered");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Catalog, CatalogStore, ThemeName};

    fn app() -> AppState {
        let catalog = Catalog::sample().unwrap();
        AppState::bootstrap(CatalogStore::new(catalog, 4), ThemeName::Day)
    }

    #[test]
    fn standard_wiring_covers_every_control() {
        let wiring = Wiring::standard();
        for control in Control::ALL {
            assert!(wiring.is_wired(control), "{} is not wired", control.name());
        }
    }

    #[test]
    fn unwired_control_is_reported() {
        let mut app = app();
        let wiring = Wiring::new();
        assert!(!wiring.dispatch(&mut app, Control::HeaderSearch, Payload::Click));
        assert!(!app.search.overlay.is_open());
    }

    #[test]
    fn header_and_cancel_toggle_overlays() {
        let mut app = app();
        let wiring = Wiring::standard();
        wiring.dispatch(&mut app, Control::HeaderSettings, Payload::Click);
        assert!(app.settings.overlay.is_open());
        wiring.dispatch(&mut app, Control::SettingsCancel, Payload::Click);
        assert!(!app.settings.overlay.is_open());
    }

    #[test]
    fn form_handlers_ignore_wrong_payload() {
        let mut app = app();
        let wiring = Wiring::standard();
        wiring.dispatch(&mut app, Control::HeaderSearch, Payload::Click);
        wiring.dispatch(&mut app, Control::SearchForm, Payload::Click);
        assert!(app.search.overlay.is_open());
    }

    #[test]
    fn later_registration_replaces_handler() {
        let mut app = app();
        let mut wiring = Wiring::standard();
        wiring.on(Control::HeaderSearch, |app, _| app.quit());
        wiring.dispatch(&mut app, Control::HeaderSearch, Payload::Click);
        assert!(app.should_quit());
        assert!(!app.search.overlay.is_open());
    }
}
