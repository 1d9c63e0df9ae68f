//! Form controls for the search and settings overlays.

use folio_core::filter::ANY;
use folio_core::{NameIndex, ThemeName};
use std::collections::BTreeMap;
use tui_input::{Input, InputRequest};

/// Field name to value pairs emitted by a form submission.
pub type FormData = BTreeMap<String, String>;

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A dropdown: an ordered list of options with one selected.
#[derive(Debug, Clone, Default)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: usize,
}

impl SelectControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an `"any"` option labelled `default_label`, then every index entry.
    pub fn populate(&mut self, default_label: &str, index: &NameIndex) {
        self.push(ANY, default_label);
        for (id, name) in index.iter() {
            self.push(id, name);
        }
    }

    pub fn push(&mut self, value: impl Into<String>, label: impl Into<String>) {
        self.options.push(SelectOption {
            value: value.into(),
            label: label.into(),
        });
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }

    /// Current value, `""` for an empty control.
    pub fn value(&self) -> &str {
        self.selected().map(|o| o.value.as_str()).unwrap_or("")
    }

    pub fn label(&self) -> &str {
        self.selected().map(|o| o.label.as_str()).unwrap_or("")
    }

    /// Select the option carrying `value`. Returns false when there is none.
    pub fn set_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(pos) => {
                self.selected = pos;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = if self.selected == 0 {
                self.options.len() - 1
            } else {
                self.selected - 1
            };
        }
    }
}

/// Focusable fields of the search form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Genre,
    Author,
}

impl SearchField {
    pub fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Genre,
            SearchField::Genre => SearchField::Author,
            SearchField::Author => SearchField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Genre => SearchField::Title,
            SearchField::Author => SearchField::Genre,
        }
    }
}

/// The search form: a title text field plus genre and author selects.
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub title: Input,
    pub genre: SelectControl,
    pub author: SelectControl,
    pub focus: SearchField,
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            title: Input::default(),
            genre: SelectControl::new(),
            author: SelectControl::new(),
            focus: SearchField::Title,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Forward an edit to the title field.
    pub fn edit_title(&mut self, request: InputRequest) {
        let _ = self.title.handle(request);
    }

    /// Step the focused select; a no-op on the title field.
    pub fn cycle_focused(&mut self, forward: bool) {
        let select = match self.focus {
            SearchField::Title => return,
            SearchField::Genre => &mut self.genre,
            SearchField::Author => &mut self.author,
        };
        if forward {
            select.select_next();
        } else {
            select.select_previous();
        }
    }

    pub fn form_data(&self) -> FormData {
        FormData::from([
            ("title".to_string(), self.title.value().to_string()),
            ("genre".to_string(), self.genre.value().to_string()),
            ("author".to_string(), self.author.value().to_string()),
        ])
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

/// The settings form: a single theme select.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub theme: SelectControl,
}

impl SettingsForm {
    pub fn new() -> Self {
        let mut theme = SelectControl::new();
        for name in ThemeName::ALL {
            let label = match name {
                ThemeName::Day => "Day",
                ThemeName::Night => "Night",
            };
            theme.push(name.as_str(), label);
        }
        Self { theme }
    }

    pub fn form_data(&self) -> FormData {
        FormData::from([("theme".to_string(), self.theme.value().to_string())])
    }
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_puts_wildcard_first() {
        let index: NameIndex = [("g2", "Poetry"), ("g1", "Drama")].into_iter().collect();
        let mut select = SelectControl::new();
        select.populate("All Genres", &index);

        let values: Vec<&str> = select.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["any", "g2", "g1"]);
        assert_eq!(select.value(), "any");
        assert_eq!(select.label(), "All Genres");
    }

    #[test]
    fn select_wraps_both_ways() {
        let mut select = SelectControl::new();
        select.push("a", "A");
        select.push("b", "B");
        select.select_previous();
        assert_eq!(select.value(), "b");
        select.select_next();
        assert_eq!(select.value(), "a");
        assert!(!select.set_value("zzz"));
        assert!(select.set_value("b"));
        assert_eq!(select.value(), "b");
    }

    #[test]
    fn empty_select_has_blank_value() {
        let mut select = SelectControl::new();
        select.select_next();
        assert_eq!(select.value(), "");
    }

    #[test]
    fn search_form_emits_all_fields() {
        let mut form = SearchForm::new();
        form.genre.populate("All Genres", &NameIndex::new());
        form.author.populate("All Authors", &NameIndex::new());
        for c in "sea".chars() {
            form.edit_title(InputRequest::InsertChar(c));
        }

        let data = form.form_data();
        assert_eq!(data.get("title").map(String::as_str), Some("sea"));
        assert_eq!(data.get("genre").map(String::as_str), Some("any"));
        assert_eq!(data.get("author").map(String::as_str), Some("any"));
    }

    #[test]
    fn focus_cycles_through_fields() {
        let mut form = SearchForm::new();
        form.focus_next();
        assert_eq!(form.focus, SearchField::Genre);
        form.focus_previous();
        form.focus_previous();
        assert_eq!(form.focus, SearchField::Author);
    }

    #[test]
    fn settings_form_reports_theme() {
        let mut form = SettingsForm::new();
        assert_eq!(form.form_data().get("theme").map(String::as_str), Some("day"));
        form.theme.set_value("night");
        assert_eq!(form.form_data().get("theme").map(String::as_str), Some("night"));
    }
}
