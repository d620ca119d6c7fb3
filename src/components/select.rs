//! Select - single-choice dropdown with keyboard navigation
//!
//! A select either owns its value (uncontrolled, seeded from an optional
//! default) or only displays a value pushed in by its owner (controlled).
//! The mode is fixed at construction:
//!
//! ```ignore
//! // Uncontrolled: the widget remembers the last committed option
//! let mut year = Select::new("year", "Year")
//!     .with_options([("2013", "2013"), ("2014", "2014")])
//!     .on_change(|v| println!("picked {}", v));
//!
//! // Controlled: the owner calls set_external_value after on_change
//! let mut month = Select::controlled("month", "Month", "January");
//! ```
//!
//! The trigger is always the first entry of the focus ring, followed by the
//! options in insertion order. Committing an option returns focus to the
//! trigger and closes the list.

use crate::config::SelectConfig;
use crate::error::{Result, WidgetError};
use crate::event::{Event, EventHandler, Key};
use crate::focus::RovingFocusRegistry;

/// Change callback, receives the committed option's value
pub type OnChange = Box<dyn FnMut(&str)>;

/// Who owns the selected value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue {
    /// Uncontrolled: the widget tracks the value itself
    Owned(Option<String>),
    /// Controlled: the owner supplies the value on every update
    External(Option<String>),
}

impl SelectValue {
    pub fn is_controlled(&self) -> bool {
        matches!(self, SelectValue::External(_))
    }

    pub fn current(&self) -> Option<&str> {
        match self {
            SelectValue::Owned(v) | SelectValue::External(v) => v.as_deref(),
        }
    }
}

/// One entry in the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Focusable parts of a select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectTarget {
    /// The combobox itself (top of the list)
    Trigger,
    /// An option by index
    Option(usize),
}

/// Dropdown select widget state
pub struct Select {
    id: String,
    label: String,
    options: Vec<SelectOption>,
    value: SelectValue,

    /// Value submitted with a surrounding form
    form_value: Option<String>,

    open: bool,
    nav: RovingFocusRegistry<SelectTarget>,
    on_change: Option<OnChange>,
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("options", &self.options)
            .field("value", &self.value)
            .field("form_value", &self.form_value)
            .field("open", &self.open)
            .finish()
    }
}

impl Select {
    /// Create an uncontrolled select showing `label` until something is picked
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_value(id.into(), label.into(), SelectValue::Owned(None))
    }

    /// Create a controlled select displaying `value`
    pub fn controlled(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::with_value(
            id.into(),
            label.into(),
            SelectValue::External(Some(value.into())),
        )
    }

    /// Create an uncontrolled select from configured defaults
    pub fn from_config(id: impl Into<String>, config: &SelectConfig) -> Self {
        let select = Self::new(id, config.label.clone());
        match &config.default_value {
            Some(default) => select.with_default(default.clone()),
            None => select,
        }
    }

    fn with_value(id: String, label: String, value: SelectValue) -> Self {
        let mut nav = RovingFocusRegistry::new();
        nav.register(SelectTarget::Trigger);
        Self {
            id,
            label,
            options: Vec::new(),
            value,
            form_value: None,
            open: false,
            nav,
            on_change: None,
        }
    }

    /// Seed the value; only an uncontrolled select displays it
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if let SelectValue::Owned(current) = &mut self.value {
            *current = Some(value.clone());
        }
        self.form_value = Some(value);
        self
    }

    /// Append one option
    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.add_option(value, label);
        self
    }

    /// Append options from `(value, label)` pairs
    pub fn with_options<I, V, L>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        for (value, label) in options {
            self.add_option(value, label);
        }
        self
    }

    /// Set change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Append an option; returns its index
    pub fn add_option(&mut self, value: impl Into<String>, label: impl Into<String>) -> usize {
        let index = self.options.len();
        self.options.push(SelectOption::new(value, label));
        self.nav.register(SelectTarget::Option(index));
        index
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn value_mode(&self) -> &SelectValue {
        &self.value
    }

    pub fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    /// Current value (owned or owner-supplied)
    pub fn value(&self) -> Option<&str> {
        self.value.current()
    }

    /// Value a surrounding form would submit
    pub fn form_value(&self) -> Option<&str> {
        self.form_value.as_deref()
    }

    /// Text the trigger shows
    pub fn displayed(&self) -> &str {
        match &self.value {
            SelectValue::External(Some(value)) => value.as_str(),
            SelectValue::Owned(Some(value)) => self
                .options
                .iter()
                .find(|option| &option.value == value)
                .map(|option| option.label.as_str())
                .unwrap_or(value.as_str()),
            SelectValue::External(None) | SelectValue::Owned(None) => self.label.as_str(),
        }
    }

    /// Push the owner's value into a controlled select
    ///
    /// Returns false (and leaves state alone) for an uncontrolled select.
    pub fn set_external_value(&mut self, value: impl Into<String>) -> bool {
        match &mut self.value {
            SelectValue::External(current) => {
                *current = Some(value.into());
                true
            }
            SelectValue::Owned(_) => {
                tracing::warn!(id = %self.id, "external value pushed into uncontrolled select");
                false
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toggle the dropdown (trigger click or Enter on the trigger)
    pub fn toggle_list(&mut self) {
        self.open = !self.open;
        tracing::trace!(id = %self.id, open = self.open, "select list toggled");
    }

    /// Option under the keyboard cursor
    pub fn highlighted_option(&self) -> Option<usize> {
        match self.nav.current() {
            Some(SelectTarget::Option(index)) => Some(*index),
            _ => None,
        }
    }

    /// Part of the select that should receive focus next
    pub fn take_focus_request(&mut self) -> Option<SelectTarget> {
        let key = self.nav.take_focus_request()?;
        self.nav.get(key).copied()
    }

    /// Commit the option at `index`; returns the committed value
    pub fn commit(&mut self, index: usize) -> Result<String> {
        let value = self
            .options
            .get(index)
            .map(|option| option.value.clone())
            .ok_or(WidgetError::UnknownOption {
                index,
                len: self.options.len(),
            })?;

        self.form_value = Some(value.clone());
        if let Some(callback) = self.on_change.as_mut() {
            callback(&value);
        }
        if let SelectValue::Owned(current) = &mut self.value {
            *current = Some(value.clone());
        }

        self.nav.focus_index(0);
        self.open = false;
        tracing::debug!(id = %self.id, %value, controlled = self.is_controlled(), "select committed");
        Ok(value)
    }

    /// Pointer click on an option
    pub fn click_option(&mut self, index: usize) -> Result<String> {
        self.commit(index)
    }
}

impl EventHandler for Select {
    fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        match key {
            Key::Enter => {
                match self.highlighted_option() {
                    Some(index) if self.open => {
                        if let Err(err) = self.commit(index) {
                            tracing::warn!(id = %self.id, %err, "highlighted option missing");
                            self.close();
                        }
                    }
                    _ => self.toggle_list(),
                }
                true
            }
            Key::Esc => {
                self.close();
                true
            }
            _ if self.open => self.nav.navigate(*key).is_some(),
            _ => false,
        }
    }

    fn on_blur(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |v: &str| sink.borrow_mut().push(v.to_string()))
    }

    fn years() -> [(&'static str, &'static str); 3] {
        [("2012", "2012"), ("2013", "2013"), ("2014", "2014")]
    }

    #[test]
    fn test_uncontrolled_commit() {
        let (calls, on_change) = recorder();
        let mut select = Select::new("year", "Year")
            .with_options(years())
            .on_change(on_change);

        assert_eq!(select.displayed(), "Year");

        select.commit(1).unwrap();
        assert_eq!(select.displayed(), "2013");
        assert_eq!(select.form_value(), Some("2013"));
        assert_eq!(*calls.borrow(), vec!["2013".to_string()]);
    }

    #[test]
    fn test_controlled_commit_keeps_owner_value() {
        let (calls, on_change) = recorder();
        let mut select = Select::controlled("year", "Year", "2013")
            .with_options(years())
            .on_change(on_change);

        select.commit(2).unwrap();
        assert_eq!(*calls.borrow(), vec!["2014".to_string()]);
        assert_eq!(select.displayed(), "2013");
        assert_eq!(select.form_value(), Some("2014"));

        assert!(select.set_external_value("2014"));
        assert_eq!(select.displayed(), "2014");
    }

    #[test]
    fn test_default_value_shows_option_label() {
        let select = Select::new("month", "Month")
            .with_options([("0", "January"), ("1", "February")])
            .with_default("1");

        assert_eq!(select.value(), Some("1"));
        assert_eq!(select.displayed(), "February");
        assert_eq!(select.form_value(), Some("1"));
    }

    #[test]
    fn test_uncontrolled_ignores_external_value() {
        let mut select = Select::new("year", "Year").with_options(years());
        assert!(!select.set_external_value("2012"));
        assert_eq!(select.displayed(), "Year");
    }

    #[test]
    fn test_commit_resets_navigation_to_trigger() {
        let mut select = Select::new("year", "Year").with_options(years());
        select.handle_event(&Event::Key(Key::Enter));
        assert!(select.is_open());

        select.handle_event(&Event::Key(Key::Down));
        select.handle_event(&Event::Key(Key::Down));
        assert_eq!(select.highlighted_option(), Some(1));
        assert_eq!(select.take_focus_request(), Some(SelectTarget::Option(1)));

        select.handle_event(&Event::Key(Key::Enter));
        assert_eq!(select.value(), Some("2013"));
        assert!(!select.is_open());
        assert_eq!(select.highlighted_option(), None);
        assert_eq!(select.take_focus_request(), Some(SelectTarget::Trigger));
    }

    #[test]
    fn test_navigation_wraps_through_trigger() {
        let mut select = Select::new("year", "Year").with_options(years());
        select.open();

        select.handle_event(&Event::Key(Key::Up));
        assert_eq!(select.highlighted_option(), Some(2));

        select.handle_event(&Event::Key(Key::Down));
        assert_eq!(select.highlighted_option(), None);

        select.handle_event(&Event::Key(Key::End));
        assert_eq!(select.highlighted_option(), Some(2));
        select.handle_event(&Event::Key(Key::Home));
        assert_eq!(select.highlighted_option(), None);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut select = Select::new("year", "Year").with_options(years());

        assert!(!select.handle_event(&Event::Key(Key::Down)));
        assert_eq!(select.highlighted_option(), None);
    }

    #[test]
    fn test_escape_and_blur_close() {
        let mut select = Select::new("year", "Year").with_options(years());

        select.toggle_list();
        assert!(select.handle_event(&Event::Key(Key::Esc)));
        assert!(!select.is_open());

        select.toggle_list();
        select.on_blur();
        assert!(!select.is_open());
    }

    #[test]
    fn test_enter_on_stale_option_closes_list() {
        let (calls, on_change) = recorder();
        let mut select = Select::new("year", "Year")
            .with_options(years())
            .on_change(on_change);

        // Ring entry with no backing option
        let stale = select.nav.register(SelectTarget::Option(9));
        select.open();
        select.nav.set_current(stale);

        assert!(select.handle_event(&Event::Key(Key::Enter)));
        assert!(!select.is_open());
        assert_eq!(select.value(), None);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_unknown_option() {
        let (calls, on_change) = recorder();
        let mut select = Select::new("year", "Year")
            .with_options(years())
            .on_change(on_change);

        let err = select.click_option(7).unwrap_err();
        assert_eq!(err, WidgetError::UnknownOption { index: 7, len: 3 });
        assert!(calls.borrow().is_empty());
    }
}
