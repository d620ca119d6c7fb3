//! Accordion - vertically stacked sections that expand and collapse
//!
//! Two modes govern which sections may be open:
//! - `Multiple`: each section toggles independently
//! - `Single`: one accordion-level slot holds the open section; opening a
//!   section implicitly closes whichever was open before
//!
//! Section headers take part in roving focus: ArrowDown/ArrowUp move between
//! headers with wrap-around, Home/End jump to the first/last header.
//!
//! # Example
//!
//! ```ignore
//! let mut accordion = Accordion::new(AccordionMode::Single);
//! let intro = accordion.add_item();
//! let faq = accordion.add_item();
//!
//! accordion.toggle(intro)?;
//! accordion.toggle(faq)?;
//! assert!(!accordion.is_open(intro));
//! assert!(accordion.is_open(faq));
//! ```

use crate::config::AccordionConfig;
use crate::error::{Result, WidgetError};
use crate::event::Key;
use crate::focus::{FocusKey, RovingFocusRegistry};
use serde::Deserialize;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of one accordion section, stable for the section's lifetime
    pub struct AccordionItemId;
}

/// How many sections may be open at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccordionMode {
    /// Every section can be expanded simultaneously
    #[default]
    Multiple,
    /// At most one section is expanded
    Single,
}

#[derive(Debug, Clone)]
struct AccordionItem {
    /// Local open flag, only consulted in `Multiple` mode
    open: bool,
    header: FocusKey,
}

/// Open-set controller plus header focus ring for one accordion
#[derive(Debug, Clone)]
pub struct Accordion {
    mode: AccordionMode,
    items: SlotMap<AccordionItemId, AccordionItem>,

    /// Source of truth in `Single` mode
    open_item: Option<AccordionItemId>,

    headers: RovingFocusRegistry<AccordionItemId>,
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new(AccordionMode::default())
    }
}

impl Accordion {
    /// Create an empty accordion
    pub fn new(mode: AccordionMode) -> Self {
        Self {
            mode,
            items: SlotMap::with_key(),
            open_item: None,
            headers: RovingFocusRegistry::new(),
        }
    }

    /// Create an accordion from configured defaults
    pub fn from_config(config: &AccordionConfig) -> Self {
        Self::new(config.mode)
    }

    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    /// Add a section; its header joins the focus ring after existing headers
    pub fn add_item(&mut self) -> AccordionItemId {
        let id = self.items.insert(AccordionItem {
            open: false,
            header: FocusKey::default(),
        });
        let header = self.headers.register(id);
        if let Some(item) = self.items.get_mut(id) {
            item.header = header;
        }
        tracing::debug!(?id, "accordion item added");
        id
    }

    /// Add a section that starts expanded
    pub fn add_open_item(&mut self) -> AccordionItemId {
        let id = self.add_item();
        self.set_open(id, true);
        id
    }

    /// Remove a section and its header
    pub fn remove_item(&mut self, id: AccordionItemId) -> Result<()> {
        let item = self.items.remove(id).ok_or_else(|| unknown(id))?;
        self.headers.unregister(item.header);
        if self.open_item == Some(id) {
            self.open_item = None;
        }
        Ok(())
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a section is expanded; unknown ids read as closed
    pub fn is_open(&self, id: AccordionItemId) -> bool {
        match self.mode {
            AccordionMode::Multiple => self.items.get(id).is_some_and(|item| item.open),
            AccordionMode::Single => self.open_item == Some(id),
        }
    }

    /// Expanded sections in header order
    pub fn open_items(&self) -> Vec<AccordionItemId> {
        self.headers
            .iter()
            .map(|(_, id)| *id)
            .filter(|id| self.is_open(*id))
            .collect()
    }

    /// Flip a section; returns its new open state
    pub fn toggle(&mut self, id: AccordionItemId) -> Result<bool> {
        if !self.items.contains_key(id) {
            return Err(unknown(id));
        }
        let open = !self.is_open(id);
        self.set_open(id, open);
        tracing::debug!(?id, open, mode = ?self.mode, "accordion item toggled");
        Ok(open)
    }

    fn set_open(&mut self, id: AccordionItemId, open: bool) {
        match self.mode {
            AccordionMode::Multiple => {
                if let Some(item) = self.items.get_mut(id) {
                    item.open = open;
                }
            }
            AccordionMode::Single => {
                if open {
                    self.open_item = Some(id);
                } else if self.open_item == Some(id) {
                    self.open_item = None;
                }
            }
        }
    }

    /// Handle a key pressed while `id`'s header has focus
    ///
    /// Returns true when the key was consumed.
    pub fn handle_key(&mut self, id: AccordionItemId, key: Key) -> Result<bool> {
        let header = self.items.get(id).map(|item| item.header).ok_or_else(|| unknown(id))?;
        if key.is_commit() {
            self.toggle(id)?;
            return Ok(true);
        }
        self.headers.set_current(header);
        Ok(self.headers.navigate(key).is_some())
    }

    /// Section whose header should receive focus next, if navigation moved it
    pub fn take_focus_request(&mut self) -> Option<AccordionItemId> {
        let key = self.headers.take_focus_request()?;
        self.headers.get(key).copied()
    }

    /// Section whose header currently holds the roving focus
    pub fn focused_item(&self) -> Option<AccordionItemId> {
        self.headers.current().copied()
    }
}

fn unknown(id: AccordionItemId) -> WidgetError {
    WidgetError::UnknownItem {
        widget: "accordion",
        id: format!("{:?}", id),
    }
}
