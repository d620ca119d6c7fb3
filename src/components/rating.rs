//! Rating - a row of N items where the highlighted prefix shows the score
//!
//! Hover takes precedence over the committed selection: pointing at item `k`
//! highlights `0..=k`, leaving collapses back to the selection (or clears it
//! when nothing is committed). ArrowLeft/ArrowRight walk the row without
//! wrapping; Enter/Space commit the focused item.

use crate::config::RatingConfig;
use crate::error::{Result, WidgetError};
use crate::event::{Event, EventHandler, Key};

/// Change callback, receives the 1-based rating
pub type OnRate = Box<dyn FnMut(u32)>;

/// A committed rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingSelection {
    /// 1-based score
    pub value: u32,
    /// 0-based item index
    pub index: usize,
}

/// Rating widget state
pub struct Rating {
    len: usize,
    hover: Option<usize>,
    selection: Option<RatingSelection>,

    /// Item holding keyboard focus
    focused: Option<usize>,

    on_change: Option<OnRate>,
}

impl std::fmt::Debug for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rating")
            .field("len", &self.len)
            .field("hover", &self.hover)
            .field("selection", &self.selection)
            .field("focused", &self.focused)
            .finish()
    }
}

impl Rating {
    /// Create a rating with `len` items
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(WidgetError::EmptyRating);
        }
        Ok(Self {
            len,
            hover: None,
            selection: None,
            focused: None,
            on_change: None,
        })
    }

    pub fn from_config(config: &RatingConfig) -> Result<Self> {
        Self::new(config.items)
    }

    /// Start with an existing 1-based score (out-of-range scores are ignored)
    pub fn with_value(mut self, value: u32) -> Self {
        let index = (value as usize).checked_sub(1).filter(|i| *i < self.len);
        self.selection = index.map(|index| RatingSelection { value, index });
        self
    }

    /// Set change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(u32) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover
    }

    pub fn selection(&self) -> Option<RatingSelection> {
        self.selection
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Whether item `index` is drawn highlighted
    pub fn is_highlighted(&self, index: usize) -> bool {
        match (self.hover, self.selection) {
            (Some(hover), _) => index <= hover,
            (None, Some(selection)) => index <= selection.index,
            (None, None) => false,
        }
    }

    /// Length of the highlighted prefix
    pub fn highlighted_len(&self) -> usize {
        match (self.hover, self.selection) {
            (Some(hover), _) => hover + 1,
            (None, Some(selection)) => selection.index + 1,
            (None, None) => 0,
        }
    }

    pub fn pointer_enter(&mut self, index: usize) {
        if index < self.len {
            self.hover = Some(index);
        }
    }

    /// Pointer left the row; highlight falls back to the selection
    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    /// Pointer click on an item
    pub fn click(&mut self, index: usize) {
        self.commit(index);
    }

    /// Commit item `index` as the rating
    pub fn commit(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        let value = index as u32 + 1;
        self.selection = Some(RatingSelection { value, index });
        self.focused = Some(index);
        tracing::debug!(value, "rating committed");
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }

    /// Move keyboard focus by one item, clamped to the row
    fn step(&mut self, forward: bool) {
        let base = self.focused.or(self.selection.map(|s| s.index));
        let next = match base {
            None => 0,
            Some(i) if forward => (i + 1).min(self.len - 1),
            Some(i) => i.saturating_sub(1),
        };
        self.focused = Some(next);
        self.hover = Some(next);
    }
}

impl EventHandler for Rating {
    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(Key::Right) => {
                self.step(true);
                true
            }
            Event::Key(Key::Left) => {
                self.step(false);
                true
            }
            Event::Key(key) if key.is_commit() => match self.focused {
                Some(index) => {
                    self.commit(index);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn on_blur(&mut self) {
        self.focused = None;
        self.hover = None;
    }
}
