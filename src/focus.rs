//! Roving focus over a dynamic list of focusable items
//!
//! Exactly one item of a group is "current"; arrow keys move it with
//! wrap-around. Items live in an arena so their keys stay valid while other
//! items come and go.
//!
//! # Example
//!
//! ```ignore
//! let mut focus = RovingFocusRegistry::new();
//! let a = focus.register("header-a");
//! let b = focus.register("header-b");
//!
//! focus.move_next();
//! assert_eq!(focus.take_focus_request(), Some(b));
//!
//! focus.move_next(); // Wraps
//! assert_eq!(focus.current_key(), Some(a));
//! ```

use crate::event::Key;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle for a registered focusable item
    pub struct FocusKey;
}

/// Focus movement within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Next item, wrapping to the first (ArrowDown)
    Next,
    /// Previous item, wrapping to the last (ArrowUp)
    Previous,
    /// First item (Home)
    First,
    /// Last item (End)
    Last,
}

impl FocusDirection {
    /// Map a navigation key to a direction
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Down => Some(FocusDirection::Next),
            Key::Up => Some(FocusDirection::Previous),
            Key::Home => Some(FocusDirection::First),
            Key::End => Some(FocusDirection::Last),
            _ => None,
        }
    }
}

/// Ordered registry of focusable items with a roving current index
///
/// Every move updates the current index and records a focus request in the
/// same call; the host drains requests with [`take_focus_request`] and moves
/// real focus accordingly.
///
/// [`take_focus_request`]: RovingFocusRegistry::take_focus_request
#[derive(Debug, Clone)]
pub struct RovingFocusRegistry<T> {
    items: SlotMap<FocusKey, T>,

    /// Registration order
    order: Vec<FocusKey>,

    current: usize,

    /// Item the host should focus next
    pending_focus: Option<FocusKey>,
}

impl<T> Default for RovingFocusRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RovingFocusRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
            order: Vec::new(),
            current: 0,
            pending_focus: None,
        }
    }

    /// Remove an item, keeping the current index on the same item if possible
    pub fn unregister(&mut self, key: FocusKey) -> Option<T> {
        let item = self.items.remove(key)?;
        if let Some(pos) = self.order.iter().position(|k| *k == key) {
            self.order.remove(pos);
            if pos < self.current {
                self.current -= 1;
            }
        }
        if self.current >= self.order.len() {
            self.current = self.order.len().saturating_sub(1);
        }
        if self.pending_focus == Some(key) {
            self.pending_focus = None;
        }
        Some(item)
    }

    /// Number of registered items
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Current index, or None when empty
    pub fn current_index(&self) -> Option<usize> {
        if self.order.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn current_key(&self) -> Option<FocusKey> {
        self.order.get(self.current).copied()
    }

    pub fn current(&self) -> Option<&T> {
        self.current_key().and_then(|key| self.items.get(key))
    }

    pub fn get(&self, key: FocusKey) -> Option<&T> {
        self.items.get(key)
    }

    pub fn contains(&self, key: FocusKey) -> bool {
        self.items.contains_key(key)
    }

    /// Position of an item in registration order
    pub fn index_of(&self, key: FocusKey) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    /// Key at a position
    pub fn key_at(&self, index: usize) -> Option<FocusKey> {
        self.order.get(index).copied()
    }

    /// Items in registration order
    pub fn iter(&self) -> impl Iterator<Item = (FocusKey, &T)> {
        self.order
            .iter()
            .filter_map(|key| self.items.get(*key).map(|item| (*key, item)))
    }

    /// Move to the next item, wrapping past the end
    pub fn move_next(&mut self) -> Option<FocusKey> {
        let len = self.order.len();
        if len == 0 {
            return None;
        }
        self.focus_index((self.current + 1) % len)
    }

    /// Move to the previous item, wrapping past the start
    pub fn move_prev(&mut self) -> Option<FocusKey> {
        let len = self.order.len();
        if len == 0 {
            return None;
        }
        self.focus_index((self.current + len - 1) % len)
    }

    pub fn move_first(&mut self) -> Option<FocusKey> {
        self.focus_index(0)
    }

    pub fn move_last(&mut self) -> Option<FocusKey> {
        let last = self.order.len().checked_sub(1)?;
        self.focus_index(last)
    }

    /// Move focus in a direction
    pub fn move_focus(&mut self, direction: FocusDirection) -> Option<FocusKey> {
        match direction {
            FocusDirection::Next => self.move_next(),
            FocusDirection::Previous => self.move_prev(),
            FocusDirection::First => self.move_first(),
            FocusDirection::Last => self.move_last(),
        }
    }

    /// Handle a navigation key; returns the newly focused item if the key moved focus
    pub fn navigate(&mut self, key: Key) -> Option<FocusKey> {
        FocusDirection::from_key(key).and_then(|direction| self.move_focus(direction))
    }

    /// Make the item at `index` current and request focus on it
    pub fn focus_index(&mut self, index: usize) -> Option<FocusKey> {
        let key = *self.order.get(index)?;
        self.current = index;
        self.pending_focus = Some(key);
        tracing::trace!(index, "roving focus moved");
        Some(key)
    }

    /// Make an item current without requesting focus (it already has it)
    pub fn set_current(&mut self, key: FocusKey) -> bool {
        match self.index_of(key) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    /// Take the outstanding focus request, if any
    pub fn take_focus_request(&mut self) -> Option<FocusKey> {
        self.pending_focus.take()
    }

    /// Peek at the outstanding focus request
    pub fn focus_request(&self) -> Option<FocusKey> {
        self.pending_focus
    }
}

impl<T: PartialEq> RovingFocusRegistry<T> {
    /// Register an item; an already registered item keeps its key and position
    pub fn register(&mut self, item: T) -> FocusKey {
        if let Some(key) = self.find(&item) {
            return key;
        }
        let key = self.items.insert(item);
        self.order.push(key);
        key
    }

    /// Look up an item's key by identity
    pub fn find(&self, item: &T) -> Option<FocusKey> {
        self.items
            .iter()
            .find(|(_, existing)| *existing == item)
            .map(|(key, _)| key)
    }
}
